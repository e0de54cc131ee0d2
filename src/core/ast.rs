//! Document tree produced by the parser and consumed by renderers.

/// An ordered sequence of blocks. Order is rendering order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    pub blocks: Vec<Block>,
}

impl Document {
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Block> {
        self.blocks.iter()
    }
}

impl<'a> IntoIterator for &'a Document {
    type Item = &'a Block;
    type IntoIter = std::slice::Iter<'a, Block>;

    fn into_iter(self) -> Self::IntoIter {
        self.blocks.iter()
    }
}

/// A cell of a table row: the inline spans of one cell.
pub type Cell = Vec<Span>;

/// A top-level structural unit of the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// Level is always within `1..=6`.
    Heading { level: u8, spans: Vec<Span> },
    Paragraph { spans: Vec<Span> },
    /// Verbatim lines, fence lines excluded.
    CodeBlock { lines: Vec<String> },
    BulletList { items: Vec<Vec<Span>> },
    NumberedList { items: Vec<Vec<Span>> },
    /// Row 0 is the header row. Every row has the header's column count.
    Table { rows: Vec<Vec<Cell>> },
    /// An explicit empty paragraph kept for vertical spacing.
    BlankParagraph,
}

impl Block {
    /// Visits every span sequence of the block in source order.
    ///
    /// Code blocks carry no spans and yield nothing.
    pub fn span_runs(&self) -> Vec<&[Span]> {
        match self {
            Block::Heading { spans, .. } | Block::Paragraph { spans } => vec![spans.as_slice()],
            Block::BulletList { items } | Block::NumberedList { items } => {
                items.iter().map(Vec::as_slice).collect()
            }
            Block::Table { rows } => rows
                .iter()
                .flat_map(|row| row.iter().map(Vec::as_slice))
                .collect(),
            Block::CodeBlock { .. } | Block::BlankParagraph => Vec::new(),
        }
    }
}

/// An inline run of text with a single style. Spans never nest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Span {
    Plain(String),
    Bold(String),
    Italic(String),
    Code(String),
    Link { label: String, url: String },
}

impl Span {
    /// The visible text of the span; for links this is the label.
    pub fn text(&self) -> &str {
        match self {
            Span::Plain(text) | Span::Bold(text) | Span::Italic(text) | Span::Code(text) => text,
            Span::Link { label, .. } => label,
        }
    }

    pub fn is_plain(&self) -> bool {
        matches!(self, Span::Plain(_))
    }
}

/// Concatenates the visible text of a span sequence, markup removed.
pub fn plain_text(spans: &[Span]) -> String {
    spans.iter().map(Span::text).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_text_drops_markup() {
        let spans = vec![
            Span::Bold("a".to_string()),
            Span::Plain(" and ".to_string()),
            Span::Link {
                label: "go".to_string(),
                url: "http://x".to_string(),
            },
        ];
        assert_eq!(plain_text(&spans), "a and go");
    }

    #[test]
    fn test_span_runs_of_table_walks_cells_row_major() {
        let block = Block::Table {
            rows: vec![
                vec![vec![Span::Plain("H1".into())], vec![Span::Plain("H2".into())]],
                vec![vec![Span::Plain("a".into())], Vec::new()],
            ],
        };
        let texts: Vec<String> = block.span_runs().into_iter().map(plain_text).collect();
        assert_eq!(texts, vec!["H1", "H2", "a", ""]);
    }

    #[test]
    fn test_code_block_has_no_span_runs() {
        let block = Block::CodeBlock {
            lines: vec!["let x = 1;".to_string()],
        };
        assert!(block.span_runs().is_empty());
    }
}
