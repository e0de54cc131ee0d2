//! Body writer - builds paragraphs, runs and tables for each block.

use super::styles::{parse_error, BULLET_NUM_ID, FIRST_HYPERLINK_REL};
use crate::core::ast::{Block, Cell, Span};
use crate::{ConvertOptions, Result};
use hard_xml::XmlRead;
use rs_docx::document::{
    BodyContent, Break, Hyperlink, Paragraph, ParagraphContent, Run, RunContent, Table,
    TableCell, TableRow, Text,
};
use rs_docx::formatting::{
    CharacterProperty, NumberingProperty, ParagraphProperty, ParagraphStyleId,
};

/// Output of a body pass, plus what the document parts need to know about it.
#[derive(Debug, Default)]
pub(crate) struct Body {
    pub content: Vec<BodyContent<'static>>,
    /// Hyperlink targets; entry `i` has relationship id `FIRST_HYPERLINK_REL + i`.
    pub links: Vec<String>,
    /// Number of numbered lists, each with its own restarting numbering instance.
    pub numbered_lists: usize,
}

/// Character properties for each span kind.
struct RunStyles {
    bold: CharacterProperty<'static>,
    italic: CharacterProperty<'static>,
    code: CharacterProperty<'static>,
    link: CharacterProperty<'static>,
}

impl RunStyles {
    fn load() -> Result<Self> {
        let parse = |xml: &'static str| CharacterProperty::from_str(xml).map_err(parse_error);
        Ok(Self {
            bold: parse("<w:rPr><w:b/></w:rPr>")?,
            italic: parse("<w:rPr><w:i/></w:rPr>")?,
            code: parse("<w:rPr><w:rStyle w:val=\"CodeChar\"/></w:rPr>")?,
            link: parse("<w:rPr><w:rStyle w:val=\"Hyperlink\"/></w:rPr>")?,
        })
    }
}

pub(crate) struct BodyWriter<'a> {
    options: &'a ConvertOptions,
    styles: RunStyles,
    body: Body,
}

impl<'a> BodyWriter<'a> {
    pub fn new(options: &'a ConvertOptions) -> Result<Self> {
        Ok(Self {
            options,
            styles: RunStyles::load()?,
            body: Body::default(),
        })
    }

    pub fn finish(self) -> Body {
        self.body
    }

    pub fn write_block(&mut self, block: &Block) {
        match block {
            Block::Heading { level, spans } => {
                let style = format!("Heading{}", (*level).clamp(1, 6));
                let para = self.paragraph(spans, false);
                self.push(para.property(paragraph_style(style, None)));
            }
            Block::Paragraph { spans } => {
                let para = self.paragraph(spans, false);
                self.push(para);
            }
            Block::BlankParagraph => self.push(Paragraph::default()),
            Block::CodeBlock { lines } => self.push(code_block(lines)),
            Block::BulletList { items } => {
                for item in items {
                    let para = self.paragraph(item, false);
                    self.push(para.property(paragraph_style("ListBullet", Some(BULLET_NUM_ID))));
                }
            }
            Block::NumberedList { items } => {
                self.body.numbered_lists += 1;
                let num_id = BULLET_NUM_ID + self.body.numbered_lists;
                for item in items {
                    let para = self.paragraph(item, false);
                    self.push(para.property(paragraph_style("ListNumber", Some(num_id))));
                }
            }
            Block::Table { rows } => {
                let table = self.table(rows);
                self.body.content.push(BodyContent::Table(table));
            }
        }
    }

    fn push(&mut self, para: Paragraph<'static>) {
        self.body.content.push(BodyContent::Paragraph(para));
    }

    fn paragraph(&mut self, spans: &[Span], force_bold: bool) -> Paragraph<'static> {
        let mut para = Paragraph::default();
        for span in spans {
            let content = self.span(span, force_bold);
            para.content.push(content);
        }
        para
    }

    /// Every cell holds exactly one paragraph, even when it has no spans.
    fn table(&mut self, rows: &[Vec<Cell>]) -> Table<'static> {
        let mut table = Table::default();
        for (row_idx, row) in rows.iter().enumerate() {
            let bold = row_idx == 0 && self.options.bold_table_header;
            let mut table_row = TableRow::default();
            for cell in row {
                let para = self.paragraph(cell, bold);
                table_row = table_row.push_cell(TableCell::paragraph(para));
            }
            table = table.push_row(table_row);
        }
        table
    }

    fn span(&mut self, span: &Span, force_bold: bool) -> ParagraphContent<'static> {
        let (text, property) = match span {
            Span::Plain(text) => (text, None),
            Span::Bold(text) => (text, Some(&self.styles.bold)),
            Span::Italic(text) => (text, Some(&self.styles.italic)),
            Span::Code(text) => (text, Some(&self.styles.code)),
            Span::Link { label, url } => {
                let run = self.run(label, Some(&self.styles.link), force_bold);
                if !self.options.hyperlinks || url.trim().is_empty() {
                    return ParagraphContent::Run(run);
                }
                let rel_id = self.hyperlink_rel(url);
                return ParagraphContent::Link(Hyperlink {
                    id: Some(format!("rId{}", rel_id).into()),
                    content: vec![run],
                    ..Default::default()
                });
            }
        };
        ParagraphContent::Run(self.run(text, property, force_bold))
    }

    fn run(
        &self,
        text: &str,
        property: Option<&CharacterProperty<'static>>,
        force_bold: bool,
    ) -> Run<'static> {
        let mut property = property.cloned();
        if force_bold {
            property.get_or_insert_with(CharacterProperty::default).bold =
                self.styles.bold.bold.clone();
        }

        let mut run = Run::default();
        run.property = property;
        run.content.push(RunContent::Text(Text::from(xml_chars(text))));
        run
    }

    /// Relationship id for a hyperlink target; repeated targets share one.
    fn hyperlink_rel(&mut self, url: &str) -> usize {
        let links = &mut self.body.links;
        let index = match links.iter().position(|known| known == url) {
            Some(index) => index,
            None => {
                links.push(url.to_string());
                links.len() - 1
            }
        };
        FIRST_HYPERLINK_REL + index
    }
}

fn paragraph_style(
    style_id: impl Into<String>,
    num_id: Option<usize>,
) -> ParagraphProperty<'static> {
    ParagraphProperty {
        style_id: Some(ParagraphStyleId {
            value: style_id.into().into(),
        }),
        numbering: num_id.map(|id| NumberingProperty::from((id as isize, 0isize))),
        ..Default::default()
    }
}

/// One paragraph in the code block style; lines after the first start with a break.
fn code_block(lines: &[String]) -> Paragraph<'static> {
    let mut para = Paragraph::default().property(paragraph_style("CodeBlock", None));
    for (i, line) in lines.iter().enumerate() {
        let mut run = Run::default();
        if i > 0 {
            run.content.push(RunContent::Break(Break::default()));
        }
        run.content.push(RunContent::Text(Text::from(xml_chars(line))));
        para.content.push(ParagraphContent::Run(run));
    }
    para
}

/// Drops characters XML 1.0 cannot carry.
fn xml_chars(text: &str) -> String {
    text.chars()
        .filter(|c| matches!(c, '\t' | '\n' | '\r') || !c.is_control())
        .filter(|c| !matches!(c, '\u{FFFE}' | '\u{FFFF}'))
        .collect()
}
