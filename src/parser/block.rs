//! Block segmenter - classifies raw lines into typed blocks.
//!
//! A single forward pass driven by an explicit cursor. Fenced code, table
//! runs and list runs consume several lines at once; every other rule
//! consumes exactly one line, so the cursor always advances.

use super::inline::tokenize;
use super::table::build_table;
use crate::core::ast::{Block, Document, Span};
use once_cell::sync::Lazy;
use regex::Regex;

static NUMBERED_MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[0-9]+\.\s*").expect("numbered marker pattern is valid"));

const FENCE: &str = "```";
const RULE: &str = "---";

/// What a single line looks like outside of a code fence.
///
/// Variants are listed in the order they are checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LineKind {
    Fence,
    TableRow,
    Heading,
    Blank,
    BulletItem,
    NumberedItem,
    Text,
}

impl LineKind {
    fn of(line: &str) -> Self {
        let trimmed = line.trim();
        if trimmed.starts_with(FENCE) {
            LineKind::Fence
        } else if trimmed.starts_with('|') {
            LineKind::TableRow
        } else if line.starts_with('#') {
            LineKind::Heading
        } else if trimmed.is_empty() {
            LineKind::Blank
        } else if trimmed.starts_with('-') && trimmed != RULE {
            LineKind::BulletItem
        } else if NUMBERED_MARKER.is_match(trimmed) {
            LineKind::NumberedItem
        } else {
            LineKind::Text
        }
    }
}

/// Segments lines into a document.
pub fn segment<S: AsRef<str>>(lines: &[S]) -> Document {
    BlockSegmenter::new(lines).run()
}

/// Cursor-driven scanner over the input lines.
struct BlockSegmenter<'a, S> {
    lines: &'a [S],
    cursor: usize,
    blocks: Vec<Block>,
}

impl<'a, S: AsRef<str>> BlockSegmenter<'a, S> {
    fn new(lines: &'a [S]) -> Self {
        Self {
            lines,
            cursor: 0,
            blocks: Vec::new(),
        }
    }

    fn run(mut self) -> Document {
        let lines = self.lines;
        while self.cursor < lines.len() {
            let line = lines[self.cursor].as_ref();
            match LineKind::of(line) {
                LineKind::Fence => self.code_block(),
                LineKind::TableRow => self.table(),
                LineKind::Heading => self.heading(line),
                LineKind::Blank => {
                    self.blocks.push(Block::BlankParagraph);
                    self.cursor += 1;
                }
                LineKind::BulletItem => {
                    let items = self.list_run(LineKind::BulletItem, bullet_text);
                    self.blocks.push(Block::BulletList { items });
                }
                LineKind::NumberedItem => {
                    let items = self.list_run(LineKind::NumberedItem, numbered_text);
                    self.blocks.push(Block::NumberedList { items });
                }
                LineKind::Text => {
                    self.blocks.push(Block::Paragraph {
                        spans: tokenize(line.trim()),
                    });
                    self.cursor += 1;
                }
            }
        }
        Document::new(self.blocks)
    }

    /// Consumes an opening fence, the verbatim body and the closing fence.
    ///
    /// An unterminated fence runs to the end of input. Empty bodies emit
    /// nothing.
    fn code_block(&mut self) {
        self.cursor += 1;
        let lines = self.lines;
        let mut body = Vec::new();
        while let Some(line) = lines.get(self.cursor).map(|l| l.as_ref()) {
            self.cursor += 1;
            if line.trim().starts_with(FENCE) {
                break;
            }
            body.push(line.to_string());
        }
        if !body.is_empty() {
            self.blocks.push(Block::CodeBlock { lines: body });
        }
    }

    fn table(&mut self) {
        let lines = self.lines;
        let start = self.cursor;
        self.advance_while(LineKind::TableRow);
        let run = &lines[start..self.cursor];

        // A lone `|` line is consumed without output.
        if let Some(table) = build_table(run) {
            self.blocks.push(table);
        }
    }

    fn heading(&mut self, line: &str) {
        self.cursor += 1;
        let text = line.trim_start_matches('#');
        let marks = line.len() - text.len();
        let text = text.trim();
        if text.is_empty() {
            return;
        }
        self.blocks.push(Block::Heading {
            level: marks.min(6) as u8,
            spans: tokenize(text),
        });
    }

    fn list_run(&mut self, kind: LineKind, item_text: fn(&str) -> &str) -> Vec<Vec<Span>> {
        let start = self.cursor;
        self.advance_while(kind);
        self.lines[start..self.cursor]
            .iter()
            .map(|line| tokenize(item_text(line.as_ref().trim())))
            .collect()
    }

    fn advance_while(&mut self, kind: LineKind) {
        while self
            .lines
            .get(self.cursor)
            .is_some_and(|line| LineKind::of(line.as_ref()) == kind)
        {
            self.cursor += 1;
        }
    }
}

fn bullet_text(trimmed: &str) -> &str {
    trimmed.strip_prefix('-').unwrap_or(trimmed).trim_start()
}

fn numbered_text(trimmed: &str) -> &str {
    match NUMBERED_MARKER.find(trimmed) {
        Some(marker) => &trimmed[marker.end()..],
        None => trimmed,
    }
}
