//! Markdown parser: block segmentation followed by inline tokenization.
//!
//! Both stages are total functions. Unrecognized or malformed markup never
//! fails the parse; it degrades to paragraphs and plain text.

mod block;
mod inline;
mod table;

use crate::core::ast::Document;

pub use self::block::segment;
pub use self::inline::tokenize;

/// Parses a whole Markdown document.
///
/// Lines are split on `'\n'` only; a trailing `'\r'` is left in place and
/// disappears wherever a rule trims its line.
pub fn parse(markdown: &str) -> Document {
    let lines: Vec<&str> = markdown.split('\n').collect();
    segment(&lines)
}
