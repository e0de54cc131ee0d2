//! # md2docx
//!
//! Markdown to DOCX converter.
//!
//! The parser turns a restricted Markdown dialect into a flat document tree
//! (headings, paragraphs, lists, tables, code blocks) whose inline text is a
//! sequence of styled spans. The DOCX renderer turns that tree into a Word
//! document.
//!
//! ## Example
//!
//! ```no_run
//! use md2docx::{ConvertOptions, MarkdownToDocx};
//!
//! let options = ConvertOptions {
//!     code_font: "Consolas".into(),
//!     ..Default::default()
//! };
//!
//! let converter = MarkdownToDocx::new(options);
//! converter.convert("notes.md", "notes.docx").unwrap();
//! ```
//!
//! The parser can be used on its own:
//!
//! ```
//! use md2docx::core::ast::{Block, Span};
//!
//! let doc = md2docx::parser::parse("# Title");
//! assert_eq!(
//!     doc.blocks,
//!     vec![Block::Heading { level: 1, spans: vec![Span::Plain("Title".into())] }]
//! );
//! ```

pub mod batch;
pub mod converter;
pub mod core;
pub mod error;
pub mod parser;
pub mod render;

pub use batch::{convert_directory, BatchReport};
pub use converter::MarkdownToDocx;
pub use error::{Error, Result};

/// Options for rendering the DOCX output.
#[derive(Debug, Clone)]
pub struct ConvertOptions {
    /// Monospace font for code blocks and code spans.
    pub code_font: String,
    /// Code block font size in points.
    pub code_font_size: u32,
    /// Background fill of code blocks, as a hex RGB value.
    pub code_shading: String,
    /// Text color of inline code, as a hex RGB value.
    pub code_color: String,
    /// Text color of links, as a hex RGB value.
    pub link_color: String,
    /// Style id applied to every table.
    pub table_style: String,
    /// Whether header row cells are forced bold.
    pub bold_table_header: bool,
    /// Whether links become clickable hyperlinks or only styled text.
    pub hyperlinks: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            code_font: "Courier New".to_string(),
            code_font_size: 10,
            code_shading: "E8E8E8".to_string(),
            code_color: "C00000".to_string(),
            link_color: "0000FF".to_string(),
            table_style: "TableGrid".to_string(),
            bold_table_header: true,
            hyperlinks: true,
        }
    }
}
