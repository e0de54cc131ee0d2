mod docx;

use crate::core::ast::Document;
use crate::Result;

pub use docx::DocxRenderer;

/// Turns a finished document into the bytes of a persisted file.
///
/// Implementations render blocks and spans in the order given and never
/// merge or reorder blocks.
pub trait Renderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>>;
}
