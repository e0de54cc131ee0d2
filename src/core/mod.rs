pub mod ast;

pub use ast::{plain_text, Block, Cell, Document, Span};
