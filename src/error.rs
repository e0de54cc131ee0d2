//! Error types for md2docx.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for md2docx operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting Markdown to DOCX.
///
/// Parsing itself never fails; every variant belongs to reading a source,
/// packaging the output, or writing it.
#[derive(Error, Debug)]
pub enum Error {
    /// The Markdown source could not be read.
    #[error("Failed to read {}: {source}", .path.display())]
    SourceUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The Markdown source is not valid UTF-8.
    #[error("{} is not valid UTF-8: {source}", .path.display())]
    Encoding {
        path: PathBuf,
        source: std::string::FromUtf8Error,
    },

    /// Error occurred during file I/O operations.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The DOCX package could not be assembled or written.
    #[error("Failed to write DOCX: {0}")]
    DocxWrite(String),

    /// The caller passed an unusable input, such as a batch input that is not a directory.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
