//! Conversion of a single Markdown document to DOCX.

use crate::core::ast::Document;
use crate::error::Error;
use crate::parser;
use crate::render::{DocxRenderer, Renderer};
use crate::{ConvertOptions, Result};
use std::path::Path;

/// Main converter struct that orchestrates Markdown to DOCX conversion.
pub struct MarkdownToDocx {
    renderer: DocxRenderer,
}

impl MarkdownToDocx {
    /// Creates a new converter with the given options.
    pub fn new(options: ConvertOptions) -> Self {
        Self {
            renderer: DocxRenderer::new(options),
        }
    }

    /// Creates a new converter with default options.
    pub fn with_defaults() -> Self {
        Self::new(ConvertOptions::default())
    }

    pub fn options(&self) -> &ConvertOptions {
        self.renderer.options()
    }

    /// Reads and parses a Markdown file.
    ///
    /// Fails only when the source cannot be read or is not UTF-8; the parse
    /// itself always succeeds.
    pub fn parse_file<P: AsRef<Path>>(&self, path: P) -> Result<Document> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| Error::SourceUnreadable {
            path: path.to_path_buf(),
            source,
        })?;
        let markdown = String::from_utf8(bytes).map_err(|source| Error::Encoding {
            path: path.to_path_buf(),
            source,
        })?;

        let document = parser::parse(&markdown);
        log::debug!("parsed {}: {} blocks", path.display(), document.len());
        Ok(document)
    }

    /// Converts Markdown text to the bytes of a DOCX file.
    pub fn convert_str(&self, markdown: &str) -> Result<Vec<u8>> {
        self.renderer.render(&parser::parse(markdown))
    }

    /// Converts a Markdown file and writes the DOCX file to `output`.
    ///
    /// # Arguments
    /// * `input` - Path to the Markdown file
    /// * `output` - Destination path; an existing file is overwritten
    pub fn convert<P: AsRef<Path>, Q: AsRef<Path>>(&self, input: P, output: Q) -> Result<()> {
        let document = self.parse_file(input)?;
        let bytes = self.renderer.render(&document)?;
        std::fs::write(output.as_ref(), bytes)?;
        Ok(())
    }
}

impl Default for MarkdownToDocx {
    fn default() -> Self {
        Self::with_defaults()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::time::{SystemTime, UNIX_EPOCH};

    fn temp_path(name: &str) -> PathBuf {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .expect("system time must be after UNIX_EPOCH")
            .as_nanos();
        std::env::temp_dir().join(format!(
            "md2docx_converter_{}_{}_{}",
            std::process::id(),
            nanos,
            name
        ))
    }

    #[test]
    fn test_missing_source_is_unreadable() {
        let converter = MarkdownToDocx::with_defaults();
        let err = converter
            .parse_file(temp_path("missing.md"))
            .expect_err("missing file must fail");
        assert!(matches!(err, Error::SourceUnreadable { .. }));
    }

    #[test]
    fn test_invalid_utf8_is_an_encoding_error() {
        let path = temp_path("latin1.md");
        std::fs::write(&path, [b'a', 0xff, b'b']).expect("write temp file");

        let result = MarkdownToDocx::with_defaults().parse_file(&path);
        let _ = std::fs::remove_file(&path);

        assert!(matches!(result, Err(Error::Encoding { .. })));
    }

    #[test]
    fn test_convert_writes_zip() {
        let input = temp_path("doc.md");
        let output = temp_path("doc.docx");
        std::fs::write(&input, "# Hi\n\n- a\n- b\n").expect("write temp file");

        MarkdownToDocx::with_defaults()
            .convert(&input, &output)
            .expect("conversion should work");
        let bytes = std::fs::read(&output).expect("output exists");
        let _ = std::fs::remove_file(&input);
        let _ = std::fs::remove_file(&output);

        assert!(bytes.starts_with(b"PK"));
    }
}
