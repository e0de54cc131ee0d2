//! DOCX renderer - assembles an rs-docx document and writes it as a package.

mod body;
mod styles;

use self::body::BodyWriter;
use self::styles::parse_error;
use crate::core::ast::Document;
use crate::render::Renderer;
use crate::{ConvertOptions, Result};
use hard_xml::XmlRead;
use rs_docx::styles::Styles;
use rs_docx::Docx;
use std::io::Cursor;

/// Renders documents to `.docx` bytes.
#[derive(Debug, Clone, Default)]
pub struct DocxRenderer {
    options: ConvertOptions,
}

impl DocxRenderer {
    pub fn new(options: ConvertOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ConvertOptions {
        &self.options
    }
}

impl Renderer for DocxRenderer {
    fn render(&self, document: &Document) -> Result<Vec<u8>> {
        let mut writer = BodyWriter::new(&self.options)?;
        for block in document {
            writer.write_block(block);
        }
        let body = writer.finish();

        let stylesheet = styles::stylesheet(&self.options);
        let mut docx = Docx {
            styles: Styles::from_str(&stylesheet).map_err(parse_error)?,
            numbering: Some(styles::numbering(body.numbered_lists)),
            document_rels: Some(styles::document_rels(&body.links)?),
            ..Default::default()
        };
        docx.document.body.content.extend(body.content);

        let mut cursor = Cursor::new(Vec::new());
        docx.write(&mut cursor).map_err(parse_error)?;
        Ok(cursor.into_inner())
    }
}
