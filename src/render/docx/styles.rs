//! Document-level parts: stylesheet, numbering definitions, relationships.

use crate::{ConvertOptions, Error, Result};
use hard_xml::XmlRead;
use rs_docx::document::{
    AbstractNum, AbstractNumId, Level, LevelStart, LevelText, Num, NumFmt, Numbering,
};
use rs_docx::rels::Relationships;
use std::borrow::Cow;

/// Numbering instance shared by every bullet list.
pub(crate) const BULLET_NUM_ID: usize = 1;
/// `rId1` is styles, `rId2` numbering; hyperlinks follow.
pub(crate) const FIRST_HYPERLINK_REL: usize = 3;

const BULLET_ABSTRACT_ID: usize = 0;

const DOCUMENT_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId1" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles" Target="styles.xml"/>
<Relationship Id="rId2" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering" Target="numbering.xml"/>
</Relationships>"#;

const HYPERLINK_RELS: &str = r#"<Relationships xmlns="http://schemas.openxmlformats.org/package/2006/relationships">
<Relationship Id="rId0" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink" Target="" TargetMode="External"/>
</Relationships>"#;

/// Heading run sizes in half-points, level 1 first.
const HEADING_SIZES: [u32; 6] = [32, 28, 26, 24, 22, 22];

pub(crate) fn parse_error(e: impl std::fmt::Debug) -> Error {
    Error::DocxWrite(format!("{:?}", e))
}

/// Relationships of the main document part: styles, numbering, then one
/// external hyperlink per entry of `links`.
pub(crate) fn document_rels(links: &[String]) -> Result<Relationships<'static>> {
    let mut rels = Relationships::from_str(DOCUMENT_RELS).map_err(parse_error)?;
    let prototype = Relationships::from_str(HYPERLINK_RELS)
        .map_err(parse_error)?
        .relationships
        .pop()
        .ok_or_else(|| Error::DocxWrite("hyperlink relationship template is empty".into()))?;

    for (i, url) in links.iter().enumerate() {
        let mut rel = prototype.clone();
        rel.id = format!("rId{}", FIRST_HYPERLINK_REL + i).into();
        rel.target = url.clone().into();
        rels.relationships.push(rel);
    }
    Ok(rels)
}

/// One bullet instance plus one decimal instance per numbered list.
///
/// Every numbered list owns its abstract definition, so each starts at 1.
pub(crate) fn numbering(numbered_lists: usize) -> Numbering<'static> {
    let instance = |num_id: usize, abstract_id: usize| Num {
        num_id: Some(num_id as _),
        abstract_num_id: Some(AbstractNumId {
            value: Some(abstract_id as _),
        }),
        ..Default::default()
    };

    let mut abstract_numberings = vec![single_level(BULLET_ABSTRACT_ID, "bullet", "\u{2022}")];
    let mut numberings = vec![instance(BULLET_NUM_ID, BULLET_ABSTRACT_ID)];

    for list in 1..=numbered_lists {
        let abstract_id = BULLET_ABSTRACT_ID + list;
        abstract_numberings.push(single_level(abstract_id, "decimal", "%1."));
        numberings.push(instance(BULLET_NUM_ID + list, abstract_id));
    }

    Numbering {
        abstract_numberings,
        numberings,
    }
}

fn single_level(id: usize, format: &'static str, text: &'static str) -> AbstractNum<'static> {
    AbstractNum {
        abstract_num_id: Some(id as _),
        levels: vec![Level {
            i_level: Some(0),
            start: Some(LevelStart { value: Some(1) }),
            number_format: Some(NumFmt {
                value: Cow::Borrowed(format),
            }),
            level_text: Some(LevelText {
                value: Some(Cow::Borrowed(text)),
            }),
            ..Default::default()
        }],
        ..Default::default()
    }
}

/// Keeps only the characters allowed in `keep`; falls back when nothing is left.
fn option_value(value: &str, keep: fn(char) -> bool, fallback: &str) -> String {
    let filtered: String = value.trim().chars().filter(|c| keep(*c)).collect();
    if filtered.is_empty() {
        fallback.to_string()
    } else {
        filtered
    }
}

fn is_font_char(c: char) -> bool {
    c.is_alphanumeric() || matches!(c, ' ' | '-' | '_' | '.')
}

fn is_style_id_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '_')
}

fn is_hex_char(c: char) -> bool {
    c.is_ascii_hexdigit()
}

/// WordprocessingML stylesheet for every style the body refers to.
///
/// The table style is the default table style, so tables pick it up
/// without a per-table reference.
pub(crate) fn stylesheet(options: &ConvertOptions) -> String {
    let defaults = ConvertOptions::default();
    let code_font = option_value(&options.code_font, is_font_char, &defaults.code_font);
    let code_shading = option_value(&options.code_shading, is_hex_char, &defaults.code_shading);
    let code_color = option_value(&options.code_color, is_hex_char, &defaults.code_color);
    let link_color = option_value(&options.link_color, is_hex_char, &defaults.link_color);
    let table_style = option_value(&options.table_style, is_style_id_char, &defaults.table_style);
    let code_size = options.code_font_size.clamp(1, 200) * 2;

    let mut xml = String::from(
        "<w:styles xmlns:w=\"http://schemas.openxmlformats.org/wordprocessingml/2006/main\">\
         <w:docDefaults><w:rPrDefault><w:rPr>\
         <w:rFonts w:ascii=\"Calibri\" w:hAnsi=\"Calibri\" w:cs=\"Calibri\"/>\
         <w:sz w:val=\"22\"/><w:szCs w:val=\"22\"/></w:rPr></w:rPrDefault>\
         <w:pPrDefault><w:pPr><w:spacing w:after=\"160\" w:line=\"259\" w:lineRule=\"auto\"/></w:pPr></w:pPrDefault>\
         </w:docDefaults>\
         <w:style w:type=\"paragraph\" w:default=\"1\" w:styleId=\"Normal\"><w:name w:val=\"Normal\"/></w:style>",
    );

    for (i, size) in HEADING_SIZES.iter().enumerate() {
        xml.push_str(&format!(
            "<w:style w:type=\"paragraph\" w:styleId=\"Heading{level}\">\
             <w:name w:val=\"heading {level}\"/><w:basedOn w:val=\"Normal\"/><w:next w:val=\"Normal\"/>\
             <w:pPr><w:keepNext/><w:spacing w:before=\"240\" w:after=\"80\"/><w:outlineLvl w:val=\"{outline}\"/></w:pPr>\
             <w:rPr><w:b/><w:color w:val=\"2F5496\"/><w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/></w:rPr>\
             </w:style>",
            level = i + 1,
            outline = i,
            size = size
        ));
    }

    for (style_id, name) in [("ListBullet", "List Bullet"), ("ListNumber", "List Number")] {
        xml.push_str(&format!(
            "<w:style w:type=\"paragraph\" w:styleId=\"{}\">\
             <w:name w:val=\"{}\"/><w:basedOn w:val=\"Normal\"/>\
             <w:pPr><w:spacing w:after=\"40\"/><w:ind w:left=\"720\" w:hanging=\"360\"/></w:pPr>\
             </w:style>",
            style_id, name
        ));
    }

    xml.push_str(&format!(
        "<w:style w:type=\"paragraph\" w:styleId=\"CodeBlock\">\
         <w:name w:val=\"Code Block\"/><w:basedOn w:val=\"Normal\"/>\
         <w:pPr><w:shd w:val=\"clear\" w:color=\"auto\" w:fill=\"{shading}\"/><w:spacing w:before=\"0\" w:after=\"0\"/></w:pPr>\
         <w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/><w:sz w:val=\"{size}\"/><w:szCs w:val=\"{size}\"/></w:rPr>\
         </w:style>\
         <w:style w:type=\"character\" w:styleId=\"CodeChar\">\
         <w:name w:val=\"Code Char\"/>\
         <w:rPr><w:rFonts w:ascii=\"{font}\" w:hAnsi=\"{font}\" w:cs=\"{font}\"/><w:color w:val=\"{code_color}\"/></w:rPr>\
         </w:style>\
         <w:style w:type=\"character\" w:styleId=\"Hyperlink\">\
         <w:name w:val=\"Hyperlink\"/>\
         <w:rPr><w:color w:val=\"{link_color}\"/><w:u w:val=\"single\"/></w:rPr>\
         </w:style>",
        shading = code_shading,
        font = code_font,
        size = code_size,
        code_color = code_color,
        link_color = link_color
    ));

    xml.push_str(&format!(
        "<w:style w:type=\"table\" w:default=\"1\" w:styleId=\"{0}\"><w:name w:val=\"{0}\"/>\
         <w:pPr><w:spacing w:after=\"0\" w:line=\"240\" w:lineRule=\"auto\"/></w:pPr>\
         <w:tblPr><w:tblBorders>\
         <w:top w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:left w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:bottom w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:right w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:insideH w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         <w:insideV w:val=\"single\" w:sz=\"4\" w:space=\"0\" w:color=\"auto\"/>\
         </w:tblBorders></w:tblPr>\
         </w:style>",
        table_style
    ));

    xml.push_str("</w:styles>");
    xml
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rs_docx::styles::Styles;

    #[test]
    fn test_document_rels_list_hyperlinks_after_fixed_parts() {
        let rels = document_rels(&["http://a?x=1&y=2".to_string()]).expect("rels should build");
        let pairs: Vec<(String, String)> = rels
            .relationships
            .iter()
            .map(|rel| (rel.id.to_string(), rel.target.to_string()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("rId1".to_string(), "styles.xml".to_string()),
                ("rId2".to_string(), "numbering.xml".to_string()),
                ("rId3".to_string(), "http://a?x=1&y=2".to_string()),
            ]
        );
    }

    #[test]
    fn test_numbering_has_one_instance_per_numbered_list() {
        let numbering = numbering(2);
        assert_eq!(numbering.numberings.len(), 3);
        assert_eq!(numbering.abstract_numberings.len(), 3);

        let formats: Vec<String> = numbering
            .abstract_numberings
            .iter()
            .filter_map(|abs| abs.levels.first())
            .filter_map(|level| level.number_format.as_ref())
            .map(|fmt| fmt.value.to_string())
            .collect();
        assert_eq!(formats, vec!["bullet", "decimal", "decimal"]);
    }

    #[test]
    fn test_stylesheet_defines_every_style_the_body_uses() {
        let options = ConvertOptions {
            table_style: "Grid".to_string(),
            ..Default::default()
        };
        let xml = stylesheet(&options);
        let styles = Styles::from_str(&xml).expect("stylesheet should parse");
        let ids: Vec<String> = styles
            .styles
            .iter()
            .map(|style| style.style_id.to_string())
            .collect();

        for level in 1..=6 {
            assert!(ids.contains(&format!("Heading{}", level)));
        }
        for id in ["Normal", "ListBullet", "ListNumber", "CodeBlock", "CodeChar", "Hyperlink", "Grid"] {
            assert!(ids.iter().any(|known| known == id), "missing style {}", id);
        }
    }

    #[test]
    fn test_option_values_are_filtered() {
        let options = ConvertOptions {
            code_font: "Mono\"/><x".to_string(),
            link_color: "zz".to_string(),
            table_style: "My Table&".to_string(),
            ..Default::default()
        };
        let xml = stylesheet(&options);
        assert!(xml.contains("w:ascii=\"Monox\""));
        assert!(xml.contains("<w:color w:val=\"0000FF\"/><w:u"));
        assert!(xml.contains("w:styleId=\"MyTable\""));
        assert!(Styles::from_str(&xml).is_ok());
    }
}
