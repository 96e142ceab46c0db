//! Document assembly.
//!
//! The styled renderer produces a [`StyledDocument`]; [`assemble`] wraps it
//! with the fixed parts (relationships, fonts, headers, footers, numbering,
//! settings and the style catalogue) into a single flat OPC XML package that
//! word processors open directly.

mod numbering;
mod parts;
pub mod styles;
mod tree;
mod xml;

pub use numbering::{NumberingAllocator, NumberingInstance, FIRST_ALLOCATED_ID};
pub use styles::StyleDef;
pub use tree::{Paragraph, Run, SectionBreak, StyledDocument};
pub use xml::{escape, XmlWriter};

use crate::render::RenderOptions;

use parts::{PACKAGE_NS, RELATIONSHIPS_NS, WORDPROCESSING_NS};

/// Assemble a styled document into a flat OPC package.
pub fn assemble(doc: &StyledDocument, options: &RenderOptions) -> String {
    let mut xml = XmlWriter::new();
    xml.declaration();
    xml.instruction("mso-application", "progid=\"Word.Document\"");
    xml.open(
        "pkg:package",
        &[
            ("xmlns:pkg", PACKAGE_NS),
            ("xmlns:w", WORDPROCESSING_NS),
            ("xmlns:r", RELATIONSHIPS_NS),
        ],
    );

    parts::write_package_relationships(&mut xml);
    parts::write_document_relationships(&mut xml);
    parts::write_font_table(&mut xml);
    write_document(&mut xml, doc);
    parts::write_footers(&mut xml, options.copyright_holder.as_deref());
    parts::write_headers(&mut xml);
    parts::part(
        &mut xml,
        "/word/numbering.xml",
        &parts::word_type("numbering"),
        None,
        |xml| numbering::write_numbering(xml, &doc.numbering),
    );
    parts::write_settings(&mut xml);
    parts::part(
        &mut xml,
        "/word/styles.xml",
        &parts::word_type("styles"),
        None,
        styles::write_styles,
    );
    parts::write_web_settings(&mut xml);

    xml.close();
    let package = xml.finish();
    log::debug!(
        "assembled package: {} paragraphs, {} bytes",
        doc.paragraphs.len(),
        package.len()
    );
    package
}

fn write_document(xml: &mut XmlWriter, doc: &StyledDocument) {
    parts::part(
        xml,
        "/word/document.xml",
        &parts::word_type("document.main"),
        None,
        |xml| {
            xml.open(
                "w:document",
                &[("xmlns:w", WORDPROCESSING_NS), ("xmlns:r", RELATIONSHIPS_NS)],
            );
            xml.open("w:body", &[]);
            let mut bookmarks = 0u32;
            for paragraph in &doc.paragraphs {
                write_paragraph(xml, paragraph, &mut bookmarks);
            }
            xml.close();
            xml.close();
        },
    );
}

fn write_paragraph(xml: &mut XmlWriter, paragraph: &Paragraph, bookmarks: &mut u32) {
    xml.open("w:p", &[]);

    let has_properties = paragraph.style.is_some()
        || paragraph.numbering.is_some()
        || paragraph.section_break.is_some();
    if has_properties {
        xml.open("w:pPr", &[]);
        if let Some(style) = &paragraph.style {
            xml.val("w:pStyle", style);
        }
        if let Some(id) = paragraph.numbering {
            xml.open("w:numPr", &[]);
            xml.val("w:ilvl", "0");
            xml.val("w:numId", &id.to_string());
            xml.close();
        }
        if let Some(section) = paragraph.section_break {
            parts::write_section_properties(xml, section);
        }
        xml.close();
    }

    let bookmark = paragraph.bookmark.as_deref().map(|name| {
        let id = bookmarks.to_string();
        *bookmarks += 1;
        xml.empty("w:bookmarkStart", &[("w:id", &id), ("w:name", name)]);
        id
    });

    for run in &paragraph.runs {
        write_run(xml, run);
    }

    if let Some(id) = bookmark {
        xml.empty("w:bookmarkEnd", &[("w:id", &id)]);
    }
    xml.close();
}

fn write_run(xml: &mut XmlWriter, run: &Run) {
    match run {
        Run::Text {
            style,
            text,
            preserve,
        } => {
            xml.open("w:r", &[]);
            if let Some(style) = style {
                xml.open("w:rPr", &[]);
                xml.val("w:rStyle", style);
                xml.close();
            }
            if *preserve {
                xml.leaf("w:t", &[("xml:space", "preserve")], text);
            } else {
                xml.leaf("w:t", &[], text);
            }
            xml.close();
        }
        Run::Break => {
            xml.open("w:r", &[]);
            xml.empty("w:br", &[]);
            xml.close();
        }
        Run::LastRenderedPageBreak => {
            xml.open("w:r", &[]);
            xml.empty("w:lastRenderedPageBreak", &[]);
            xml.close();
        }
        Run::Field { instruction } => parts::field(xml, instruction, None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paragraph_xml(paragraph: &Paragraph) -> String {
        let mut xml = XmlWriter::new();
        let mut bookmarks = 0;
        write_paragraph(&mut xml, paragraph, &mut bookmarks);
        xml.finish()
    }

    #[test]
    fn test_paragraph_with_numbering() {
        let para = Paragraph {
            numbering: Some(7),
            ..Paragraph::styled("NumberedList1")
        }
        .with_run(Run::preserved("item"));
        assert_eq!(
            paragraph_xml(&para),
            "<w:p><w:pPr><w:pStyle w:val=\"NumberedList1\"/><w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"7\"/></w:numPr></w:pPr>\
             <w:r><w:t xml:space=\"preserve\">item</w:t></w:r></w:p>"
        );
    }

    #[test]
    fn test_bookmarked_heading() {
        let para = Paragraph {
            bookmark: Some("Section_2_1".to_string()),
            ..Paragraph::styled("Heading2")
        }
        .with_run(Run::text("A & B"));
        let out = paragraph_xml(&para);
        assert!(out.contains("<w:bookmarkStart w:id=\"0\" w:name=\"Section_2_1\"/>"));
        assert!(out.contains("<w:t>A &amp; B</w:t>"));
        assert!(out.ends_with("<w:bookmarkEnd w:id=\"0\"/></w:p>"));
    }

    #[test]
    fn test_styled_run_and_break() {
        let para = Paragraph::default()
            .with_run(Run::styled("Bold", "x"))
            .with_run(Run::Break);
        assert_eq!(
            paragraph_xml(&para),
            "<w:p><w:r><w:rPr><w:rStyle w:val=\"Bold\"/></w:rPr><w:t xml:space=\"preserve\">x</w:t></w:r><w:r><w:br/></w:r></w:p>"
        );
    }

    #[test]
    fn test_assemble_part_order() {
        let doc = StyledDocument::default();
        let out = assemble(&doc, &RenderOptions::default());
        assert!(out.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?><?mso-application progid=\"Word.Document\"?><pkg:package"));

        let names: Vec<&str> = out
            .split("pkg:name=\"")
            .skip(1)
            .filter_map(|rest| rest.split('"').next())
            .collect();
        assert_eq!(
            names,
            vec![
                "/_rels/.rels",
                "/word/_rels/document.xml.rels",
                "/word/fontTable.xml",
                "/word/document.xml",
                "/word/footer1.xml",
                "/word/footer2.xml",
                "/word/footer3.xml",
                "/word/footer4.xml",
                "/word/footer5.xml",
                "/word/header1.xml",
                "/word/header2.xml",
                "/word/header3.xml",
                "/word/header4.xml",
                "/word/header5.xml",
                "/word/header6.xml",
                "/word/numbering.xml",
                "/word/settings.xml",
                "/word/styles.xml",
                "/word/webSettings.xml",
            ]
        );
        assert!(out.ends_with("</pkg:package>"));
    }
}
