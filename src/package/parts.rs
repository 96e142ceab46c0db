//! Fixed package parts: relationships, fonts, headers, footers and settings.

use super::tree::SectionBreak;
use super::xml::XmlWriter;

/// Flat OPC package namespace.
pub(crate) const PACKAGE_NS: &str = "http://schemas.microsoft.com/office/2006/xmlPackage";
/// Office document relationship namespace.
pub(crate) const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
/// Package relationship namespace.
pub(crate) const PACKAGE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/package/2006/relationships";
/// WordprocessingML main namespace.
pub(crate) const WORDPROCESSING_NS: &str =
    "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const MATH_NS: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
const OFFICE_NS: &str = "urn:schemas-microsoft-com:office:office";
const VML_NS: &str = "urn:schemas-microsoft-com:vml";

const RELATIONSHIPS_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";
const WORD_TYPE_PREFIX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.";

pub(crate) const DATE_FIELD: &str = " DATE  \\@ \"yyyy\"  \\* MERGEFORMAT ";
pub(crate) const PAGE_FIELD: &str = " PAGE  \\* MERGEFORMAT ";
const SMALL_TEXT: &str = r#"<w:sz w:val="16"/>"#;
const BOLD: &str = "<w:b/><w:bCs/>";

/// Document relationships as (id, type, target).
const DOCUMENT_RELATIONSHIPS: &[(&str, &str, &str)] = &[
    ("rId1", "fontTable", "fontTable.xml"),
    ("rId2", "footer", "footer1.xml"),
    ("rId3", "footer", "footer2.xml"),
    ("rId4", "footer", "footer3.xml"),
    ("rId5", "footer", "footer4.xml"),
    ("rId6", "footer", "footer5.xml"),
    ("rId7", "header", "header1.xml"),
    ("rId8", "header", "header2.xml"),
    ("rId9", "header", "header3.xml"),
    ("rId10", "header", "header4.xml"),
    ("rId11", "header", "header5.xml"),
    ("rId12", "header", "header6.xml"),
    ("rId13", "numbering", "numbering.xml"),
    ("rId14", "settings", "settings.xml"),
    ("rId15", "styles", "styles.xml"),
    ("rId16", "webSettings", "webSettings.xml"),
];

/// Font table entries: name, panose, charset, family, pitch, signature.
const FONTS: &[(&str, &str, &str, &str, &str, [&str; 6])] = &[
    ("Arial", "020B0604020202020204", "00", "swiss", "variable",
        ["E0002AFF", "C0007843", "00000009", "00000000", "000001FF", "00000000"]),
    ("Calibri", "020F0502020204030204", "00", "swiss", "variable",
        ["E10002FF", "4000ACFF", "00000009", "00000000", "0000019F", "00000000"]),
    ("Cambria", "02040503050406030204", "00", "roman", "variable",
        ["A00002EF", "4000004B", "00000000", "00000000", "0000019F", "00000000"]),
    ("Cambria Math", "02040503050406030204", "00", "roman", "variable",
        ["A00002EF", "420020EB", "00000000", "00000000", "0000019F", "00000000"]),
    ("Consolas", "020B0609020204030204", "00", "modern", "fixed",
        ["E10002FF", "4000FCFF", "00000009", "00000000", "0000019F", "00000000"]),
    ("Courier New", "02070309020205020404", "00", "modern", "fixed",
        ["E0002AFF", "C0007843", "00000009", "00000000", "000001FF", "00000000"]),
    ("Symbol", "05050102010706020507", "02", "roman", "variable",
        ["00000000", "10000000", "00000000", "00000000", "80000000", "00000000"]),
    ("Tahoma", "020B0604030504040204", "00", "swiss", "variable",
        ["E1002EFF", "C000605B", "00000029", "00000000", "000101FF", "00000000"]),
    ("Times New Roman", "02020603050405020304", "00", "roman", "variable",
        ["E0002AFF", "C0007841", "00000009", "00000000", "000001FF", "00000000"]),
];

/// Write one `pkg:part`, with `body` filling its `pkg:xmlData`.
pub(crate) fn part(
    xml: &mut XmlWriter,
    name: &str,
    content_type: &str,
    padding: Option<&str>,
    body: impl FnOnce(&mut XmlWriter),
) {
    let mut attrs = vec![("pkg:name", name), ("pkg:contentType", content_type)];
    if let Some(padding) = padding {
        attrs.push(("pkg:padding", padding));
    }
    xml.open("pkg:part", &attrs);
    xml.open("pkg:xmlData", &[]);
    body(xml);
    xml.close();
    xml.close();
}

/// Content type of a WordprocessingML part.
pub(crate) fn word_type(kind: &str) -> String {
    format!("{}{}+xml", WORD_TYPE_PREFIX, kind)
}

fn relationship(xml: &mut XmlWriter, id: &str, kind: &str, target: &str) {
    let kind = format!("{}/{}", RELATIONSHIPS_NS, kind);
    xml.empty(
        "Relationship",
        &[("Id", id), ("Type", &kind), ("Target", target)],
    );
}

/// Package-level relationships pointing at the main document.
pub(crate) fn write_package_relationships(xml: &mut XmlWriter) {
    part(xml, "/_rels/.rels", RELATIONSHIPS_TYPE, Some("512"), |xml| {
        xml.open("Relationships", &[("xmlns", PACKAGE_RELATIONSHIPS_NS)]);
        relationship(xml, "rId1", "officeDocument", "word/document.xml");
        xml.close();
    });
}

/// Relationships of the main document to its parts.
pub(crate) fn write_document_relationships(xml: &mut XmlWriter) {
    part(
        xml,
        "/word/_rels/document.xml.rels",
        RELATIONSHIPS_TYPE,
        Some("256"),
        |xml| {
            xml.open("Relationships", &[("xmlns", PACKAGE_RELATIONSHIPS_NS)]);
            for (id, kind, target) in DOCUMENT_RELATIONSHIPS {
                relationship(xml, id, kind, target);
            }
            xml.close();
        },
    );
}

pub(crate) fn write_font_table(xml: &mut XmlWriter) {
    part(xml, "/word/fontTable.xml", &word_type("fontTable"), None, |xml| {
        xml.open("w:fonts", &[("xmlns:w", WORDPROCESSING_NS)]);
        for (name, panose, charset, family, pitch, sig) in FONTS {
            xml.open("w:font", &[("w:name", name)]);
            xml.val("w:panose1", panose);
            xml.val("w:charset", charset);
            xml.val("w:family", family);
            xml.val("w:pitch", pitch);
            xml.empty(
                "w:sig",
                &[
                    ("w:usb0", sig[0]),
                    ("w:usb1", sig[1]),
                    ("w:usb2", sig[2]),
                    ("w:usb3", sig[3]),
                    ("w:csb0", sig[4]),
                    ("w:csb1", sig[5]),
                ],
            );
            xml.close();
        }
        xml.close();
    });
}

/// Write the four runs of a field. `run_props` is raw `w:rPr` content.
pub(crate) fn field(xml: &mut XmlWriter, instruction: &str, run_props: Option<&str>) {
    let run = |xml: &mut XmlWriter| {
        xml.open("w:r", &[]);
        if let Some(props) = run_props {
            xml.open("w:rPr", &[]);
            xml.raw(props);
            xml.close();
        }
    };

    run(xml);
    xml.empty("w:fldChar", &[("w:fldCharType", "begin")]);
    xml.close();
    run(xml);
    xml.leaf("w:instrText", &[("xml:space", "preserve")], instruction);
    xml.close();
    run(xml);
    xml.empty("w:fldChar", &[("w:fldCharType", "separate")]);
    xml.close();
    run(xml);
    xml.empty("w:fldChar", &[("w:fldCharType", "end")]);
    xml.close();
}

fn text_run(xml: &mut XmlWriter, run_props: Option<&str>, tab: bool, text: &str) {
    xml.open("w:r", &[]);
    if let Some(props) = run_props {
        xml.open("w:rPr", &[]);
        xml.raw(props);
        xml.close();
    }
    if tab {
        xml.empty("w:tab", &[]);
    }
    if !text.is_empty() {
        let preserve = text.starts_with(' ') || text.ends_with(' ');
        if preserve {
            xml.leaf("w:t", &[("xml:space", "preserve")], text);
        } else {
            xml.leaf("w:t", &[], text);
        }
    }
    xml.close();
}

fn standard_tabs(xml: &mut XmlWriter) {
    xml.open("w:tabs", &[]);
    xml.empty("w:tab", &[("w:val", "clear"), ("w:pos", "4320")]);
    xml.empty("w:tab", &[("w:val", "clear"), ("w:pos", "8640")]);
    xml.empty("w:tab", &[("w:val", "right"), ("w:pos", "9936")]);
    xml.close();
}

fn header_border(xml: &mut XmlWriter) {
    xml.open("w:pBdr", &[]);
    xml.empty(
        "w:bottom",
        &[
            ("w:val", "single"),
            ("w:sz", "4"),
            ("w:space", "1"),
            ("w:color", "auto"),
        ],
    );
    xml.close();
}

/// Copyright notice preceding the year field.
pub(crate) fn copyright_notice(holder: Option<&str>) -> String {
    match holder {
        Some(holder) if !holder.trim().is_empty() => {
            format!("Copyright \u{a9} {} ", holder.trim())
        }
        _ => "Copyright \u{a9} ".to_string(),
    }
}

fn footer(xml: &mut XmlWriter, index: u32, content: impl FnOnce(&mut XmlWriter)) {
    let name = format!("/word/footer{}.xml", index);
    part(xml, &name, &word_type("footer"), None, |xml| {
        xml.open("w:ftr", &[("xmlns:w", WORDPROCESSING_NS)]);
        xml.open("w:p", &[]);
        content(xml);
        xml.close();
        xml.close();
    });
}

fn header(xml: &mut XmlWriter, index: u32, content: impl FnOnce(&mut XmlWriter)) {
    let name = format!("/word/header{}.xml", index);
    part(xml, &name, &word_type("header"), None, |xml| {
        xml.open("w:hdr", &[("xmlns:w", WORDPROCESSING_NS)]);
        xml.open("w:p", &[]);
        content(xml);
        xml.close();
        xml.close();
    });
}

fn copyright_line(xml: &mut XmlWriter, notice: &str, tab: bool) {
    text_run(xml, Some(SMALL_TEXT), tab, notice);
    field(xml, DATE_FIELD, Some(SMALL_TEXT));
    text_run(xml, Some(SMALL_TEXT), false, ". All Rights Reserved.");
}

/// The five footers: title page even/default, then contents and body
/// even/default/first.
pub(crate) fn write_footers(xml: &mut XmlWriter, holder: Option<&str>) {
    let notice = copyright_notice(holder);

    footer(xml, 1, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Footer");
        xml.empty("w:ind", &[("w:right", "360")]);
        xml.close();
    });

    footer(xml, 2, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Footer");
        xml.val("w:jc", "center");
        xml.close();
        text_run(xml, None, false, &notice);
        field(xml, DATE_FIELD, None);
        xml.open("w:r", &[]);
        xml.leaf("w:t", &[], ". All Rights Reserved.");
        xml.empty("w:br", &[]);
        xml.close();
    });

    footer(xml, 3, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Footer");
        standard_tabs(xml);
        xml.close();
        field(xml, PAGE_FIELD, None);
        copyright_line(xml, &notice, true);
    });

    for index in [4, 5] {
        footer(xml, index, |xml| {
            xml.open("w:pPr", &[]);
            xml.val("w:pStyle", "Footer");
            standard_tabs(xml);
            xml.close();
            copyright_line(xml, &notice, false);
            text_run(xml, None, true, "");
            field(xml, PAGE_FIELD, None);
        });
    }
}

/// The six headers: contents even/default/first, then body even/default/first.
pub(crate) fn write_headers(xml: &mut XmlWriter) {
    header(xml, 1, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        header_border(xml);
        xml.close();
        text_run(xml, Some(BOLD), false, "Table of Contents");
    });

    header(xml, 2, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        header_border(xml);
        xml.val("w:jc", "right");
        xml.close();
        text_run(xml, Some(BOLD), false, "Table of Contents");
    });

    header(xml, 3, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        xml.close();
    });

    header(xml, 4, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        header_border(xml);
        xml.close();
        field(xml, " STYLEREF  \"Heading 1\" \\n  \\* MERGEFORMAT ", None);
        text_run(xml, Some(BOLD), false, ".     ");
        field(xml, " STYLEREF  \"Heading 1\"  \\* MERGEFORMAT ", None);
    });

    header(xml, 5, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        header_border(xml);
        standard_tabs(xml);
        xml.open("w:rPr", &[]);
        xml.raw(BOLD);
        xml.close();
        xml.close();
        text_run(xml, Some(BOLD), true, "");
        field(xml, " STYLEREF  \"Heading 2\" \\n  \\* MERGEFORMAT ", None);
        text_run(xml, None, false, "     ");
        field(xml, " STYLEREF  \"Heading 2\"  \\* MERGEFORMAT ", None);
    });

    header(xml, 6, |xml| {
        xml.open("w:pPr", &[]);
        xml.val("w:pStyle", "Header");
        xml.close();
    });
}

pub(crate) fn write_settings(xml: &mut XmlWriter) {
    part(xml, "/word/settings.xml", &word_type("settings"), None, |xml| {
        xml.open(
            "w:settings",
            &[
                ("xmlns:w", WORDPROCESSING_NS),
                ("xmlns:m", MATH_NS),
                ("xmlns:o", OFFICE_NS),
                ("xmlns:v", VML_NS),
            ],
        );
        xml.val("w:characterSpacingControl", "doNotCompress");
        xml.val("w:decimalSymbol", ".");
        xml.val("w:defaultTabStop", "360");
        xml.empty("w:evenAndOddHeaders", &[]);
        xml.val("w:listSeparator", ",");

        xml.open("m:mathPr", &[]);
        for (key, value) in [
            ("m:mathFont", "Cambria Math"),
            ("m:brkBin", "before"),
            ("m:brkBinSub", "--"),
            ("m:smallFrac", "0"),
        ] {
            xml.empty(key, &[("m:val", value)]);
        }
        xml.empty("m:dispDef", &[]);
        for (key, value) in [
            ("m:lMargin", "0"),
            ("m:rMargin", "0"),
            ("m:defJc", "centerGroup"),
            ("m:wrapIndent", "1440"),
            ("m:intLim", "subSup"),
            ("m:naryLim", "undOvr"),
        ] {
            xml.empty(key, &[("m:val", value)]);
        }
        xml.close();

        xml.open("w:shapeDefaults", &[]);
        xml.empty("o:shapedefaults", &[("v:ext", "edit"), ("spidmax", "1026")]);
        xml.open("o:shapelayout", &[("v:ext", "edit")]);
        xml.empty("o:idmap", &[("v:ext", "edit"), ("data", "1")]);
        xml.close();
        xml.close();

        xml.empty("w:zoom", &[("w:percent", "100")]);
        xml.close();
    });
}

pub(crate) fn write_web_settings(xml: &mut XmlWriter) {
    part(xml, "/word/webSettings.xml", &word_type("webSettings"), None, |xml| {
        xml.open("w:webSettings", &[("xmlns:w", WORDPROCESSING_NS)]);
        xml.empty("w:optimizeForBrowser", &[]);
        xml.empty("w:relyOnVML", &[]);
        xml.empty("w:allowPNG", &[]);
        xml.close();
    });
}

fn reference(xml: &mut XmlWriter, element: &str, kind: &str, id: &str) {
    xml.empty(element, &[("w:type", kind), ("r:id", id)]);
}

fn page_margins(xml: &mut XmlWriter, side: &str, edge: &str) {
    xml.empty("w:pgSz", &[("w:w", "12240"), ("w:h", "15840")]);
    xml.empty(
        "w:pgMar",
        &[
            ("w:top", "1440"),
            ("w:right", side),
            ("w:bottom", "1440"),
            ("w:left", side),
            ("w:header", edge),
            ("w:footer", edge),
            ("w:gutter", "0"),
        ],
    );
}

/// Write the `w:sectPr` closing a page section.
pub(crate) fn write_section_properties(xml: &mut XmlWriter, section: SectionBreak) {
    xml.open("w:sectPr", &[]);
    match section {
        SectionBreak::TitlePage => {
            reference(xml, "w:footerReference", "even", "rId2");
            reference(xml, "w:footerReference", "default", "rId3");
            page_margins(xml, "1660", "1020");
            xml.empty("w:cols", &[("w:space", "720")]);
        }
        SectionBreak::Contents => {
            reference(xml, "w:footerReference", "even", "rId4");
            reference(xml, "w:footerReference", "default", "rId5");
            reference(xml, "w:footerReference", "first", "rId6");
            reference(xml, "w:headerReference", "even", "rId7");
            reference(xml, "w:headerReference", "default", "rId8");
            reference(xml, "w:headerReference", "first", "rId9");
            xml.val("w:type", "oddPage");
            page_margins(xml, "1152", "1022");
            xml.empty("w:pgNumType", &[("w:fmt", "lowerRoman"), ("w:start", "1")]);
            xml.empty("w:cols", &[("w:space", "720")]);
            xml.empty("w:titlePg", &[]);
        }
        SectionBreak::Body { first } => {
            if first {
                reference(xml, "w:headerReference", "even", "rId10");
                reference(xml, "w:headerReference", "default", "rId11");
                reference(xml, "w:headerReference", "first", "rId12");
            }
            xml.val("w:type", "oddPage");
            page_margins(xml, "1152", "1022");
            if first {
                xml.empty("w:pgNumType", &[("w:start", "1")]);
            }
            xml.empty("w:cols", &[("w:space", "720")]);
            xml.empty("w:titlePg", &[]);
        }
    }
    xml.empty("w:docGrid", &[("w:linePitch", "360")]);
    xml.close();
}
