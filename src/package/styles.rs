//! Style catalogue for the styles part.
//!
//! Every paragraph and character style id the styled renderer emits has an
//! entry here; formatting lives in the catalogue, not on the runs.

use super::parts::WORDPROCESSING_NS;
use super::xml::XmlWriter;

/// One style definition.
#[derive(Debug, Clone, Copy)]
pub struct StyleDef {
    /// Character style rather than paragraph style
    pub character: bool,
    /// Style id referenced by paragraphs and runs
    pub id: &'static str,
    /// Display name
    pub name: &'static str,
    /// Defined by this catalogue rather than built in
    pub custom: bool,
    /// Default style of its type
    pub default: bool,
    /// Shown in the quick style gallery
    pub quick: bool,
    /// Parent style
    pub based_on: Option<&'static str>,
    /// Style of the paragraph that follows
    pub next: Option<&'static str>,
    /// Hidden until used
    pub hidden: bool,
    /// Updated automatically from direct formatting
    pub redefine: bool,
    /// Linked paragraph/character style
    pub link: Option<&'static str>,
    /// `w:pPr` content
    pub paragraph_props: &'static str,
    /// `w:rPr` content
    pub run_props: &'static str,
}

impl StyleDef {
    const fn paragraph(id: &'static str, name: &'static str, based_on: &'static str) -> Self {
        Self {
            character: false,
            id,
            name,
            custom: true,
            default: false,
            quick: true,
            based_on: Some(based_on),
            next: None,
            hidden: false,
            redefine: false,
            link: None,
            paragraph_props: "",
            run_props: "",
        }
    }

    const fn character(id: &'static str, name: &'static str) -> Self {
        Self {
            character: true,
            based_on: Some("DefaultParagraphFont"),
            ..Self::paragraph(id, name, "")
        }
    }

    const fn builtin(self) -> Self {
        Self {
            custom: false,
            ..self
        }
    }

    const fn root(self) -> Self {
        Self {
            based_on: None,
            ..self
        }
    }

    const fn next(self, next: &'static str) -> Self {
        Self {
            next: Some(next),
            ..self
        }
    }

    const fn toc(self) -> Self {
        Self {
            custom: false,
            redefine: true,
            next: Some("Text"),
            ..self
        }
    }

    const fn ppr(self, props: &'static str) -> Self {
        Self {
            paragraph_props: props,
            ..self
        }
    }

    const fn rpr(self, props: &'static str) -> Self {
        Self {
            run_props: props,
            ..self
        }
    }
}

/// The catalogue, in `styles.xml` order.
pub const STYLES: &[StyleDef] = &[
    StyleDef::paragraph("Annotation", "Annotation", "Text").ppr(concat!(
        r#"<w:pBdr><w:top w:val="single" w:sz="4" w:space="1" w:color="auto" w:shadow="1"/>"#,
        r#"<w:left w:val="single" w:sz="4" w:space="4" w:color="auto" w:shadow="1"/>"#,
        r#"<w:bottom w:val="single" w:sz="4" w:space="1" w:color="auto" w:shadow="1"/>"#,
        r#"<w:right w:val="single" w:sz="4" w:space="4" w:color="auto" w:shadow="1"/></w:pBdr>"#,
        r#"<w:shd w:val="pct50" w:color="C0C0C0" w:fill="auto"/>"#
    )),
    StyleDef::paragraph("AlertText", "Alert Text", "Text").ppr(r#"<w:ind w:left="360"/>"#),
    StyleDef::paragraph("AlertTextinList1", "Alert Text in List 1", "TextinList1")
        .ppr(r#"<w:ind w:left="720"/>"#),
    StyleDef::paragraph("AlertTextinList2", "Alert Text in List 2", "TextinList2")
        .ppr(r#"<w:ind w:left="1080"/>"#),
    StyleDef::paragraph("Author", "Author", "Subtitle"),
    StyleDef::character("Bold", "Bold").rpr("<w:b/>"),
    StyleDef::character("BoldItalic", "Bold Italic").rpr("<w:b/><w:i/>"),
    StyleDef::paragraph("BulletedList1", "Bulleted List 1", "Text")
        .ppr(r#"<w:numPr><w:numId w:val="1"/></w:numPr>"#),
    StyleDef::paragraph("BulletedList2", "Bulleted List 2", "Text")
        .ppr(r#"<w:numPr><w:numId w:val="2"/></w:numPr>"#),
    StyleDef::paragraph("Code", "Code", "")
        .root()
        .ppr(r#"<w:spacing w:after="120"/><w:ind w:left="720"/>"#)
        .rpr(r#"<w:rFonts w:ascii="Consolas" w:hAnsi="Consolas"/><w:noProof/><w:color w:val="000080"/>"#),
    StyleDef::character("CodeEmbedded", "Code Embedded").rpr(concat!(
        r#"<w:rFonts w:ascii="Consolas" w:hAnsi="Consolas"/><w:noProof/><w:color w:val="000080"/>"#,
        r#"<w:position w:val="0"/><w:sz w:val="20"/><w:szCs w:val="20"/>"#
    )),
    StyleDef::paragraph("CodeinList1", "Code in List 1", "Code").ppr(r#"<w:ind w:left="1080"/>"#),
    StyleDef::paragraph("CodeinList2", "Code in List 2", "Code").ppr(r#"<w:ind w:left="1440"/>"#),
    StyleDef {
        default: true,
        quick: false,
        hidden: true,
        ..StyleDef::character("DefaultParagraphFont", "Default Paragraph Font")
            .builtin()
            .root()
    },
    StyleDef::character("Definition", "Definition").rpr("<w:i/>"),
    StyleDef::paragraph("DefinitionText", "Definition Text", "Text")
        .ppr(r#"<w:ind w:left="360" w:hanging="360"/>"#),
    StyleDef::paragraph("DefinitionTextinList1", "Definition Text in List 1", "TextinList1")
        .ppr(r#"<w:ind w:left="720" w:hanging="360"/>"#),
    StyleDef::paragraph("DefinitionTextinList2", "Definition Text in List 2", "TextinList2")
        .ppr(r#"<w:ind w:left="1080" w:hanging="360"/>"#),
    StyleDef::paragraph("Footer", "Footer", "Text").builtin().ppr(
        r#"<w:tabs><w:tab w:val="center" w:pos="4320"/><w:tab w:val="right" w:pos="8640"/></w:tabs>"#,
    ),
    StyleDef::paragraph("Grammar", "Grammar", "Text")
        .ppr(r#"<w:keepLines/><w:spacing w:line="250" w:lineRule="exact"/><w:ind w:left="1080" w:hanging="360"/>"#)
        .rpr("<w:noProof/>"),
    StyleDef::character("GrammarNon-Terminal", "Grammar Non-Terminal").rpr("<w:i/><w:iCs/><w:noProof/>"),
    StyleDef::character("GrammarReference", "Grammar Reference").rpr("<w:i/>"),
    StyleDef::character("GrammarTerminal", "Grammar Terminal").rpr(concat!(
        r#"<w:rFonts w:ascii="Consolas" w:hAnsi="Consolas" w:cs="Courier New"/><w:noProof/>"#,
        r#"<w:color w:val="000080"/><w:sz w:val="20"/>"#
    )),
    StyleDef::paragraph("Header", "Header", "Text").builtin().ppr(
        r#"<w:tabs><w:tab w:val="center" w:pos="4320"/><w:tab w:val="right" w:pos="8640"/></w:tabs>"#,
    ),
    StyleDef {
        quick: false,
        hidden: true,
        ..StyleDef::paragraph("HeadingBase", "Heading Base", "Text")
            .next("Text")
            .ppr(r#"<w:keepNext/><w:spacing w:before="160" w:after="80"/>"#)
            .rpr(r#"<w:rFonts w:ascii="Cambria" w:hAnsi="Cambria"/><w:kern w:val="28"/><w:szCs w:val="20"/>"#)
    },
    StyleDef::paragraph("Heading1", "Heading 1", "HeadingBase")
        .builtin()
        .next("Text")
        .ppr(concat!(
            r#"<w:numPr><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:pBdr><w:bottom w:val="double" w:sz="4" w:space="8" w:color="auto"/></w:pBdr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs><w:spacing w:after="480"/>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:jc w:val="right"/><w:outlineLvl w:val="0"/>"#
        ))
        .rpr(r#"<w:b/><w:sz w:val="48"/>"#),
    StyleDef::paragraph("Heading2", "Heading 2", "HeadingBase")
        .builtin()
        .next("Text")
        .ppr(concat!(
            r#"<w:numPr><w:ilvl w:val="1"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="1"/>"#
        ))
        .rpr(r#"<w:b/><w:sz w:val="24"/>"#),
    StyleDef::paragraph("Heading3", "Heading 3", "HeadingBase")
        .builtin()
        .next("Text")
        .ppr(concat!(
            r#"<w:numPr><w:ilvl w:val="2"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="2"/>"#
        ))
        .rpr("<w:b/>"),
    heading(4, "Heading4", "Heading 4"),
    heading(5, "Heading5", "Heading 5"),
    heading(6, "Heading6", "Heading 6"),
    heading(7, "Heading7", "Heading 7"),
    heading(8, "Heading8", "Heading 8"),
    heading(9, "Heading9", "Heading 9"),
    StyleDef::paragraph("Issue", "Issue", "Text")
        .ppr(concat!(
            r#"<w:keepLines/><w:pBdr><w:top w:val="single" w:sz="4" w:space="1" w:color="D99694"/>"#,
            r#"<w:left w:val="single" w:sz="4" w:space="4" w:color="D99694"/>"#,
            r#"<w:bottom w:val="single" w:sz="4" w:space="1" w:color="D99694"/>"#,
            r#"<w:right w:val="single" w:sz="4" w:space="4" w:color="D99694"/></w:pBdr>"#,
            r#"<w:shd w:val="clear" w:color="auto" w:fill="F2DCDB"/>"#
        ))
        .rpr(r#"<w:i/><w:noProof/><w:szCs w:val="20"/>"#),
    StyleDef::character("Italic", "Italic").rpr("<w:i/>"),
    StyleDef::paragraph("Label", "Label", "Text").next("Text").rpr("<w:b/>"),
    StyleDef::character("LabelEmbedded", "Label Embedded").rpr(r#"<w:b/><w:szCs w:val="20"/>"#),
    StyleDef::paragraph("LabelinList1", "Label in List 1", "TextinList1")
        .next("TextinList1")
        .rpr("<w:b/>"),
    StyleDef::paragraph("LabelinList2", "Label in List 2", "TextinList2")
        .next("TextinList2")
        .rpr("<w:b/>"),
    StyleDef {
        default: true,
        quick: false,
        hidden: true,
        ..StyleDef::paragraph("Normal", "Normal", "")
            .builtin()
            .root()
            .ppr(r#"<w:spacing w:after="200" w:line="276" w:lineRule="auto"/>"#)
            .rpr(r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:sz w:val="22"/><w:szCs w:val="22"/>"#)
    },
    StyleDef::paragraph("NumberedList1", "Numbered List 1", "Text")
        .ppr(r#"<w:numPr><w:numId w:val="4"/></w:numPr>"#),
    StyleDef::paragraph("NumberedList2", "Numbered List 2", "Text")
        .ppr(r#"<w:numPr><w:numId w:val="5"/></w:numPr>"#),
    StyleDef::character("Strikethrough", "Strikethrough").rpr(r#"<w:strike/><w:dstrike w:val="0"/>"#),
    StyleDef::character("Subscript", "Subscript").rpr(r#"<w:vertAlign w:val="subscript"/>"#),
    StyleDef::paragraph("Subtitle", "Subtitle", "Text")
        .builtin()
        .ppr(r#"<w:spacing w:after="60"/>"#)
        .rpr(r#"<w:rFonts w:cs="Arial"/><w:i/><w:sz w:val="36"/><w:szCs w:val="28"/>"#),
    StyleDef::character("Superscript", "Superscript").rpr(r#"<w:vertAlign w:val="superscript"/>"#),
    StyleDef {
        link: Some("TextChar"),
        ..StyleDef::paragraph("Text", "Text", "")
            .root()
            .ppr(r#"<w:spacing w:after="120"/>"#)
            .rpr(TEXT_RUN)
    },
    StyleDef {
        link: Some("Text"),
        ..StyleDef::character("TextChar", "Text Char").rpr(TEXT_RUN)
    },
    StyleDef::paragraph("TextinList1", "Text in List 1", "Text").ppr(r#"<w:ind w:left="360"/>"#),
    StyleDef::paragraph("TextinList2", "Text in List 2", "Text").ppr(r#"<w:ind w:left="720"/>"#),
    StyleDef::paragraph("Title", "Title", "Text")
        .builtin()
        .ppr(r#"<w:spacing w:before="240" w:after="60"/>"#)
        .rpr(concat!(
            r#"<w:rFonts w:ascii="Cambria" w:hAnsi="Cambria" w:cs="Arial"/><w:b/><w:bCs/>"#,
            r#"<w:kern w:val="28"/><w:sz w:val="56"/><w:szCs w:val="32"/>"#
        )),
    StyleDef {
        quick: false,
        ..StyleDef::paragraph("TOCHeading", "TOC Heading", "Text")
            .ppr(concat!(
                r#"<w:pBdr><w:bottom w:val="double" w:sz="4" w:space="8" w:color="auto"/></w:pBdr>"#,
                r#"<w:spacing w:before="160" w:after="480"/><w:jc w:val="right"/>"#
            ))
            .rpr(concat!(
                r#"<w:rFonts w:ascii="Cambria" w:hAnsi="Cambria"/><w:b/><w:bCs/>"#,
                r#"<w:sz w:val="48"/><w:szCs w:val="20"/>"#
            ))
    },
    StyleDef::paragraph("TOC1", "TOC 1", "Text")
        .toc()
        .ppr(r#"<w:spacing w:before="120"/>"#)
        .rpr("<w:b/><w:bCs/>"),
    StyleDef::paragraph("TOC2", "TOC 2", "Text")
        .toc()
        .ppr(concat!(
            r#"<w:tabs><w:tab w:val="right" w:leader="dot" w:pos="9926"/></w:tabs>"#,
            r#"<w:spacing w:after="0"/><w:ind w:left="240"/>"#
        ))
        .rpr("<w:noProof/>"),
    StyleDef::paragraph("TOC3", "TOC 3", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="480"/>"#)
        .rpr("<w:iCs/>"),
    StyleDef::paragraph("TOC4", "TOC 4", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="720"/>"#)
        .rpr(TOC_RUN),
    StyleDef::paragraph("TOC5", "TOC 5", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="960"/>"#)
        .rpr(TOC_RUN),
    StyleDef::paragraph("TOC6", "TOC 6", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="1200"/>"#)
        .rpr(TOC_RUN),
    StyleDef::paragraph("TOC7", "TOC 7", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="1440"/>"#)
        .rpr(TOC_RUN),
    StyleDef::paragraph("TOC8", "TOC 8", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="1680"/>"#)
        .rpr(TOC_RUN),
    StyleDef::paragraph("TOC9", "TOC 9", "Text")
        .toc()
        .ppr(r#"<w:spacing w:after="0"/><w:ind w:left="1920"/>"#)
        .rpr(TOC_RUN),
];

const TEXT_RUN: &str = concat!(
    r#"<w:rFonts w:ascii="Calibri" w:hAnsi="Calibri"/><w:color w:val="000000"/>"#,
    r#"<w:sz w:val="22"/><w:szCs w:val="22"/>"#
);

const TOC_RUN: &str = r#"<w:szCs w:val="21"/>"#;

const fn heading(level: u8, id: &'static str, name: &'static str) -> StyleDef {
    let props = match level {
        4 => concat!(
            r#"<w:numPr><w:ilvl w:val="3"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="3"/>"#
        ),
        5 => concat!(
            r#"<w:numPr><w:ilvl w:val="4"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="4"/>"#
        ),
        6 => concat!(
            r#"<w:numPr><w:ilvl w:val="5"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="5"/>"#
        ),
        7 => concat!(
            r#"<w:numPr><w:ilvl w:val="6"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="6"/>"#
        ),
        8 => concat!(
            r#"<w:numPr><w:ilvl w:val="7"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="7"/>"#
        ),
        _ => concat!(
            r#"<w:numPr><w:ilvl w:val="8"/><w:numId w:val="3"/></w:numPr>"#,
            r#"<w:tabs><w:tab w:val="num" w:pos="360"/></w:tabs>"#,
            r#"<w:ind w:left="0" w:firstLine="0"/><w:outlineLvl w:val="8"/>"#
        ),
    };
    StyleDef::paragraph(id, name, "HeadingBase")
        .builtin()
        .next("Text")
        .ppr(props)
}

/// Look up a style by id.
pub fn find(id: &str) -> Option<&'static StyleDef> {
    STYLES.iter().find(|style| style.id == id)
}

/// Write the styles part body.
pub(crate) fn write_styles(xml: &mut XmlWriter) {
    xml.open("w:styles", &[("xmlns:w", WORDPROCESSING_NS)]);
    xml.raw(concat!(
        "<w:docDefaults><w:rPrDefault><w:rPr>",
        r#"<w:rFonts w:ascii="Times New Roman" w:eastAsia="Times New Roman" w:hAnsi="Times New Roman" w:cs="Times New Roman"/>"#,
        r#"<w:lang w:val="en-US" w:eastAsia="en-US" w:bidi="ar-SA"/>"#,
        "</w:rPr></w:rPrDefault><w:pPrDefault/></w:docDefaults>"
    ));

    for style in STYLES {
        write_style(xml, style);
    }

    xml.close();
}

fn write_style(xml: &mut XmlWriter, style: &StyleDef) {
    let mut attrs = vec![(
        "w:type",
        if style.character { "character" } else { "paragraph" },
    )];
    if style.custom {
        attrs.push(("w:customStyle", "1"));
    }
    if style.default {
        attrs.push(("w:default", "1"));
    }
    attrs.push(("w:styleId", style.id));

    xml.open("w:style", &attrs);
    xml.val("w:name", style.name);
    if let Some(based_on) = style.based_on {
        xml.val("w:basedOn", based_on);
    }
    if let Some(next) = style.next {
        xml.val("w:next", next);
    }
    if let Some(link) = style.link {
        xml.val("w:link", link);
    }
    if style.redefine {
        xml.empty("w:autoRedefine", &[]);
    }
    if style.hidden {
        xml.empty("w:semiHidden", &[]);
        xml.empty("w:unhideWhenUsed", &[]);
    }
    if style.quick {
        xml.empty("w:qFormat", &[]);
    }
    if !style.paragraph_props.is_empty() {
        xml.open("w:pPr", &[]);
        xml.raw(style.paragraph_props);
        xml.close();
    }
    if !style.run_props.is_empty() {
        xml.open("w:rPr", &[]);
        xml.raw(style.run_props);
        xml.close();
    }
    xml.close();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalogue_ids_are_unique() {
        let mut ids: Vec<_> = STYLES.iter().map(|s| s.id).collect();
        let count = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), count);
    }

    #[test]
    fn test_parents_exist() {
        for style in STYLES {
            if let Some(parent) = style.based_on {
                assert!(find(parent).is_some(), "{} is based on missing {}", style.id, parent);
            }
        }
    }

    #[test]
    fn test_style_kinds() {
        assert!(find("CodeEmbedded").unwrap().character);
        assert!(!find("CodeinList2").unwrap().character);
        assert!(find("Heading9").unwrap().paragraph_props.contains("w:ilvl w:val=\"8\""));
        assert!(find("Missing").is_none());
    }

    #[test]
    fn test_styles_written_in_catalogue_order() {
        let mut xml = XmlWriter::new();
        write_styles(&mut xml);
        let out = xml.finish();

        let positions: Vec<usize> = STYLES
            .iter()
            .map(|style| {
                out.find(&format!("w:styleId=\"{}\"", style.id))
                    .unwrap_or_else(|| panic!("{} not written", style.id))
            })
            .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
    }

    #[test]
    fn test_write_style_element() {
        let mut xml = XmlWriter::new();
        write_style(&mut xml, find("Bold").unwrap());
        assert_eq!(
            xml.finish(),
            "<w:style w:type=\"character\" w:customStyle=\"1\" w:styleId=\"Bold\"><w:name w:val=\"Bold\"/><w:basedOn w:val=\"DefaultParagraphFont\"/><w:qFormat/><w:rPr><w:b/></w:rPr></w:style>"
        );
    }
}
