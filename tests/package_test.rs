//! Integration tests for package assembly.

use specgen::package::{assemble, styles, Run};
use specgen::render::{to_styled, RenderOptions};
use specgen::{load_file, Document};

fn fixture() -> Document {
    load_file("tests/fixtures/language.json").unwrap()
}

#[test]
fn test_every_emitted_style_is_catalogued() {
    let styled = to_styled(&fixture(), &RenderOptions::default());

    for paragraph in &styled.paragraphs {
        if let Some(style) = &paragraph.style {
            let def = styles::find(style).unwrap_or_else(|| panic!("missing style {}", style));
            assert!(!def.character, "{} is a character style", style);
        }
        for run in &paragraph.runs {
            if let Some(style) = run.style() {
                let def = styles::find(style).unwrap_or_else(|| panic!("missing style {}", style));
                assert!(def.character, "{} is a paragraph style", style);
            }
        }
    }
}

#[test]
fn test_section_breaks_per_top_level_section() {
    let doc = fixture();
    let styled = to_styled(&doc, &RenderOptions::default());
    let package = assemble(&styled, &RenderOptions::default());

    assert_eq!(package.matches("<w:sectPr>").count(), 2 + doc.body.len());
    assert_eq!(package.matches("r:id=\"rId10\"").count(), 1);
    assert_eq!(package.matches("<w:pgNumType w:start=\"1\"/>").count(), 1);
}

#[test]
fn test_allocated_numbering_written() {
    let styled = to_styled(&fixture(), &RenderOptions::default());
    assert_eq!(styled.numbering.len(), 1);

    let package = assemble(&styled, &RenderOptions::default());
    assert!(package.contains(
        "<w:num w:numId=\"6\"><w:abstractNumId w:val=\"3\"/><w:lvlOverride w:ilvl=\"0\"><w:startOverride w:val=\"1\"/></w:lvlOverride></w:num>"
    ));
    assert_eq!(
        package
            .matches("<w:numPr><w:ilvl w:val=\"0\"/><w:numId w:val=\"6\"/></w:numPr>")
            .count(),
        2
    );
}

#[test]
fn test_text_is_escaped() {
    let styled = to_styled(&fixture(), &RenderOptions::default());
    let grammar = styled
        .with_style("Grammar")
        .find(|p| p.plain_text().starts_with("expression"))
        .unwrap();
    assert!(grammar.runs.contains(&Run::styled("GrammarTerminal", "+")));

    let mut doc = fixture();
    doc.head.title = Some("A <b> & C".to_string());
    let package = assemble(&to_styled(&doc, &RenderOptions::default()), &RenderOptions::default());
    assert!(package.contains("A &lt;b&gt; &amp; C"));
    assert!(!package.contains("A <b> & C"));
}

#[test]
fn test_copyright_holder_in_footers() {
    let styled = to_styled(&fixture(), &RenderOptions::default());

    let anonymous = assemble(&styled, &RenderOptions::default());
    assert!(anonymous.contains("Copyright \u{a9} </w:t>"));

    let options = RenderOptions::new().with_copyright("Example Corp");
    let named = assemble(&styled, &options);
    assert_eq!(named.matches("Copyright \u{a9} Example Corp ").count(), 4);
}

#[test]
fn test_package_is_deterministic() {
    let doc = fixture();
    let first = assemble(&to_styled(&doc, &RenderOptions::default()), &RenderOptions::default());
    let second = assemble(&to_styled(&doc, &RenderOptions::default()), &RenderOptions::default());
    assert_eq!(first, second);
}
