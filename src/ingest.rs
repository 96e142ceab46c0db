//! Loading documents from their JSON form.
//!
//! Every loader runs [`validate`] before handing the tree out, so checking
//! and rendering never see a document that breaks the ingest preconditions.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};
use crate::model::{Block, Document, Inline, Section, SectionItem};
use crate::render::SectionNumber;

/// Load a document from JSON text.
pub fn load_str(text: &str) -> Result<Document> {
    let doc: Document = serde_json::from_str(text)?;
    finish(doc)
}

/// Load a document from a reader producing JSON.
pub fn load_reader<R: Read>(reader: R) -> Result<Document> {
    let doc: Document = serde_json::from_reader(reader)?;
    finish(doc)
}

/// Load a document from a JSON file.
pub fn load_path<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    log::debug!("loading {}", path.display());
    let file = File::open(path)?;
    load_reader(BufReader::new(file))
}

fn finish(doc: Document) -> Result<Document> {
    validate(&doc)?;
    log::debug!("loaded document with {}", describe(&doc));
    Ok(doc)
}

fn describe(doc: &Document) -> String {
    format!(
        "{} sections, {} at top level",
        doc.section_count(),
        doc.body.len()
    )
}

/// Check the ingest preconditions.
///
/// Rejects styled spans with no text, rules with an empty name and
/// non-terminal references with an empty name. The error names the
/// structural number of the enclosing section.
pub fn validate(doc: &Document) -> Result<()> {
    for (section, ordinal) in doc.body.iter().zip(1u32..) {
        validate_section(section, &SectionNumber::top(ordinal))?;
    }
    Ok(())
}

fn validate_section(section: &Section, number: &SectionNumber) -> Result<()> {
    let mut subsections = 0;
    for item in &section.children {
        match item {
            SectionItem::Section(child) => {
                subsections += 1;
                validate_section(child, &number.child(subsections))?;
            }
            SectionItem::Block(block) => validate_block(block, number)?,
        }
    }
    Ok(())
}

fn validate_block(block: &Block, number: &SectionNumber) -> Result<()> {
    if let Some(content) = block.content() {
        for inline in content {
            if let Inline::Span { style, text } = inline {
                if text.is_empty() {
                    return Err(Error::Ingest(format!(
                        "empty {} span in section {}",
                        style.name(),
                        number
                    )));
                }
            }
        }
    }

    for rule in block.rules() {
        if rule.name.trim().is_empty() {
            return Err(Error::Ingest(format!(
                "grammar rule without a name in section {}",
                number
            )));
        }
        if rule.references().iter().any(|name| name.trim().is_empty()) {
            return Err(Error::Ingest(format!(
                "empty non-terminal in rule '{}' in section {}",
                rule.name, number
            )));
        }
    }

    if let Some((_, list)) = block.list() {
        for item in &list.items {
            for block in &item.blocks {
                validate_block(block, number)?;
            }
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grammar, Paragraph, Rule, SpanStyle, Term};

    #[test]
    fn test_load_minimal() {
        let doc = load_str(r#"{"head":{"title":"T"},"body":[]}"#).unwrap();
        assert_eq!(doc.head.title.as_deref(), Some("T"));
        assert!(doc.body.is_empty());
    }

    #[test]
    fn test_load_reader() {
        let json = br#"{"body":[{"title":"A"}]}"#;
        let doc = load_reader(&json[..]).unwrap();
        assert_eq!(doc.section_count(), 1);
    }

    #[test]
    fn test_describe_counts_nested_sections() {
        let doc = Document::new()
            .with_section(Section::new("A").with_section(Section::new("A1")))
            .with_section(Section::new("B"));
        assert_eq!(describe(&doc), "3 sections, 2 at top level");
    }

    #[test]
    fn test_malformed_json_is_json_error() {
        let err = load_str("{\"body\": [").unwrap_err();
        assert!(matches!(err, Error::Json(_)));
    }

    #[test]
    fn test_empty_span_names_section() {
        let para = Paragraph::new().with_span(SpanStyle::Emphasis, "");
        let doc = Document::new().with_section(
            Section::new("A").with_section(Section::new("B").with_block(Block::Text(para))),
        );
        let err = validate(&doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid document: empty emphasis span in section 1.1"
        );
    }

    #[test]
    fn test_nested_list_span_checked() {
        let para = Paragraph::new().with_span(SpanStyle::Code, "");
        let list = crate::model::List::new()
            .with_item(crate::model::ListItem::new(vec![Block::Text(para)]));
        let doc = Document::new().with_section(Section::new("A").with_block(Block::BulletedList(list)));
        assert!(matches!(validate(&doc), Err(Error::Ingest(_))));
    }

    #[test]
    fn test_unnamed_rule_rejected() {
        let grammar = Grammar::new().with_rule(Rule::syntax(""));
        let doc = Document::new()
            .with_section(Section::new("A"))
            .with_section(Section::new("B").with_block(Block::Grammar(grammar)));
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().ends_with("in section 2"));
    }

    #[test]
    fn test_empty_non_terminal_rejected() {
        let grammar = Grammar::new()
            .with_rule(Rule::syntax("a").with_production(vec![Term::opt(Term::nt(""))]));
        let doc = Document::new().with_section(Section::new("A").with_block(Block::Grammar(grammar)));
        let err = validate(&doc).unwrap_err();
        assert!(err.to_string().contains("rule 'a'"));
    }
}
