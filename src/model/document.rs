//! Document-level types.

use super::{Block, Inline, Rule, Section};
use serde::{Deserialize, Serialize};

/// A specification document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Title block metadata
    #[serde(default)]
    pub head: Head,

    /// Top-level sections in document order
    #[serde(default)]
    pub body: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a document with the given title.
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            head: Head {
                title: Some(title.into()),
                ..Default::default()
            },
            body: Vec::new(),
        }
    }

    /// Add a top-level section.
    pub fn add_section(&mut self, section: Section) {
        self.body.push(section);
    }

    /// Builder-style variant of [`Document::add_section`].
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Check if the document has no sections.
    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    /// Total number of sections, nested ones included.
    pub fn section_count(&self) -> usize {
        self.body.iter().map(Section::section_count).sum()
    }

    /// Every block of the document in document order.
    ///
    /// Blocks nested in list items are yielded right after their list.
    pub fn blocks(&self) -> Vec<&Block> {
        let mut blocks = Vec::new();
        for section in &self.body {
            section.collect_blocks(&mut blocks);
        }
        blocks
    }

    /// Every grammar rule of the document in document order.
    pub fn rules(&self) -> impl Iterator<Item = &Rule> {
        self.blocks()
            .into_iter()
            .flat_map(|block| block.rules().iter())
    }

    /// Every inline node of the document in document order.
    pub fn inlines(&self) -> impl Iterator<Item = &Inline> {
        self.blocks()
            .into_iter()
            .filter_map(Block::content)
            .flat_map(|content| content.iter())
    }

    /// Get plain text content of the entire document body.
    pub fn plain_text(&self) -> String {
        self.blocks()
            .into_iter()
            .filter_map(Block::content)
            .map(|content| content.iter().map(Inline::text).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

/// Title block metadata.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Head {
    /// Document title
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Version line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    /// Draft status line; takes precedence over `date`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draft: Option<String>,

    /// Publication date line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,

    /// Author line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
}

impl Head {
    /// The status line shown under the version: the draft marker if present,
    /// otherwise the date.
    pub fn status(&self) -> Option<&str> {
        self.draft.as_deref().or(self.date.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Grammar, Paragraph, RuleKind, SpanStyle};

    #[test]
    fn test_document_new() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
    }

    #[test]
    fn test_head_status_prefers_draft() {
        let mut head = Head {
            date: Some("October 2026".to_string()),
            ..Default::default()
        };
        assert_eq!(head.status(), Some("October 2026"));

        head.draft = Some("Draft 3".to_string());
        assert_eq!(head.status(), Some("Draft 3"));
    }

    #[test]
    fn test_section_count_is_recursive() {
        let doc = Document::new()
            .with_section(
                Section::new("A")
                    .with_section(Section::new("A1"))
                    .with_section(Section::new("A2")),
            )
            .with_section(Section::new("B"));
        assert_eq!(doc.section_count(), 4);
    }

    #[test]
    fn test_rules_and_inlines_in_document_order() {
        let grammar = Grammar::new()
            .with_rule(Rule::new(RuleKind::Token, "digit"))
            .with_rule(Rule::new(RuleKind::Syntax, "start"));
        let mut para = Paragraph::new();
        para.add_text("See ");
        para.add_span(SpanStyle::Reference, "digit");

        let doc = Document::new().with_section(
            Section::new("Grammar")
                .with_block(Block::Text(para))
                .with_block(Block::Grammar(grammar)),
        );

        let names: Vec<_> = doc.rules().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["digit", "start"]);
        assert_eq!(doc.inlines().count(), 2);
        assert_eq!(doc.plain_text(), "See digit");
    }
}
