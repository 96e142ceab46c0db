//! Block-level types.

use super::{Grammar, Inline, Rule, SpanStyle};
use serde::{Deserialize, Serialize};

/// A content block within a section or list item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Block {
    /// Prose paragraph
    Text(Paragraph),

    /// Code listing; whitespace is significant
    Code(Paragraph),

    /// Highlighted alert
    Alert(Paragraph),

    /// Editorial annotation
    Annotation(Paragraph),

    /// Open issue
    Issue(Paragraph),

    /// Label line
    Label(Paragraph),

    /// Term definition
    Definition(Paragraph),

    /// Grammar productions
    Grammar(Grammar),

    /// Bulleted list
    BulletedList(List),

    /// Numbered list
    NumberedList(List),
}

impl Block {
    /// The paragraph kind and payload, if this is a paragraph-like block.
    pub fn paragraph(&self) -> Option<(ParagraphKind, &Paragraph)> {
        match self {
            Block::Text(p) => Some((ParagraphKind::Text, p)),
            Block::Code(p) => Some((ParagraphKind::Code, p)),
            Block::Alert(p) => Some((ParagraphKind::Alert, p)),
            Block::Annotation(p) => Some((ParagraphKind::Annotation, p)),
            Block::Issue(p) => Some((ParagraphKind::Issue, p)),
            Block::Label(p) => Some((ParagraphKind::Label, p)),
            Block::Definition(p) => Some((ParagraphKind::Definition, p)),
            Block::Grammar(_) | Block::BulletedList(_) | Block::NumberedList(_) => None,
        }
    }

    /// Inline content, if this is a paragraph-like block.
    pub fn content(&self) -> Option<&[Inline]> {
        self.paragraph().map(|(_, p)| p.content.as_slice())
    }

    /// The list kind and payload, if this is a list block.
    pub fn list(&self) -> Option<(ListKind, &List)> {
        match self {
            Block::BulletedList(list) => Some((ListKind::Bulleted, list)),
            Block::NumberedList(list) => Some((ListKind::Numbered, list)),
            _ => None,
        }
    }

    /// Grammar rules held by this block; empty for every other variant.
    pub fn rules(&self) -> &[Rule] {
        match self {
            Block::Grammar(grammar) => &grammar.rules,
            _ => &[],
        }
    }

    pub(crate) fn collect_blocks<'a>(&'a self, out: &mut Vec<&'a Block>) {
        out.push(self);
        if let Some((_, list)) = self.list() {
            for item in &list.items {
                for block in &item.blocks {
                    block.collect_blocks(out);
                }
            }
        }
    }
}

/// Kinds of paragraph-like blocks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParagraphKind {
    /// Prose paragraph
    Text,
    /// Code listing
    Code,
    /// Alert
    Alert,
    /// Annotation
    Annotation,
    /// Issue
    Issue,
    /// Label
    Label,
    /// Definition
    Definition,
}

impl ParagraphKind {
    /// Whether text in this kind of block keeps its line structure.
    pub fn preserves_whitespace(self) -> bool {
        matches!(self, ParagraphKind::Code)
    }
}

/// Inline content of a paragraph-like block.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Paragraph {
    /// Inline nodes in order
    #[serde(default)]
    pub content: Vec<Inline>,
}

impl Paragraph {
    /// Create a new empty paragraph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a paragraph with plain text.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut p = Self::new();
        p.add_text(text);
        p
    }

    /// Add plain text.
    pub fn add_text(&mut self, text: impl Into<String>) {
        self.content.push(Inline::Text { text: text.into() });
    }

    /// Add a styled span.
    pub fn add_span(&mut self, style: SpanStyle, text: impl Into<String>) {
        self.content.push(Inline::Span {
            style,
            text: text.into(),
        });
    }

    /// Add a line break.
    pub fn add_line_break(&mut self) {
        self.content.push(Inline::LineBreak);
    }

    /// Builder-style variant of [`Paragraph::add_span`].
    pub fn with_span(mut self, style: SpanStyle, text: impl Into<String>) -> Self {
        self.add_span(style, text);
        self
    }

    /// Get plain text content of the paragraph.
    pub fn plain_text(&self) -> String {
        self.content.iter().map(Inline::text).collect()
    }

    /// Check if the paragraph has no visible text.
    pub fn is_empty(&self) -> bool {
        self.plain_text().trim().is_empty()
    }
}

/// List flavour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListKind {
    /// Bulleted list
    Bulleted,
    /// Numbered list; every list restarts at 1
    Numbered,
}

/// A list container. Lists only ever contain list items.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct List {
    /// Items in order
    #[serde(default)]
    pub items: Vec<ListItem>,
}

impl List {
    /// Create a new empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an item.
    pub fn add_item(&mut self, item: ListItem) {
        self.items.push(item);
    }

    /// Builder-style variant of [`List::add_item`].
    pub fn with_item(mut self, item: ListItem) -> Self {
        self.add_item(item);
        self
    }
}

/// A list item; may hold any block, nested lists included.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ListItem {
    /// Blocks in order
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl ListItem {
    /// Create an item holding the given blocks.
    pub fn new(blocks: Vec<Block>) -> Self {
        Self { blocks }
    }

    /// Create an item holding a single text paragraph.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Block::Text(Paragraph::with_text(text))])
    }
}
