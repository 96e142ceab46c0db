//! Section-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// A titled section; sections nest to arbitrary depth.
///
/// Structural numbers (`1`, `1.1`, ...) are not stored on the node. Each
/// render pass derives them from sibling order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Section {
    /// Section title
    pub title: String,

    /// Subsections and blocks in document order
    #[serde(default)]
    pub children: Vec<SectionItem>,
}

impl Section {
    /// Create a new empty section.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            children: Vec::new(),
        }
    }

    /// Add a subsection.
    pub fn add_section(&mut self, section: Section) {
        self.children.push(SectionItem::Section(section));
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.children.push(SectionItem::Block(block));
    }

    /// Builder-style variant of [`Section::add_section`].
    pub fn with_section(mut self, section: Section) -> Self {
        self.add_section(section);
        self
    }

    /// Builder-style variant of [`Section::add_block`].
    pub fn with_block(mut self, block: Block) -> Self {
        self.add_block(block);
        self
    }

    /// Direct subsections, in order.
    pub fn subsections(&self) -> impl Iterator<Item = &Section> {
        self.children.iter().filter_map(|item| match item {
            SectionItem::Section(section) => Some(section),
            SectionItem::Block(_) => None,
        })
    }

    /// Number of sections in this subtree, this one included.
    pub fn section_count(&self) -> usize {
        1 + self.subsections().map(Section::section_count).sum::<usize>()
    }

    pub(crate) fn collect_blocks<'a>(&'a self, out: &mut Vec<&'a Block>) {
        for item in &self.children {
            match item {
                SectionItem::Section(section) => section.collect_blocks(out),
                SectionItem::Block(block) => block.collect_blocks(out),
            }
        }
    }
}

/// A child of a section: either a nested section or a content block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SectionItem {
    /// A nested section
    Section(Section),

    /// A content block
    Block(Block),
}
