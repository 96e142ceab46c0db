//! Structural section numbering.

use std::fmt;

use crate::model::{Document, Section};

/// Dotted structural number of a section (`1`, `1.2`, `2.3.1`, ...).
///
/// Derived from sibling order at every depth; each component is 1-based.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SectionNumber(Vec<u32>);

impl SectionNumber {
    /// Number of the `ordinal`-th (1-based) top-level section.
    pub fn top(ordinal: u32) -> Self {
        Self(vec![ordinal])
    }

    /// Number of the `ordinal`-th (1-based) subsection of this section.
    pub fn child(&self, ordinal: u32) -> Self {
        let mut parts = self.0.clone();
        parts.push(ordinal);
        Self(parts)
    }

    /// Nesting depth; top-level sections are at depth 1.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    /// Number components from the outermost section inwards.
    pub fn parts(&self) -> &[u32] {
        &self.0
    }

    /// Bookmark name used for cross-document anchors (`Section_1_2`).
    pub fn bookmark(&self) -> String {
        let parts: Vec<String> = self.0.iter().map(u32::to_string).collect();
        format!("Section_{}", parts.join("_"))
    }
}

impl fmt::Display for SectionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, part) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", part)?;
        }
        Ok(())
    }
}

/// One line of the document outline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlineEntry {
    /// Structural number
    pub number: SectionNumber,
    /// Section title
    pub title: String,
}

impl OutlineEntry {
    /// Nesting depth of the entry.
    pub fn depth(&self) -> usize {
        self.number.depth()
    }
}

/// Numbered outline of every section in document order.
pub fn outline(document: &Document) -> Vec<OutlineEntry> {
    let mut entries = Vec::new();
    for (section, ordinal) in document.body.iter().zip(1u32..) {
        collect_outline(section, SectionNumber::top(ordinal), &mut entries);
    }
    entries
}

fn collect_outline(section: &Section, number: SectionNumber, out: &mut Vec<OutlineEntry>) {
    out.push(OutlineEntry {
        number: number.clone(),
        title: section.title.clone(),
    });
    for (subsection, ordinal) in section.subsections().zip(1u32..) {
        collect_outline(subsection, number.child(ordinal), out);
    }
}
