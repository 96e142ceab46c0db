//! Rendering result with metadata and statistics.

use crate::model::Head;
use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content
    pub content: String,

    /// Title block metadata (copied from source document)
    pub head: Head,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, head: Head, stats: RenderStats) -> Self {
        Self {
            content,
            head,
            stats,
        }
    }
}

/// Statistics collected while walking a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sections rendered
    pub section_count: u32,

    /// Number of paragraph-like blocks rendered
    pub paragraph_count: u32,

    /// Number of code blocks rendered
    pub code_block_count: u32,

    /// Number of lists rendered
    pub list_count: u32,

    /// Number of numbered lists rendered
    pub numbered_list_count: u32,

    /// Number of list items rendered
    pub list_item_count: u32,

    /// Number of grammar rules rendered
    pub grammar_rule_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment section count.
    pub fn add_section(&mut self) {
        self.section_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment code block count.
    pub fn add_code_block(&mut self) {
        self.code_block_count += 1;
    }

    /// Increment list count; numbered lists are also counted separately.
    pub fn add_list(&mut self, numbered: bool) {
        self.list_count += 1;
        if numbered {
            self.numbered_list_count += 1;
        }
    }

    /// Increment list item count.
    pub fn add_list_item(&mut self) {
        self.list_item_count += 1;
    }

    /// Increment grammar rule count.
    pub fn add_grammar_rule(&mut self) {
        self.grammar_rule_count += 1;
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        // Word count: whitespace-separated tokens
        self.word_count += text.split_whitespace().count() as u32;

        // Character count: non-whitespace characters
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_stats_count_text() {
        let mut stats = RenderStats::new();
        stats.count_text("Hello, world! This is a test.");

        assert_eq!(stats.word_count, 6);
        assert_eq!(stats.char_count, 24);
    }

    #[test]
    fn test_render_stats_lists() {
        let mut stats = RenderStats::new();
        stats.add_list(true);
        stats.add_list(false);
        stats.add_list_item();

        assert_eq!(stats.list_count, 2);
        assert_eq!(stats.numbered_list_count, 1);
        assert_eq!(stats.list_item_count, 1);
    }
}
