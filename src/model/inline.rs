//! Inline-level types.

use serde::{Deserialize, Serialize};

/// Inline content within a paragraph-like block.
///
/// Styled spans always hold a single text leaf.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum Inline {
    /// Plain text; whitespace handling follows the enclosing block
    Text {
        /// Raw text
        text: String,
    },

    /// A styled span
    Span {
        /// Span style
        style: SpanStyle,
        /// Span text
        text: String,
    },

    /// An explicit line break
    LineBreak,
}

impl Inline {
    /// Create a plain text node.
    pub fn text_node(text: impl Into<String>) -> Self {
        Inline::Text { text: text.into() }
    }

    /// Create a styled span.
    pub fn span(style: SpanStyle, text: impl Into<String>) -> Self {
        Inline::Span {
            style,
            text: text.into(),
        }
    }

    /// Raw text of the node; a line break reads as a newline.
    pub fn text(&self) -> &str {
        match self {
            Inline::Text { text } | Inline::Span { text, .. } => text,
            Inline::LineBreak => "\n",
        }
    }

    /// The referenced symbol name, if this is a reference span.
    pub fn reference(&self) -> Option<&str> {
        match self {
            Inline::Span {
                style: SpanStyle::Reference,
                text,
            } => Some(text),
            _ => None,
        }
    }
}

/// Inline span styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SpanStyle {
    /// Bold emphasis
    Emphasis,
    /// Italic
    Italic,
    /// Bold italic
    BoldItalic,
    /// Embedded label
    Label,
    /// Embedded code
    Code,
    /// Subscript
    Subscript,
    /// Superscript
    Superscript,
    /// Strikethrough
    Strikethrough,
    /// Cross-reference to a grammar symbol
    Reference,
    /// Defining occurrence of a term
    Definition,
}

impl SpanStyle {
    /// Name used in diagnostics and ingest messages.
    pub fn name(self) -> &'static str {
        match self {
            SpanStyle::Emphasis => "emphasis",
            SpanStyle::Italic => "italic",
            SpanStyle::BoldItalic => "boldItalic",
            SpanStyle::Label => "label",
            SpanStyle::Code => "code",
            SpanStyle::Subscript => "subscript",
            SpanStyle::Superscript => "superscript",
            SpanStyle::Strikethrough => "strikethrough",
            SpanStyle::Reference => "reference",
            SpanStyle::Definition => "definition",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_only_for_reference_spans() {
        assert_eq!(
            Inline::span(SpanStyle::Reference, "expr").reference(),
            Some("expr")
        );
        assert_eq!(Inline::span(SpanStyle::Code, "expr").reference(), None);
        assert_eq!(Inline::text_node("expr").reference(), None);
    }

    #[test]
    fn test_inline_json_shape() {
        let json = r#"[
            {"kind": "text", "text": "a"},
            {"kind": "span", "style": "boldItalic", "text": "b"},
            {"kind": "lineBreak"}
        ]"#;
        let inlines: Vec<Inline> = serde_json::from_str(json).unwrap();
        assert_eq!(inlines[1], Inline::span(SpanStyle::BoldItalic, "b"));
        assert_eq!(inlines[2], Inline::LineBreak);
    }
}
