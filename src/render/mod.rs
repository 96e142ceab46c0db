//! Rendering module for converting documents to output formats.
//!
//! Both output formats share one walk over the document ([`walk`]); a
//! [`Backend`] only decides how headings, paragraphs, list items and grammar
//! rules look.

mod json;
mod markdown;
mod numbering;
mod options;
mod result;
mod styled;
pub mod walker;
pub mod whitespace;

pub use json::{to_json, JsonFormat};
pub use markdown::{escape_markdown, to_markdown, to_markdown_with_stats, MarkdownRenderer};
pub use numbering::{outline, OutlineEntry, SectionNumber};
pub use options::RenderOptions;
pub use result::{RenderResult, RenderStats};
pub use styled::{paragraph_style_id, span_style_id, to_styled, MAX_HEADING_STYLE};
pub use walker::{
    segments, walk, Backend, BlockStyle, GrammarToken, Heading, ListMarker, RuleLayout, Segment,
};
