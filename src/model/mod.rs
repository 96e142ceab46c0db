//! Document model types for specification content.
//!
//! This module defines the in-memory tree that the ingest step produces and
//! that the checker and both renderers walk. Every composite node owns its
//! children exclusively, so the tree is finite and acyclic by construction.

mod block;
mod document;
mod grammar;
mod inline;
mod section;

pub use block::{Block, List, ListItem, ListKind, Paragraph, ParagraphKind};
pub use document::{Document, Head};
pub use grammar::{Grammar, Production, Rule, RuleKind, Term};
pub use inline::{Inline, SpanStyle};
pub use section::{Section, SectionItem};
