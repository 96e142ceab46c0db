//! # specgen
//!
//! Specification document generator.
//!
//! A specification is a tree of numbered sections holding prose, code,
//! lists and grammar productions. This library checks the grammar for
//! consistency and renders the document as Markdown or as a styled
//! WordprocessingML package.
//!
//! ## Quick Start
//!
//! ```no_run
//! use specgen::{check, load_file, render};
//!
//! fn main() -> specgen::Result<()> {
//!     let doc = load_file("language.json")?;
//!
//!     for line in check(&doc).lines() {
//!         println!("{}", line);
//!     }
//!
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options)?;
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Grammar checking**: duplicate, missing and unreferenced rules
//! - **Markdown**: numbered headings with anchors and a linked table of contents
//! - **Styled package**: a flat OPC WordprocessingML document bound to a style catalogue
//! - **JSON**: ingest and dump of the document tree

pub mod check;
pub mod error;
pub mod ingest;
pub mod model;
pub mod package;
pub mod render;

pub use check::{check, CheckReport, Diagnostic};
pub use error::{Error, Result};
pub use model::{
    Block, Document, Grammar, Head, Inline, List, ListItem, ListKind, Paragraph, ParagraphKind,
    Production, Rule, RuleKind, Section, SectionItem, SpanStyle, Term,
};
pub use render::{JsonFormat, RenderOptions, RenderResult, RenderStats};

use std::io::Read;
use std::path::Path;

/// Load a specification from a JSON file.
///
/// # Example
///
/// ```no_run
/// use specgen::load_file;
///
/// let doc = load_file("language.json").unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    ingest::load_path(path)
}

/// Load a specification from JSON text.
pub fn load_str(text: &str) -> Result<Document> {
    ingest::load_str(text)
}

/// Load a specification from a reader producing JSON.
///
/// # Example
///
/// ```no_run
/// use specgen::load_reader;
/// use std::fs::File;
///
/// let file = File::open("language.json").unwrap();
/// let doc = load_reader(file).unwrap();
/// ```
pub fn load_reader<R: Read>(reader: R) -> Result<Document> {
    ingest::load_reader(reader)
}

/// Convert a specification file to Markdown.
///
/// # Example
///
/// ```no_run
/// use specgen::to_markdown;
///
/// let markdown = to_markdown("language.json").unwrap();
/// std::fs::write("language.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    render::to_markdown(&doc, &RenderOptions::default())
}

/// Convert a specification file to a flat OPC WordprocessingML package.
pub fn to_package<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = load_file(path)?;
    let options = RenderOptions::default();
    Ok(package::assemble(&render::to_styled(&doc, &options), &options))
}

/// Builder for loading and rendering specifications.
///
/// # Example
///
/// ```no_run
/// use specgen::Specgen;
///
/// let markdown = Specgen::new()
///     .without_contents()
///     .with_max_heading(4)
///     .load("language.json")?
///     .to_markdown()?;
/// # Ok::<(), specgen::Error>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct Specgen {
    render_options: RenderOptions,
}

impl Specgen {
    /// Create a new builder with default render options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Use the given render options.
    pub fn with_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Leave out the title block.
    pub fn without_title(mut self) -> Self {
        self.render_options = self.render_options.with_title(false);
        self
    }

    /// Leave out the table of contents.
    pub fn without_contents(mut self) -> Self {
        self.render_options = self.render_options.with_contents(false);
        self
    }

    /// Cap Markdown heading depth.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Set the copyright holder named in package footers.
    pub fn with_copyright(mut self, holder: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_copyright(holder);
        self
    }

    /// Load a specification file.
    pub fn load<P: AsRef<Path>>(self, path: P) -> Result<SpecgenResult> {
        let document = load_file(path)?;
        Ok(self.wrap(document))
    }

    /// Load a specification from JSON text.
    pub fn load_str(self, text: &str) -> Result<SpecgenResult> {
        let document = load_str(text)?;
        Ok(self.wrap(document))
    }

    /// Wrap an already loaded document.
    pub fn wrap(self, document: Document) -> SpecgenResult {
        SpecgenResult {
            document,
            render_options: self.render_options,
        }
    }
}

/// A loaded specification with its render options.
#[derive(Debug, Clone)]
pub struct SpecgenResult {
    /// The loaded document
    pub document: Document,
    render_options: RenderOptions,
}

impl SpecgenResult {
    /// Check the grammar.
    pub fn check(&self) -> CheckReport {
        check(&self.document)
    }

    /// Render to Markdown.
    pub fn to_markdown(&self) -> Result<String> {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Render to Markdown with statistics.
    pub fn to_markdown_with_stats(&self) -> Result<RenderResult> {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Render to a flat OPC WordprocessingML package.
    pub fn to_package(&self) -> String {
        let styled = render::to_styled(&self.document, &self.render_options);
        package::assemble(&styled, &self.render_options)
    }

    /// Dump the document tree as JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Consume and return the document.
    pub fn into_document(self) -> Document {
        self.document
    }
}
