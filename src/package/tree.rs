//! Styled paragraph/run tree.

use super::numbering::NumberingInstance;

/// The styled rendering of a document, ready for assembly.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyledDocument {
    /// Body paragraphs in order
    pub paragraphs: Vec<Paragraph>,

    /// Numbering instances allocated during the render pass
    pub numbering: Vec<NumberingInstance>,
}

impl StyledDocument {
    /// Paragraphs using the given style.
    pub fn with_style<'a>(&'a self, style: &'a str) -> impl Iterator<Item = &'a Paragraph> + 'a {
        self.paragraphs
            .iter()
            .filter(move |p| p.style.as_deref() == Some(style))
    }

    /// Plain text of the whole body, one line per paragraph.
    pub fn plain_text(&self) -> String {
        self.paragraphs
            .iter()
            .map(Paragraph::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// A styled paragraph.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Paragraph {
    /// Paragraph style id
    pub style: Option<String>,

    /// Numbering instance id, applied at list level 0
    pub numbering: Option<u32>,

    /// Bookmark wrapping the paragraph content
    pub bookmark: Option<String>,

    /// Section break closing the page section at this paragraph
    pub section_break: Option<SectionBreak>,

    /// Runs in order
    pub runs: Vec<Run>,
}

impl Paragraph {
    /// Create an empty paragraph with a style.
    pub fn styled(style: impl Into<String>) -> Self {
        Self {
            style: Some(style.into()),
            ..Default::default()
        }
    }

    /// Builder-style run append.
    pub fn with_run(mut self, run: Run) -> Self {
        self.runs.push(run);
        self
    }

    /// Append a run.
    pub fn push(&mut self, run: Run) {
        self.runs.push(run);
    }

    /// Text of the paragraph; breaks read as newlines.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for run in &self.runs {
            match run {
                Run::Text { text: t, .. } => text.push_str(t),
                Run::Break => text.push('\n'),
                Run::LastRenderedPageBreak | Run::Field { .. } => {}
            }
        }
        text
    }
}

/// A run of content inside a paragraph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Run {
    /// Text with an optional character style
    Text {
        /// Character style id
        style: Option<String>,
        /// Text content
        text: String,
        /// Keep leading and trailing spaces
        preserve: bool,
    },

    /// Line break
    Break,

    /// Marker for a page break the layout engine last rendered here
    LastRenderedPageBreak,

    /// A field with its instruction text
    Field {
        /// Field instruction
        instruction: String,
    },
}

impl Run {
    /// Unstyled text run.
    pub fn text(text: impl Into<String>) -> Self {
        Run::Text {
            style: None,
            text: text.into(),
            preserve: false,
        }
    }

    /// Unstyled text run keeping its spaces.
    pub fn preserved(text: impl Into<String>) -> Self {
        Run::Text {
            style: None,
            text: text.into(),
            preserve: true,
        }
    }

    /// Styled text run keeping its spaces.
    pub fn styled(style: impl Into<String>, text: impl Into<String>) -> Self {
        Run::Text {
            style: Some(style.into()),
            text: text.into(),
            preserve: true,
        }
    }

    /// Character style of a text run.
    pub fn style(&self) -> Option<&str> {
        match self {
            Run::Text { style, .. } => style.as_deref(),
            _ => None,
        }
    }
}

/// Page section boundaries and the header/footer bindings they carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SectionBreak {
    /// End of the title page
    TitlePage,
    /// End of the table of contents
    Contents,
    /// End of a top-level body section; `first` marks the first one
    Body {
        /// First body section of the document
        first: bool,
    },
}
