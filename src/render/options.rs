//! Rendering options and configuration.

/// Options for rendering a specification document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Emit the title block (title, version, status, author)
    pub include_title: bool,

    /// Emit the table of contents
    pub include_contents: bool,

    /// Maximum Markdown heading level (1-6)
    pub max_heading_level: u8,

    /// Character to use for unordered list markers
    pub list_marker: char,

    /// Escape special Markdown characters in prose text
    pub escape_special_chars: bool,

    /// Copyright holder named in the package footers
    pub copyright_holder: Option<String>,

    /// Collect rendering statistics during the walk
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable the title block.
    pub fn with_title(mut self, include: bool) -> Self {
        self.include_title = include;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_contents(mut self, include: bool) -> Self {
        self.include_contents = include;
        self
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(1, 6);
        self
    }

    /// Set the list marker character.
    pub fn with_list_marker(mut self, marker: char) -> Self {
        self.list_marker = marker;
        self
    }

    /// Enable or disable Markdown escaping of prose text.
    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_special_chars = escape;
        self
    }

    /// Set the copyright holder for the package footers.
    pub fn with_copyright(mut self, holder: impl Into<String>) -> Self {
        self.copyright_holder = Some(holder.into());
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_title: true,
            include_contents: true,
            max_heading_level: 6,
            list_marker: '*',
            escape_special_chars: true,
            copyright_holder: None,
            collect_stats: false,
        }
    }
}
