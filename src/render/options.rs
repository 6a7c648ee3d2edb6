//! Rendering options and configuration.

/// Deepest Markdown heading level.
pub const MAX_HEADING_LEVEL: u8 = 6;

/// Heading level of first-level children (the root uses level 1).
pub const MIN_CHILD_HEADING_LEVEL: u8 = 2;

/// Options for rendering a document to Markdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderOptions {
    /// Maximum heading level for descendant topics (2-6)
    pub max_heading_level: u8,

    /// Emit a blank separator after every sheet
    pub sheet_separator: bool,

    /// Collect rendering statistics
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum heading level.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.max_heading_level = level.clamp(MIN_CHILD_HEADING_LEVEL, MAX_HEADING_LEVEL);
        self
    }

    /// Enable or disable the separator after each sheet.
    pub fn with_sheet_separator(mut self, separator: bool) -> Self {
        self.sheet_separator = separator;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            max_heading_level: MAX_HEADING_LEVEL,
            sheet_separator: true,
            collect_stats: false,
        }
    }
}
