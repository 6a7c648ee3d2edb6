//! Parsing options and configuration.

/// Default suffix of the archive entry holding the sheet JSON.
pub const DEFAULT_ENTRY_SUFFIX: &str = "content.json";

/// Options for loading mind-map documents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Suffix the content entry name must end with
    pub entry_suffix: String,

    /// Check the zip magic bytes before opening the archive
    pub verify_container: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the content entry suffix.
    pub fn with_entry_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.entry_suffix = suffix.into();
        self
    }

    /// Enable or disable the container magic check.
    pub fn with_verify_container(mut self, verify: bool) -> Self {
        self.verify_container = verify;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            entry_suffix: DEFAULT_ENTRY_SUFFIX.to_string(),
            verify_container: true,
        }
    }
}
