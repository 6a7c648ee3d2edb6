//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered Markdown
    pub content: String,

    /// Rendering statistics
    pub stats: RenderStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: RenderStats) -> Self {
        Self { content, stats }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Number of sheets rendered
    pub sheet_count: u32,

    /// Number of topics rendered, root topics included
    pub topic_count: u32,

    /// Number of heading lines, root headings included
    pub heading_count: u32,

    /// Number of link lines
    pub link_count: u32,

    /// Headings whose level was capped by the maximum
    pub clamped_heading_count: u32,

    /// Deepest topic level below a sheet's root (the root is 0)
    pub max_depth: u32,
}

impl RenderStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment sheet count (the root heading counts as a topic and heading).
    pub fn add_sheet(&mut self) {
        self.sheet_count += 1;
        self.topic_count += 1;
        self.heading_count += 1;
    }

    /// Record a heading at the given rendering depth (first-level children are 0).
    pub fn add_heading(&mut self, depth: usize, clamped: bool) {
        self.topic_count += 1;
        self.heading_count += 1;
        if clamped {
            self.clamped_heading_count += 1;
        }
        self.reach(depth);
    }

    /// Record a link line at the given rendering depth.
    pub fn add_link(&mut self, depth: usize) {
        self.topic_count += 1;
        self.link_count += 1;
        self.reach(depth);
    }

    fn reach(&mut self, depth: usize) {
        self.max_depth = self.max_depth.max(depth as u32 + 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stats_counts() {
        let mut stats = RenderStats::new();
        stats.add_sheet();
        stats.add_heading(0, false);
        stats.add_link(3);
        stats.add_heading(5, true);

        assert_eq!(stats.sheet_count, 1);
        assert_eq!(stats.topic_count, 4);
        assert_eq!(stats.heading_count, 3);
        assert_eq!(stats.link_count, 1);
        assert_eq!(stats.clamped_heading_count, 1);
        assert_eq!(stats.max_depth, 6);
    }
}
