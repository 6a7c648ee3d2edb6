//! Markdown rendering for mind-map documents.

use std::io::Write;

use crate::error::{Error, Result};
use crate::model::{Document, Sheet, Topic};

use super::{
    RenderOptions, RenderResult, RenderStats, MAX_HEADING_LEVEL, MIN_CHILD_HEADING_LEVEL,
};

/// Convert a document to Markdown.
pub fn to_markdown(doc: &Document, options: &RenderOptions) -> String {
    let mut renderer = MarkdownRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to Markdown with statistics.
pub fn to_markdown_with_stats(doc: &Document, options: &RenderOptions) -> RenderResult {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = MarkdownRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// Render a document to Markdown, writing each sheet as it is produced.
pub fn write_markdown<W: Write>(
    doc: &Document,
    options: &RenderOptions,
    mut writer: W,
) -> Result<()> {
    let mut renderer = MarkdownRenderer::new(options.clone());
    let mut buffer = String::new();
    for sheet in &doc.sheets {
        buffer.clear();
        renderer.render_sheet(&mut buffer, sheet);
        writer
            .write_all(buffer.as_bytes())
            .map_err(|e| Error::OutputCreate(e.to_string()))?;
    }
    writer
        .flush()
        .map_err(|e| Error::OutputCreate(e.to_string()))
}

/// Heading level for a descendant topic at `depth` (first-level children are depth 0).
///
/// The root's own heading is level 1, so children start at 2 and the level
/// stops growing at `max_level`, which is itself held to 2..=6.
pub fn heading_level(depth: usize, max_level: u8) -> u8 {
    let max_level = max_level.clamp(MIN_CHILD_HEADING_LEVEL, MAX_HEADING_LEVEL);
    depth
        .saturating_add(MIN_CHILD_HEADING_LEVEL as usize)
        .min(max_level as usize) as u8
}

/// Markdown renderer.
pub struct MarkdownRenderer {
    options: RenderOptions,
    stats: RenderStats,
}

impl MarkdownRenderer {
    /// Create a new Markdown renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: RenderStats::new(),
        }
    }

    /// Render a document to Markdown.
    pub fn render(&mut self, doc: &Document) -> String {
        let mut output = String::new();
        for sheet in &doc.sheets {
            self.render_sheet(&mut output, sheet);
        }
        output
    }

    /// Render a document to Markdown with statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> RenderResult {
        self.options.collect_stats = true;
        let content = self.render(doc);
        RenderResult::new(content, self.stats)
    }

    /// Statistics gathered so far.
    pub fn stats(&self) -> &RenderStats {
        &self.stats
    }

    /// Append one sheet: the root as a level-1 heading, then every
    /// descendant in document order.
    pub fn render_sheet(&mut self, output: &mut String, sheet: &Sheet) {
        let root = &sheet.root_topic;
        if self.options.collect_stats {
            self.stats.add_sheet();
        }

        output.push_str("# ");
        output.push_str(&root.title);
        output.push_str("\n\n");

        for child in root.children() {
            self.render_topic(output, child, 0);
        }

        if self.options.sheet_separator {
            output.push_str("\n\n");
        }
    }

    /// Append a topic and its whole subtree, starting at `depth`.
    ///
    /// Attached children come before detached ones at every level. An
    /// explicit stack keeps very deep trees off the call stack.
    pub fn render_topic(&mut self, output: &mut String, topic: &Topic, depth: usize) {
        let mut stack: Vec<(&Topic, usize)> = vec![(topic, depth)];
        let mut clamped = 0u32;

        while let Some((topic, depth)) = stack.pop() {
            match topic.link() {
                Some(href) => self.render_link(output, topic, href, depth),
                None => {
                    if self.render_heading(output, topic, depth) {
                        clamped += 1;
                    }
                }
            }
            stack.extend(topic.children().rev().map(|child| (child, depth + 1)));
        }

        if clamped > 0 {
            log::debug!(
                "{} heading(s) under \"{}\" capped at level {}",
                clamped,
                topic.title,
                heading_level(usize::MAX, self.options.max_heading_level)
            );
        }
    }

    fn render_link(&mut self, output: &mut String, topic: &Topic, href: &str, depth: usize) {
        if self.options.collect_stats {
            self.stats.add_link(depth);
        }
        output.push('[');
        output.extend(topic.title.chars().filter(|&c| c != '\n'));
        output.push_str("](");
        output.push_str(href);
        output.push_str(")\n");
    }

    /// Returns true when the level was capped.
    fn render_heading(&mut self, output: &mut String, topic: &Topic, depth: usize) -> bool {
        let level = heading_level(depth, self.options.max_heading_level);
        let clamped = depth + (MIN_CHILD_HEADING_LEVEL as usize) > level as usize;
        if self.options.collect_stats {
            self.stats.add_heading(depth, clamped);
        }
        output.push_str(&"#".repeat(level as usize));
        output.push(' ');
        output.push_str(&topic.title);
        output.push_str("\n\n");
        clamped
    }
}
