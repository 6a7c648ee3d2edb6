//! Rendering module for converting documents to Markdown.

mod markdown;
mod options;
mod result;

pub use markdown::{
    heading_level, to_markdown, to_markdown_with_stats, write_markdown, MarkdownRenderer,
};
pub use options::{RenderOptions, MAX_HEADING_LEVEL, MIN_CHILD_HEADING_LEVEL};
pub use result::{RenderResult, RenderStats};
