//! # unxmind
//!
//! Mind-map archive to Markdown conversion library for Rust.
//!
//! This library reads the `content.json` document packed inside a mind-map
//! archive (`.xmind`) and renders every sheet's topic tree as nested
//! Markdown headings, with link lines for topics that carry a hyperlink.
//!
//! ## Quick Start
//!
//! ```no_run
//! use unxmind::{parse_file, render};
//!
//! fn main() -> unxmind::Result<()> {
//!     // Parse an archive
//!     let doc = parse_file("plan.xmind")?;
//!
//!     // Convert to Markdown
//!     let options = render::RenderOptions::default();
//!     let markdown = render::to_markdown(&doc, &options);
//!     println!("{}", markdown);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Output shape
//!
//! - The root topic of each sheet becomes a level-1 heading.
//! - Descendants become headings one level deeper per tree level, capped at 6.
//! - Topics with a link become `[title](href)` lines instead of headings.
//! - Attached children are written before detached children at every level.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_format_from_bytes, detect_format_from_path, ContainerFormat};
pub use error::{Error, Result};
pub use model::{Children, Document, Sheet, Topic};
pub use parser::{ParseOptions, XmindParser};
pub use render::{RenderOptions, RenderResult, RenderStats};

use std::fs::File;
use std::io::{BufWriter, Read};
use std::path::{Path, PathBuf};

/// Parse a mind-map archive file and return the decoded document.
///
/// # Example
///
/// ```no_run
/// use unxmind::parse_file;
///
/// let doc = parse_file("plan.xmind").unwrap();
/// println!("Sheets: {}", doc.sheet_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = XmindParser::open(path)?;
    parser.parse()
}

/// Parse a mind-map archive file with custom options.
///
/// # Example
///
/// ```no_run
/// use unxmind::{parse_file_with_options, ParseOptions};
///
/// let options = ParseOptions::new().with_entry_suffix("content.json");
/// let doc = parse_file_with_options("plan.xmind", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = XmindParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse a mind-map archive held in memory.
pub fn parse_bytes(data: &[u8]) -> Result<Document> {
    let parser = XmindParser::from_bytes(data)?;
    parser.parse()
}

/// Parse a mind-map archive held in memory with custom options.
pub fn parse_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Document> {
    let parser = XmindParser::from_bytes_with_options(data, options)?;
    parser.parse()
}

/// Parse a mind-map archive from a reader.
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = XmindParser::from_reader(reader)?;
    parser.parse()
}

/// Decode already-extracted `content.json` bytes.
///
/// # Example
///
/// ```
/// let doc = unxmind::parse_content(br#"[{"rootTopic": {"title": "Plan"}}]"#).unwrap();
/// assert_eq!(doc.sheets[0].title(), "Plan");
/// ```
pub fn parse_content(data: &[u8]) -> Result<Document> {
    parser::decode_content(data)
}

/// Parse a mind-map archive file without blocking the async runtime on file I/O.
#[cfg(feature = "async")]
pub async fn parse_file_async<P: AsRef<Path>>(path: P) -> Result<Document> {
    let path = path.as_ref();
    let data = tokio::fs::read(path)
        .await
        .map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
    parse_bytes(&data)
}

/// Convert a mind-map archive to Markdown.
///
/// # Example
///
/// ```no_run
/// use unxmind::to_markdown;
///
/// let markdown = to_markdown("plan.xmind").unwrap();
/// std::fs::write("plan.md", markdown).unwrap();
/// ```
pub fn to_markdown<P: AsRef<Path>>(path: P) -> Result<String> {
    to_markdown_with_options(path, &RenderOptions::default())
}

/// Convert a mind-map archive to Markdown with custom options.
pub fn to_markdown_with_options<P: AsRef<Path>>(
    path: P,
    options: &RenderOptions,
) -> Result<String> {
    let doc = parse_file(path)?;
    Ok(render::to_markdown(&doc, options))
}

/// Markdown path for an input archive: same path, extension replaced by `.md`.
///
/// The extension starts at the last `.` of the file name, so a name like
/// `.xmind` is all extension and maps to `.md`.
///
/// # Example
///
/// ```
/// use std::path::Path;
///
/// let out = unxmind::output_path_for("maps/plan.xmind");
/// assert_eq!(out, Path::new("maps/plan.md"));
/// ```
pub fn output_path_for<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    match input.file_name().and_then(|name| name.to_str()) {
        Some(name) if name.rfind('.') == Some(0) => input.with_file_name(".md"),
        _ => input.with_extension("md"),
    }
}

/// Write a rendered document to a Markdown file.
///
/// The file is created (or truncated) only when called, so callers that fail
/// earlier leave no output behind.
pub fn write_markdown_file<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let path = path.as_ref();
    let file = File::create(path)
        .map_err(|e| Error::OutputCreate(format!("{}: {}", path.display(), e)))?;
    render::write_markdown(doc, options, BufWriter::new(file))
}

/// Convert an archive into a Markdown file next to it.
///
/// Returns the path of the written file.
///
/// # Example
///
/// ```no_run
/// let written = unxmind::convert_file("plan.xmind").unwrap();
/// println!("Markdown written: {}", written.display());
/// ```
pub fn convert_file<P: AsRef<Path>>(input: P) -> Result<PathBuf> {
    let input = input.as_ref();
    let output = output_path_for(input);
    Unxmind::new().parse(input)?.write_to(&output)?;
    Ok(output)
}

/// Builder for parsing and converting mind-map archives.
///
/// # Example
///
/// ```no_run
/// use unxmind::Unxmind;
///
/// let markdown = Unxmind::new()
///     .with_max_heading(4)
///     .without_sheet_separator()
///     .parse("plan.xmind")?
///     .to_markdown();
/// # Ok::<(), unxmind::Error>(())
/// ```
pub struct Unxmind {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Unxmind {
    /// Create a new Unxmind builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the suffix of the content entry to read.
    pub fn with_entry_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_entry_suffix(suffix);
        self
    }

    /// Skip the zip magic check before opening.
    pub fn skip_container_check(mut self) -> Self {
        self.parse_options = self.parse_options.with_verify_container(false);
        self
    }

    /// Set the maximum heading level for descendants.
    pub fn with_max_heading(mut self, level: u8) -> Self {
        self.render_options = self.render_options.with_max_heading(level);
        self
    }

    /// Drop the blank separator written after each sheet.
    pub fn without_sheet_separator(mut self) -> Self {
        self.render_options = self.render_options.with_sheet_separator(false);
        self
    }

    /// Parse an archive file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<UnxmindResult> {
        let parser = XmindParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UnxmindResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse an archive held in memory.
    pub fn parse_bytes(self, data: &[u8]) -> Result<UnxmindResult> {
        let parser = XmindParser::from_bytes_with_options(data, self.parse_options)?;
        let document = parser.parse()?;
        Ok(UnxmindResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Unxmind {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a mind-map archive.
pub struct UnxmindResult {
    /// The decoded document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl UnxmindResult {
    /// Convert to Markdown.
    pub fn to_markdown(&self) -> String {
        render::to_markdown(&self.document, &self.render_options)
    }

    /// Convert to Markdown with rendering statistics.
    pub fn to_markdown_with_stats(&self) -> RenderResult {
        render::to_markdown_with_stats(&self.document, &self.render_options)
    }

    /// Write Markdown to a file.
    pub fn write_to<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        write_markdown_file(&self.document, path, &self.render_options)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unxmind_builder() {
        let builder = Unxmind::new()
            .with_entry_suffix("data.json")
            .with_max_heading(4)
            .without_sheet_separator();

        assert_eq!(builder.parse_options.entry_suffix, "data.json");
        assert_eq!(builder.render_options.max_heading_level, 4);
        assert!(!builder.render_options.sheet_separator);
    }

    #[test]
    fn test_unxmind_builder_default() {
        let builder = Unxmind::default();
        assert!(builder.parse_options.verify_container);
        assert!(builder.render_options.sheet_separator);
    }

    #[test]
    fn test_skip_container_check() {
        let builder = Unxmind::new().skip_container_check();
        assert!(!builder.parse_options.verify_container);
    }

    #[test]
    fn test_parse_bytes_empty_data() {
        let data: [u8; 0] = [];
        let result = parse_bytes(&data);
        assert!(matches!(result, Err(Error::ArchiveOpen(_))));
    }

    #[test]
    fn test_parse_bytes_not_zip() {
        let result = Unxmind::new().parse_bytes(b"[{\"rootTopic\":{}}]");
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_content() {
        let doc = parse_content(br#"[{"rootTopic": {"title": "Plan"}}]"#).unwrap();
        assert_eq!(doc.sheet_count(), 1);
    }

    #[test]
    fn test_output_path_for() {
        assert_eq!(output_path_for("plan.xmind"), PathBuf::from("plan.md"));
        assert_eq!(output_path_for("dir/plan.v2.xmind"), PathBuf::from("dir/plan.v2.md"));
        assert_eq!(output_path_for("noext"), PathBuf::from("noext.md"));
        assert_eq!(output_path_for("dir/.xmind"), PathBuf::from("dir/.md"));
        assert_eq!(output_path_for(".xmind"), PathBuf::from(".md"));
        assert_eq!(output_path_for("dir/.map.xmind"), PathBuf::from("dir/.map.md"));
    }

    #[test]
    fn test_to_markdown_missing_file() {
        let result = to_markdown("/nonexistent/plan.xmind");
        assert!(matches!(result, Err(Error::ArchiveOpen(_))));
    }
}
