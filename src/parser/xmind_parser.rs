//! Mind-map archive parser.

use std::fs::File;
use std::io::{BufReader, Cursor, Read, Seek};
use std::path::Path;

use serde::Deserialize;

use crate::detect::{detect_format_from_bytes, detect_format_from_path};
use crate::error::{Error, Result};
use crate::model::Document;

use super::archive::{open_archive, read_entry};
use super::options::ParseOptions;

/// UTF-8 byte order mark.
const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Mind-map archive parser.
///
/// Holds the raw bytes of the content entry; [`XmindParser::parse`] decodes
/// them into a [`Document`].
pub struct XmindParser {
    content: Vec<u8>,
}

impl XmindParser {
    /// Open a mind-map archive file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open a mind-map archive file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let path = path.as_ref();

        if options.verify_container {
            detect_format_from_path(path)?;
        }

        let file = File::open(path)
            .map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
        log::debug!("Opened archive {}", path.display());
        Self::from_seekable(BufReader::new(file), &options)
    }

    /// Load from the bytes of a whole archive.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with_options(data, ParseOptions::default())
    }

    /// Load from the bytes of a whole archive with custom options.
    pub fn from_bytes_with_options(data: &[u8], options: ParseOptions) -> Result<Self> {
        if options.verify_container {
            detect_format_from_bytes(data)?;
        }
        Self::from_seekable(Cursor::new(data), &options)
    }

    /// Load from a reader yielding a whole archive.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Load from a reader yielding a whole archive with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut data = Vec::new();
        reader
            .read_to_end(&mut data)
            .map_err(|e| Error::ArchiveOpen(e.to_string()))?;
        Self::from_bytes_with_options(&data, options)
    }

    /// Wrap already-extracted content JSON bytes.
    pub fn from_content(content: Vec<u8>) -> Self {
        Self { content }
    }

    fn from_seekable<R: Read + Seek>(reader: R, options: &ParseOptions) -> Result<Self> {
        let mut archive = open_archive(reader)?;
        let content = read_entry(&mut archive, &options.entry_suffix)?;
        Ok(Self { content })
    }

    /// Raw content entry bytes.
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Decode the content into a structured Document.
    pub fn parse(&self) -> Result<Document> {
        decode_content(&self.content)
    }
}

/// Decode `content.json` bytes into a [`Document`].
///
/// A leading UTF-8 byte order mark is ignored. Missing fields decode as
/// empty values and unknown fields are skipped. Nesting depth is not
/// limited; the stack grows on demand for deep topic trees.
pub fn decode_content(data: &[u8]) -> Result<Document> {
    let data = data.strip_prefix(UTF8_BOM).unwrap_or(data);
    let mut deserializer = serde_json::Deserializer::from_slice(data);
    deserializer.disable_recursion_limit();
    let document = Document::deserialize(serde_stacker::Deserializer::new(&mut deserializer))?;
    deserializer.end()?;
    log::info!(
        "Decoded {} sheet(s), {} topic(s)",
        document.sheet_count(),
        document.topic_count()
    );
    Ok(document)
}

/// Read content JSON from a reader and decode it.
pub fn decode_reader<R: Read>(mut reader: R) -> Result<Document> {
    let mut data = Vec::new();
    reader
        .read_to_end(&mut data)
        .map_err(|e| Error::EntryRead(e.to_string()))?;
    decode_content(&data)
}
