//! Archive format detection.

use crate::error::{Error, Result};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// Kind of zip record found at the start of a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContainerFormat {
    /// Starts with a local file header (`PK\x03\x04`)
    Zip,
    /// Starts with an end-of-central-directory record (`PK\x05\x06`)
    EmptyZip,
}

impl std::fmt::Display for ContainerFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ContainerFormat::Zip => write!(f, "zip"),
            ContainerFormat::EmptyZip => write!(f, "empty zip"),
        }
    }
}

const LOCAL_HEADER_MAGIC: &[u8] = b"PK\x03\x04";
const END_OF_DIRECTORY_MAGIC: &[u8] = b"PK\x05\x06";
const MAGIC_LEN: usize = 4;

/// Detect the container format from a file path.
///
/// # Example
/// ```no_run
/// use unxmind::detect::detect_format_from_path;
///
/// let format = detect_format_from_path("map.xmind").unwrap();
/// println!("Container: {}", format);
/// ```
pub fn detect_format_from_path<P: AsRef<Path>>(path: P) -> Result<ContainerFormat> {
    let path = path.as_ref();
    let file =
        File::open(path).map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
    let mut header = Vec::with_capacity(MAGIC_LEN);
    file.take(MAGIC_LEN as u64)
        .read_to_end(&mut header)
        .map_err(|e| Error::ArchiveOpen(format!("{}: {}", path.display(), e)))?;
    detect_format_from_bytes(&header)
}

/// Detect the container format from the first bytes of a file.
///
/// Returns `Error::ArchiveOpen` when the data does not start with a zip record.
pub fn detect_format_from_bytes(data: &[u8]) -> Result<ContainerFormat> {
    if data.len() < MAGIC_LEN {
        return Err(Error::ArchiveOpen("file too short to be a zip archive".into()));
    }

    if data.starts_with(LOCAL_HEADER_MAGIC) {
        Ok(ContainerFormat::Zip)
    } else if data.starts_with(END_OF_DIRECTORY_MAGIC) {
        Ok(ContainerFormat::EmptyZip)
    } else {
        Err(Error::ArchiveOpen("not a zip archive".into()))
    }
}
