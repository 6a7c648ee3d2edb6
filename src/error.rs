//! Error types for unxmind library.

use std::io;
use thiserror::Error;

/// Result type alias for unxmind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while converting a mind-map archive.
#[derive(Error, Debug)]
pub enum Error {
    /// The archive path is missing, unreadable, or not a zip container.
    #[error("Failed to open archive: {0}")]
    ArchiveOpen(String),

    /// No entry in the archive matches the content suffix.
    #[error("No entry ending with \"{0}\" found in archive")]
    EntryNotFound(String),

    /// The located entry could not be decompressed or read.
    #[error("Failed to read archive entry: {0}")]
    EntryRead(String),

    /// The content is not valid JSON or does not match the sheet shape.
    #[error("Failed to decode content: {0}")]
    Decode(#[from] serde_json::Error),

    /// The Markdown destination could not be created or written.
    #[error("Failed to write output: {0}")]
    OutputCreate(String),

    /// I/O error outside the archive and output paths.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

impl Error {
    /// Stable short name of the error kind.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Error::ArchiveOpen(_) => "ArchiveOpen",
            Error::EntryNotFound(_) => "EntryNotFound",
            Error::EntryRead(_) => "EntryRead",
            Error::Decode(_) => "Decode",
            Error::OutputCreate(_) => "OutputCreate",
            Error::Io(_) => "Io",
        }
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        match err {
            zip::result::ZipError::FileNotFound => Error::EntryNotFound(err.to_string()),
            zip::result::ZipError::Io(e) => Error::EntryRead(e.to_string()),
            _ => Error::ArchiveOpen(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::EntryNotFound("content.json".to_string());
        assert_eq!(
            err.to_string(),
            "No entry ending with \"content.json\" found in archive"
        );

        let err = Error::ArchiveOpen("missing.xmind".to_string());
        assert_eq!(err.to_string(), "Failed to open archive: missing.xmind");
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = io::Error::new(io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();
        assert!(matches!(err, Error::Io(_)));
        assert_eq!(err.kind_name(), "Io");
    }

    #[test]
    fn test_json_error_conversion() {
        let json_err = serde_json::from_str::<Vec<u8>>("{").unwrap_err();
        let err: Error = json_err.into();
        assert!(matches!(err, Error::Decode(_)));
        assert_eq!(err.kind_name(), "Decode");
    }

    #[test]
    fn test_zip_error_conversion() {
        let err: Error = zip::result::ZipError::InvalidArchive("bad".into()).into();
        assert!(matches!(err, Error::ArchiveOpen(_)));
    }
}
