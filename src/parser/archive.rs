//! Zip archive access: locate and read the content entry.

use std::io::{Read, Seek};

use zip::ZipArchive;

use crate::error::{Error, Result};

/// Open a zip archive over a seekable reader.
pub fn open_archive<R: Read + Seek>(reader: R) -> Result<ZipArchive<R>> {
    ZipArchive::new(reader).map_err(|e| Error::ArchiveOpen(e.to_string()))
}

/// Find the index of the first entry whose name ends with `suffix`.
///
/// Entries are scanned in central-directory order.
pub fn find_entry<R: Read + Seek>(archive: &ZipArchive<R>, suffix: &str) -> Result<usize> {
    (0..archive.len())
        .find(|&i| {
            archive
                .name_for_index(i)
                .is_some_and(|name| name.ends_with(suffix))
        })
        .ok_or_else(|| Error::EntryNotFound(suffix.to_string()))
}

/// Read the decompressed bytes of the first entry ending with `suffix`.
pub fn read_entry<R: Read + Seek>(archive: &mut ZipArchive<R>, suffix: &str) -> Result<Vec<u8>> {
    let index = find_entry(archive, suffix)?;
    let mut file = archive
        .by_index(index)
        .map_err(|e| Error::EntryRead(e.to_string()))?;
    log::debug!("Reading archive entry {} ({} bytes)", file.name(), file.size());

    // The declared size comes from the archive and is not trusted.
    let mut contents = Vec::new();
    file.read_to_end(&mut contents)
        .map_err(|e| Error::EntryRead(format!("{}: {}", file.name(), e)))?;
    Ok(contents)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};
    use zip::write::SimpleFileOptions;
    use zip::ZipWriter;

    fn build_zip(entries: &[(&str, &str)]) -> Vec<u8> {
        let mut zip = ZipWriter::new(Cursor::new(Vec::new()));
        let options =
            SimpleFileOptions::default().compression_method(zip::CompressionMethod::Stored);
        for (name, body) in entries {
            zip.start_file(*name, options).unwrap();
            zip.write_all(body.as_bytes()).unwrap();
        }
        zip.finish().unwrap().into_inner()
    }

    #[test]
    fn test_read_entry_by_suffix() {
        let data = build_zip(&[("metadata.json", "{}"), ("content.json", "[]")]);
        let mut archive = open_archive(Cursor::new(data)).unwrap();
        let bytes = read_entry(&mut archive, "content.json").unwrap();
        assert_eq!(bytes, b"[]");
    }

    #[test]
    fn test_first_match_wins() {
        let data = build_zip(&[("a/content.json", "[1]"), ("b/content.json", "[2]")]);
        let mut archive = open_archive(Cursor::new(data)).unwrap();
        let bytes = read_entry(&mut archive, "content.json").unwrap();
        assert_eq!(bytes, b"[1]");
    }

    #[test]
    fn test_entry_not_found() {
        let data = build_zip(&[("content.xml", "<xmap-content/>")]);
        let archive = open_archive(Cursor::new(data)).unwrap();
        let result = find_entry(&archive, "content.json");
        assert!(matches!(result, Err(Error::EntryNotFound(_))));
    }

    /// One stored entry whose zip64 extra field declares `declared_size` bytes.
    fn build_zip64(name: &str, body: &[u8], declared_size: u64) -> Vec<u8> {
        let mut crc = flate2::Crc::new();
        crc.update(body);
        let crc = crc.sum();

        let mut extra = Vec::new();
        extra.extend_from_slice(&1u16.to_le_bytes());
        extra.extend_from_slice(&8u16.to_le_bytes());
        extra.extend_from_slice(&declared_size.to_le_bytes());

        // version needed, flags, method, time, date, crc, sizes
        let mut common = Vec::new();
        for field in [45u16, 0, 0, 0, 0x21] {
            common.extend_from_slice(&field.to_le_bytes());
        }
        common.extend_from_slice(&crc.to_le_bytes());
        common.extend_from_slice(&(body.len() as u32).to_le_bytes());
        common.extend_from_slice(&u32::MAX.to_le_bytes());
        common.extend_from_slice(&(name.len() as u16).to_le_bytes());
        common.extend_from_slice(&(extra.len() as u16).to_le_bytes());

        let mut data = Vec::new();
        data.extend_from_slice(&0x0403_4b50u32.to_le_bytes());
        data.extend_from_slice(&common);
        data.extend_from_slice(name.as_bytes());
        data.extend_from_slice(&extra);
        data.extend_from_slice(body);

        let directory_start = data.len() as u32;
        data.extend_from_slice(&0x0201_4b50u32.to_le_bytes());
        data.extend_from_slice(&45u16.to_le_bytes());
        data.extend_from_slice(&common);
        // comment length, disk, internal and external attributes, offset
        data.extend_from_slice(&[0u8; 4 + 2 + 4 + 4]);
        data.extend_from_slice(name.as_bytes());
        data.extend_from_slice(&extra);
        let directory_size = data.len() as u32 - directory_start;

        data.extend_from_slice(&0x0605_4b50u32.to_le_bytes());
        for field in [0u16, 0, 1, 1] {
            data.extend_from_slice(&field.to_le_bytes());
        }
        data.extend_from_slice(&directory_size.to_le_bytes());
        data.extend_from_slice(&directory_start.to_le_bytes());
        data.extend_from_slice(&0u16.to_le_bytes());
        data
    }

    #[test]
    fn test_declared_size_not_preallocated() {
        let data = build_zip64("content.json", b"[]", 1 << 62);
        let mut archive = open_archive(Cursor::new(data)).unwrap();
        match read_entry(&mut archive, "content.json") {
            Ok(bytes) => assert_eq!(bytes, b"[]"),
            Err(e) => assert!(matches!(e, Error::EntryRead(_))),
        }
    }

    #[test]
    fn test_open_garbage() {
        let result = open_archive(Cursor::new(b"not a zip at all".to_vec()));
        assert!(matches!(result, Err(Error::ArchiveOpen(_))));
    }
}
