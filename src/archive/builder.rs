//! Zip archive builder
//!
//! Walks a subtree and assembles a deflate-compressed zip of it in memory.
//! The whole archive is built before any response byte is sent.

use log::info;
use std::fs::File;
use std::io::{self, Cursor};
use std::path::Path;
use walkdir::WalkDir;
use zip::CompressionMethod;
use zip::write::{FileOptions, ZipWriter};

use crate::error::ArchiveError;
use crate::storage::section::Section;
use crate::storage::validation::resolve_path;

/// Builds a zip archive of the subtree rooted at `section/path`.
///
/// Every regular file is added under its path relative to the archive root,
/// so extracting reproduces the subtree with no extra prefix. Empty
/// directories are omitted. A missing root yields an empty archive rather
/// than an error.
pub fn build_zip(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
) -> Result<Vec<u8>, ArchiveError> {
    let base = resolve_path(storage_root, section, virtual_path)
        .map_err(|e| ArchiveError::InvalidPath(e.to_string()))?;

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = FileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut file_count = 0usize;

    for entry in WalkDir::new(&base)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
    {
        if !entry.file_type().is_file() {
            continue;
        }

        let relative = entry
            .path()
            .strip_prefix(&base)
            .map_err(|e| ArchiveError::InvalidPath(e.to_string()))?;
        let entry_name = relative.to_string_lossy().replace('\\', "/");

        writer.start_file(entry_name, options)?;
        let mut file = File::open(entry.path())?;
        io::copy(&mut file, &mut writer)?;
        file_count += 1;
    }

    let cursor = writer.finish()?;
    let bytes = cursor.into_inner();

    info!(
        "Built zip archive of {}/{} - {} files, {} bytes",
        section,
        virtual_path,
        file_count,
        bytes.len()
    );

    Ok(bytes)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::fs;
    use std::io::Read;
    use tempfile::tempdir;
    use zip::ZipArchive;

    fn read_archive(bytes: Vec<u8>) -> HashMap<String, Vec<u8>> {
        let mut archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        let mut contents = HashMap::new();
        for i in 0..archive.len() {
            let mut file = archive.by_index(i).unwrap();
            let mut data = Vec::new();
            file.read_to_end(&mut data).unwrap();
            contents.insert(file.name().to_string(), data);
        }
        contents
    }

    #[test]
    fn test_zip_round_trip_reproduces_subtree() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("catenaire/plans");
        fs::create_dir_all(base.join("2024")).unwrap();
        fs::write(base.join("index.txt"), b"index").unwrap();
        fs::write(base.join("2024/schema.pdf"), b"%PDF-fake").unwrap();

        let bytes = build_zip(temp.path(), Section::Catenaire, "plans").unwrap();
        let contents = read_archive(bytes);

        assert_eq!(contents.len(), 2);
        assert_eq!(contents["index.txt"], b"index");
        assert_eq!(contents["2024/schema.pdf"], b"%PDF-fake");
    }

    #[test]
    fn test_zip_entries_are_relative_to_target() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("sousstation/a/b");
        fs::create_dir_all(&base).unwrap();
        fs::write(base.join("doc.txt"), b"x").unwrap();

        let bytes = build_zip(temp.path(), Section::Sousstation, "a/b").unwrap();
        let contents = read_archive(bytes);

        assert_eq!(contents.keys().collect::<Vec<_>>(), vec!["doc.txt"]);
    }

    #[test]
    fn test_zip_omits_empty_directories() {
        let temp = tempdir().unwrap();
        let base = temp.path().join("catenaire/zone");
        fs::create_dir_all(base.join("vide")).unwrap();
        fs::write(base.join("doc.txt"), b"x").unwrap();

        let bytes = build_zip(temp.path(), Section::Catenaire, "zone").unwrap();
        let contents = read_archive(bytes);

        assert_eq!(contents.len(), 1);
        assert!(contents.contains_key("doc.txt"));
    }

    #[test]
    fn test_zip_missing_root_is_empty_archive() {
        let temp = tempdir().unwrap();
        fs::create_dir_all(temp.path().join("catenaire")).unwrap();

        let bytes = build_zip(temp.path(), Section::Catenaire, "absent").unwrap();
        let archive = ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 0);
    }

    #[test]
    fn test_zip_rejects_traversal() {
        let temp = tempdir().unwrap();
        let result = build_zip(temp.path(), Section::Catenaire, "../outside");
        assert!(matches!(result, Err(ArchiveError::InvalidPath(_))));
    }
}
