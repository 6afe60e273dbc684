//! Storage operations
//!
//! Handles the mutating file system operations: folder creation, entry
//! deletion, and saving uploaded files. Role enforcement happens at the
//! HTTP layer; these operations are role-agnostic.

use log::info;
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::storage::section::Section;
use crate::storage::validation::{join_virtual, normalize_separators, resolve_path};

/// One file of an uploaded directory tree. The relative path may contain
/// subdirectory components that are created before the content is written.
#[derive(Debug, Clone)]
pub struct UploadedFile {
    pub relative_path: String,
    pub content: Vec<u8>,
}

/// Creates `path/name` under the section, along with any missing
/// intermediate directories. Idempotent.
pub fn create_folder(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
    name: &str,
) -> Result<(), StorageError> {
    let target = resolve_path(storage_root, section, &join_virtual(virtual_path, name))?;
    fs::create_dir_all(&target)?;

    info!("Created folder {}/{}", section, join_virtual(virtual_path, name));
    Ok(())
}

/// Removes `path/name` under the section: a directory is removed
/// recursively, a file is removed alone, and a missing target is a no-op.
pub fn delete_entry(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
    name: &str,
) -> Result<(), StorageError> {
    let target = resolve_path(storage_root, section, &join_virtual(virtual_path, name))?;

    if target.is_dir() {
        fs::remove_dir_all(&target)?;
        info!("Deleted folder {}/{}", section, join_virtual(virtual_path, name));
    } else if target.is_file() {
        fs::remove_file(&target)?;
        info!("Deleted file {}/{}", section, join_virtual(virtual_path, name));
    }

    Ok(())
}

/// Writes `content` to `path/filename` under the section, overwriting any
/// existing file at that exact name.
pub fn save_file(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
    filename: &str,
    content: &[u8],
) -> Result<(), StorageError> {
    if filename.is_empty() {
        return Err(StorageError::InvalidPath("empty filename".to_string()));
    }

    let relative = normalize_separators(filename);
    let target = resolve_path(storage_root, section, &join_virtual(virtual_path, &relative))?;
    fs::write(&target, content)?;

    info!(
        "Saved file {}/{} ({} bytes)",
        section,
        join_virtual(virtual_path, &relative),
        content.len()
    );
    Ok(())
}

/// Saves a batch of uploaded files preserving their relative structure
/// under `base_path`. Missing subdirectory chains are created on the fly;
/// entries with an empty filename are skipped. Returns the number of files
/// written.
pub fn save_folder(
    storage_root: &Path,
    section: Section,
    base_path: &str,
    entries: &[UploadedFile],
) -> Result<usize, StorageError> {
    let mut saved = 0;

    for entry in entries {
        let relative = normalize_separators(&entry.relative_path);
        let basename = relative.rsplit('/').next().unwrap_or("");
        if basename.is_empty() {
            continue;
        }

        let target = resolve_path(storage_root, section, &join_virtual(base_path, &relative))?;
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&target, &entry.content)?;
        saved += 1;
    }

    info!(
        "Saved folder upload under {}/{} - {} files",
        section, base_path, saved
    );
    Ok(saved)
}
