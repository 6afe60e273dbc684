//! Path validation
//!
//! Resolves client-supplied relative paths against the storage root and
//! rejects anything that would escape a section subtree.

use std::path::{Path, PathBuf};

use crate::error::StorageError;
use crate::storage::section::Section;

/// Resolves a slash-separated virtual path to a real path under the
/// section's directory.
///
/// Empty and `.` segments are skipped, so leading, trailing, and doubled
/// slashes are tolerated. A `..` segment or an embedded NUL byte is rejected
/// as a traversal attempt.
pub fn resolve_path(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
) -> Result<PathBuf, StorageError> {
    let mut real_path = storage_root.join(section.as_str());

    for segment in virtual_path.split('/') {
        if segment.is_empty() || segment == "." {
            continue;
        }
        if segment == ".." || segment.contains('\0') {
            return Err(StorageError::PathTraversal(virtual_path.to_string()));
        }
        real_path.push(segment);
    }

    Ok(real_path)
}

/// Joins a base virtual path and a name into a single virtual path.
pub fn join_virtual(path: &str, name: &str) -> String {
    if path.is_empty() {
        name.to_string()
    } else {
        format!("{}/{}", path, name)
    }
}

/// Normalizes backslash separators in an uploaded relative path to `/`.
pub fn normalize_separators(path: &str) -> String {
    path.replace('\\', "/")
}
