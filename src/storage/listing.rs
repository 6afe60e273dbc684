//! Directory listing
//!
//! Produces sorted directory listings for the browse view, along with the
//! parent path used for "go up" navigation.

use log::info;
use std::fs;
use std::path::Path;

use crate::error::StorageError;
use crate::storage::section::Section;
use crate::storage::validation::{join_virtual, resolve_path};

/// A single directory entry, produced transiently by listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub name: String,
    pub is_dir: bool,
}

/// Lists the contents of a directory under a section, sorted ascending by
/// raw name.
pub fn list_directory(
    storage_root: &Path,
    section: Section,
    virtual_path: &str,
) -> Result<Vec<Entry>, StorageError> {
    let real_path = resolve_path(storage_root, section, virtual_path)?;

    let read_dir = fs::read_dir(&real_path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            StorageError::NotFound(join_virtual(section.as_str(), virtual_path))
        } else {
            StorageError::from(e)
        }
    })?;

    let mut entries = Vec::new();
    for entry in read_dir {
        let entry = entry?;
        let name = entry.file_name().to_string_lossy().to_string();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
        entries.push(Entry { name, is_dir });
    }

    entries.sort_by(|a, b| a.name.cmp(&b.name));

    info!(
        "Listed directory {}/{} - {} entries",
        section,
        virtual_path,
        entries.len()
    );

    Ok(entries)
}

/// Returns the path with its last segment removed; empty when the path has
/// zero or one segment.
pub fn parent_path(path: &str) -> String {
    match path.rsplit_once('/') {
        Some((parent, _)) => parent.to_string(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn setup_section(root: &Path) {
        fs::create_dir_all(root.join("catenaire")).unwrap();
    }

    #[test]
    fn test_listing_is_sorted_with_types() {
        let temp = tempdir().unwrap();
        setup_section(temp.path());
        let base = temp.path().join("catenaire");
        fs::create_dir(base.join("zone")).unwrap();
        File::create(base.join("b.txt")).unwrap();
        File::create(base.join("a.txt")).unwrap();

        let entries = list_directory(temp.path(), Section::Catenaire, "").unwrap();
        assert_eq!(
            entries,
            vec![
                Entry {
                    name: "a.txt".to_string(),
                    is_dir: false
                },
                Entry {
                    name: "b.txt".to_string(),
                    is_dir: false
                },
                Entry {
                    name: "zone".to_string(),
                    is_dir: true
                },
            ]
        );
    }

    #[test]
    fn test_listing_nested_path() {
        let temp = tempdir().unwrap();
        setup_section(temp.path());
        let nested = temp.path().join("catenaire/plans/2024");
        fs::create_dir_all(&nested).unwrap();
        File::create(nested.join("schema.pdf")).unwrap();

        let entries = list_directory(temp.path(), Section::Catenaire, "plans/2024").unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "schema.pdf");
        assert!(!entries[0].is_dir);
    }

    #[test]
    fn test_listing_missing_path_is_not_found() {
        let temp = tempdir().unwrap();
        setup_section(temp.path());

        let result = list_directory(temp.path(), Section::Catenaire, "absent");
        assert!(matches!(result, Err(StorageError::NotFound(_))));
    }

    #[test]
    fn test_parent_path() {
        assert_eq!(parent_path(""), "");
        assert_eq!(parent_path("plans"), "");
        assert_eq!(parent_path("plans/2024"), "plans");
        assert_eq!(parent_path("plans/2024/q1"), "plans/2024");
    }
}
