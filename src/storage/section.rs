//! Storage sections
//!
//! The storage root is split into a fixed set of top-level sections. Each
//! section is an independent subtree; the set is closed for the process
//! lifetime.

use std::fmt;
use std::str::FromStr;

use crate::error::StorageError;

/// A fixed top-level storage area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Catenaire,
    Sousstation,
}

impl Section {
    pub const ALL: [Section; 2] = [Section::Catenaire, Section::Sousstation];

    /// Directory name of the section under the storage root.
    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Catenaire => "catenaire",
            Section::Sousstation => "sousstation",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Section {
    type Err = StorageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catenaire" => Ok(Section::Catenaire),
            "sousstation" => Ok(Section::Sousstation),
            _ => Err(StorageError::UnknownSection(s.to_string())),
        }
    }
}
