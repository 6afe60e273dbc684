//! Error types
//!
//! Defines domain-specific error types for each module of the file server.

use std::fmt;
use std::io;

/// Authentication module errors
#[derive(Debug)]
pub enum AuthError {
    UnknownRole(String),
    InvalidPassword(String),
    MalformedInput(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::UnknownRole(r) => write!(f, "Unknown role: {}", r),
            AuthError::InvalidPassword(r) => write!(f, "Invalid password for role: {}", r),
            AuthError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
        }
    }
}

impl std::error::Error for AuthError {}

/// Storage module errors
#[derive(Debug)]
pub enum StorageError {
    NotFound(String),
    UnknownSection(String),
    PathTraversal(String),
    InvalidPath(String),
    IoError(io::Error),
}

impl fmt::Display for StorageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StorageError::NotFound(p) => write!(f, "Not found: {}", p),
            StorageError::UnknownSection(s) => write!(f, "Unknown section: {}", s),
            StorageError::PathTraversal(p) => write!(f, "Path traversal attempt: {}", p),
            StorageError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            StorageError::IoError(e) => write!(f, "IO error: {}", e),
        }
    }
}

impl std::error::Error for StorageError {}

impl From<io::Error> for StorageError {
    fn from(error: io::Error) -> Self {
        StorageError::IoError(error)
    }
}

/// Archive module errors
#[derive(Debug)]
pub enum ArchiveError {
    InvalidPath(String),
    IoError(io::Error),
    ZipError(zip::result::ZipError),
}

impl fmt::Display for ArchiveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArchiveError::InvalidPath(p) => write!(f, "Invalid path: {}", p),
            ArchiveError::IoError(e) => write!(f, "IO error: {}", e),
            ArchiveError::ZipError(e) => write!(f, "Zip error: {}", e),
        }
    }
}

impl std::error::Error for ArchiveError {}

impl From<io::Error> for ArchiveError {
    fn from(error: io::Error) -> Self {
        ArchiveError::IoError(error)
    }
}

impl From<zip::result::ZipError> for ArchiveError {
    fn from(error: zip::result::ZipError) -> Self {
        ArchiveError::ZipError(error)
    }
}

/// General server error that encompasses all error types
#[derive(Debug)]
pub enum VaultError {
    Auth(AuthError),
    Storage(StorageError),
    Archive(ArchiveError),
    MalformedInput(String),
}

impl fmt::Display for VaultError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VaultError::Auth(e) => write!(f, "Authentication error: {}", e),
            VaultError::Storage(e) => write!(f, "Storage error: {}", e),
            VaultError::Archive(e) => write!(f, "Archive error: {}", e),
            VaultError::MalformedInput(s) => write!(f, "Malformed input: {}", s),
        }
    }
}

impl std::error::Error for VaultError {}

impl From<AuthError> for VaultError {
    fn from(error: AuthError) -> Self {
        VaultError::Auth(error)
    }
}

impl From<StorageError> for VaultError {
    fn from(error: StorageError) -> Self {
        VaultError::Storage(error)
    }
}

impl From<ArchiveError> for VaultError {
    fn from(error: ArchiveError) -> Self {
        VaultError::Archive(error)
    }
}
