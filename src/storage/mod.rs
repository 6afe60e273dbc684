//! File system storage management
//!
//! Handles sections, directory listing, mutation operations, and path
//! validation for the storage root.

pub mod listing;
pub mod operations;
pub mod section;
pub mod validation;

pub use listing::{Entry, list_directory, parent_path};
pub use operations::{UploadedFile, create_folder, delete_entry, save_file, save_folder};
pub use section::Section;
