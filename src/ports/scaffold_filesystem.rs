//! Filesystem operations scoped to a scaffold output root.
//!
//! All `path` arguments are normalized manifest paths relative to the root.
//! Implementations must reject paths that escape the root boundary.

use crate::domain::AppError;

/// Port for the filesystem a manifest is materialized into.
pub trait ScaffoldFilesystem {
    /// Create the root directory and its parents if missing.
    fn ensure_root(&self) -> Result<(), AppError>;

    /// Create a directory and all missing parents. Existing directories are not an error.
    fn create_dir_all(&self, path: &str) -> Result<(), AppError>;

    /// Write UTF-8 content, replacing any existing file. Parents must already exist.
    fn write_file(&self, path: &str, content: &str) -> Result<(), AppError>;

    /// Set the owner-executable bit on a file (Unix-only).
    fn set_executable(&self, path: &str) -> Result<(), AppError>;

    /// Check whether a file or directory exists.
    fn exists(&self, path: &str) -> bool;

    /// Check whether a path is a directory.
    fn is_dir(&self, path: &str) -> bool;
}
