//! Filesystem adapter for the `ScaffoldFilesystem` port.
//!
//! `FilesystemStore` owns the output root and rejects manifest paths that
//! would escape it.

mod scaffold_filesystem;

use std::path::{Path, PathBuf};

use crate::domain::AppError;
use crate::domain::paths;

/// Filesystem-backed store rooted at a scaffold output directory.
#[derive(Debug, Clone)]
pub struct FilesystemStore {
    root: PathBuf,
}

impl FilesystemStore {
    /// Create a store rooted at the given directory. The directory may not exist yet.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The output root.
    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl FilesystemStore {
    /// Resolve a manifest path to a location under the root.
    ///
    /// `normalize_relative` rejects absolute paths and `..` escapes, so the
    /// joined path always stays below the root.
    pub(crate) fn resolve_path(&self, path: &str) -> Result<PathBuf, AppError> {
        let relative = paths::normalize_relative(path)?;
        Ok(paths::join_root(&self.root, &relative))
    }
}
