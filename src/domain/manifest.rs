use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use sha2::{Digest, Sha256};

use crate::domain::AppError;
use crate::domain::paths;

/// What a manifest entry materializes to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryKind {
    Directory,
    File { content: String, executable: bool },
}

/// One filesystem action, addressed relative to the manifest root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestEntry {
    pub relative_path: String,
    pub kind: EntryKind,
}

impl ManifestEntry {
    pub fn is_directory(&self) -> bool {
        matches!(self.kind, EntryKind::Directory)
    }

    pub fn content(&self) -> Option<&str> {
        match &self.kind {
            EntryKind::File { content, .. } => Some(content),
            EntryKind::Directory => None,
        }
    }

    pub fn is_executable(&self) -> bool {
        matches!(self.kind, EntryKind::File { executable: true, .. })
    }

    pub fn kind_label(&self) -> &'static str {
        if self.is_directory() { "directory" } else { "file" }
    }
}

/// Ordered list of filesystem actions under a single root.
///
/// Entries are checked as they are pushed: paths stay inside the root, no
/// path appears twice, and a nested entry's parent must already be a
/// directory entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    root: PathBuf,
    entries: Vec<ManifestEntry>,
    directories: BTreeSet<String>,
}

impl Manifest {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into(), entries: Vec::new(), directories: BTreeSet::new() }
    }

    pub fn push_directory(&mut self, path: &str) -> Result<(), AppError> {
        let relative_path = self.admit(path)?;
        self.directories.insert(relative_path.clone());
        self.entries.push(ManifestEntry { relative_path, kind: EntryKind::Directory });
        Ok(())
    }

    pub fn push_file(
        &mut self,
        path: &str,
        content: impl Into<String>,
        executable: bool,
    ) -> Result<(), AppError> {
        let relative_path = self.admit(path)?;
        self.entries.push(ManifestEntry {
            relative_path,
            kind: EntryKind::File { content: content.into(), executable },
        });
        Ok(())
    }

    fn admit(&self, path: &str) -> Result<String, AppError> {
        let normalized = paths::normalize_relative(path)?;

        if self.entries.iter().any(|entry| entry.relative_path == normalized) {
            return Err(AppError::InvalidManifest(format!("duplicate entry '{}'", normalized)));
        }

        if let Some(parent) = paths::parent_of(&normalized)
            && !self.directories.contains(parent)
        {
            return Err(AppError::InvalidManifest(format!(
                "'{}' is declared before its parent directory '{}'",
                normalized, parent
            )));
        }

        Ok(normalized)
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn directories(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|entry| entry.is_directory())
    }

    pub fn files(&self) -> impl Iterator<Item = &ManifestEntry> {
        self.entries.iter().filter(|entry| !entry.is_directory())
    }

    /// SHA-256 over the ordered entries. The root is not part of the digest.
    pub fn fingerprint(&self) -> String {
        let mut hasher = Sha256::new();
        for entry in &self.entries {
            hasher.update(entry.kind_label().as_bytes());
            hasher.update([0]);
            hasher.update(entry.relative_path.as_bytes());
            hasher.update([0]);
            if let EntryKind::File { content, executable } = &entry.kind {
                hasher.update([u8::from(*executable)]);
                hasher.update((content.len() as u64).to_le_bytes());
                hasher.update(content.as_bytes());
            }
        }
        hex(&hasher.finalize())
    }
}

pub fn hash_content(content: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(content.as_bytes());
    hex(&hasher.finalize())
}

fn hex(digest: &[u8]) -> String {
    digest.iter().map(|byte| format!("{:02x}", byte)).collect()
}
