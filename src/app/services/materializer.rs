//! Materializer service.
//!
//! Applies a manifest entry by entry. A failing entry is recorded and the
//! remaining entries are still attempted; nothing is rolled back.

use std::io;

use tracing::{debug, warn};

use crate::domain::{
    AppError, EntryKind, Manifest, ManifestEntry, MaterializationOutcome, MaterializationReport,
};
use crate::ports::ScaffoldFilesystem;

pub struct Materializer<'a, F: ScaffoldFilesystem> {
    filesystem: &'a F,
}

impl<'a, F: ScaffoldFilesystem> Materializer<'a, F> {
    pub fn new(filesystem: &'a F) -> Self {
        Self { filesystem }
    }

    pub fn apply(&self, manifest: &Manifest) -> MaterializationReport {
        let mut report = MaterializationReport::default();

        if let Err(err) = self.filesystem.ensure_root() {
            warn!(root = %manifest.root().display(), error = %err, "could not create output root");
        }

        for entry in manifest.entries() {
            let outcome = match self.apply_entry(entry) {
                Ok(outcome) => outcome,
                Err(err) => MaterializationOutcome::Failed(err.to_string()),
            };
            if outcome.is_failure() {
                warn!(path = %entry.relative_path, outcome = %outcome, "entry failed");
            } else {
                debug!(path = %entry.relative_path, outcome = %outcome, "entry materialized");
            }
            report.record(&entry.relative_path, entry.is_directory(), outcome);
        }

        report
    }

    fn apply_entry(&self, entry: &ManifestEntry) -> Result<MaterializationOutcome, AppError> {
        let path = entry.relative_path.as_str();
        let existed = self.filesystem.exists(path);

        match &entry.kind {
            EntryKind::Directory => {
                if existed && !self.filesystem.is_dir(path) {
                    return Err(collision(path, "a non-directory already occupies this path"));
                }
                self.filesystem.create_dir_all(path)?;
            }
            EntryKind::File { content, executable } => {
                if self.filesystem.is_dir(path) {
                    return Err(collision(path, "a directory already occupies this path"));
                }
                self.filesystem.write_file(path, content)?;
                if *executable {
                    self.filesystem.set_executable(path)?;
                }
            }
        }

        Ok(if existed { MaterializationOutcome::Overwritten } else { MaterializationOutcome::Created })
    }
}

fn collision(path: &str, reason: &str) -> AppError {
    AppError::Io(io::Error::new(io::ErrorKind::AlreadyExists, format!("{}: {}", path, reason)))
}
