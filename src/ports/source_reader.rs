use std::path::Path;

use crate::domain::{AppError, SourceText};

/// Port for extracting reference text from an input document.
pub trait SourceReader {
    /// Extract the full text of the document at `path`.
    ///
    /// Fails with `SourceUnavailable` when the document is missing, cannot be
    /// parsed, or extraction does not finish in time.
    fn extract_text(&self, path: &Path) -> Result<SourceText, AppError>;
}
