//! Test double for `SourceReader`.

use std::cell::RefCell;
use std::path::{Path, PathBuf};

use crate::domain::{AppError, SourceText};
use crate::ports::SourceReader;

/// Returns canned text or a canned failure and records requested paths.
#[derive(Debug)]
pub struct FakeSourceReader {
    result: Result<String, String>,
    requests: RefCell<Vec<PathBuf>>,
}

impl FakeSourceReader {
    pub fn with_text(text: &str) -> Self {
        Self { result: Ok(text.to_string()), requests: RefCell::new(Vec::new()) }
    }

    pub fn failing(reason: &str) -> Self {
        Self { result: Err(reason.to_string()), requests: RefCell::new(Vec::new()) }
    }

    pub fn requests(&self) -> Vec<PathBuf> {
        self.requests.borrow().clone()
    }
}

impl SourceReader for FakeSourceReader {
    fn extract_text(&self, path: &Path) -> Result<SourceText, AppError> {
        self.requests.borrow_mut().push(path.to_path_buf());
        match &self.result {
            Ok(text) => Ok(SourceText::new(text.clone())),
            Err(reason) => Err(AppError::source_unavailable(path.display().to_string(), reason.clone())),
        }
    }
}
