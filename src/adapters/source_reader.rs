use std::fs;
use std::path::Path;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

use crate::domain::{AppError, SourceText};
use crate::ports::SourceReader;

pub const DEFAULT_SOURCE_TIMEOUT: Duration = Duration::from_secs(30);

/// Reads reference documents: PDFs through `pdf-extract`, anything else as UTF-8 text.
///
/// Extraction runs on a worker thread so a stalled parser is abandoned after
/// `timeout`. A parser panic is reported as `SourceUnavailable`.
#[derive(Debug, Clone)]
pub struct DocumentSourceReader {
    timeout: Duration,
}

impl DocumentSourceReader {
    pub fn new() -> Self {
        Self { timeout: DEFAULT_SOURCE_TIMEOUT }
    }

    pub fn with_timeout(timeout: Duration) -> Self {
        Self { timeout }
    }
}

impl Default for DocumentSourceReader {
    fn default() -> Self {
        Self::new()
    }
}

impl SourceReader for DocumentSourceReader {
    fn extract_text(&self, path: &Path) -> Result<SourceText, AppError> {
        let display = path.display().to_string();
        if !path.is_file() {
            return Err(AppError::source_unavailable(display, "file does not exist"));
        }

        let is_pdf = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("pdf"));
        let owned = path.to_path_buf();
        extract_bounded(&display, self.timeout, move || {
            if is_pdf {
                pdf_extract::extract_text(&owned).map_err(|err| err.to_string())
            } else {
                fs::read_to_string(&owned).map_err(|err| err.to_string())
            }
        })
    }
}

/// Run `extract` on a worker thread and wait at most `timeout` for its result.
///
/// A worker that panics drops its sender and is reported as aborted. A worker
/// that outlives the timeout is left detached.
fn extract_bounded<E>(display: &str, timeout: Duration, extract: E) -> Result<SourceText, AppError>
where
    E: FnOnce() -> Result<String, String> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    thread::Builder::new()
        .name("source-reader".into())
        .spawn(move || {
            let result = extract();
            // Receiver is gone once the caller timed out.
            let _ = tx.send(result);
        })
        .map_err(|err| {
            AppError::source_unavailable(display, format!("failed to start reader: {}", err))
        })?;

    match rx.recv_timeout(timeout) {
        Ok(Ok(text)) => Ok(SourceText::new(text)),
        Ok(Err(reason)) => Err(AppError::source_unavailable(display, reason)),
        Err(RecvTimeoutError::Timeout) => Err(AppError::source_unavailable(
            display,
            format!("extraction did not finish within {}s", timeout.as_secs_f32()),
        )),
        Err(RecvTimeoutError::Disconnected) => {
            Err(AppError::source_unavailable(display, "document parser aborted"))
        }
    }
}
