use std::path::PathBuf;

use tracing::{info, warn};

use crate::app::AppContext;
use crate::app::services::{ManifestResolver, Materializer};
use crate::domain::{AppError, MaterializationReport, ScaffoldParams, TemplateRenderer};
use crate::exit_codes;
use crate::ports::{ArtifactTemplateStore, ScaffoldFilesystem, SourceReader};

#[derive(Debug, Clone, Default)]
pub struct GenerateOptions {
    pub params: ScaffoldParams,
    /// Reference document read for diagnostics before writing.
    pub source: Option<PathBuf>,
    /// Continue with a warning when the reference document cannot be read.
    pub ignore_source_errors: bool,
}

#[derive(Debug, Clone)]
pub struct GenerateOutcome {
    pub root: PathBuf,
    pub environment: String,
    pub fingerprint: String,
    pub report: MaterializationReport,
    /// Characters extracted from the reference document, when one was read.
    pub source_chars: Option<usize>,
    /// Reason the reference document was skipped under `ignore_source_errors`.
    pub source_warning: Option<String>,
}

impl GenerateOutcome {
    pub fn exit_code(&self) -> i32 {
        if self.report.is_success() { exit_codes::OK } else { exit_codes::PARTIAL_WRITE }
    }
}

pub fn execute<F, T, R, S>(
    ctx: &AppContext<F, T, R, S>,
    root: PathBuf,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError>
where
    F: ScaffoldFilesystem,
    T: ArtifactTemplateStore,
    R: TemplateRenderer,
    S: SourceReader,
{
    let mut source_chars = None;
    let mut source_warning = None;

    if let Some(source) = &options.source {
        match ctx.source_reader().extract_text(source) {
            Ok(text) => {
                info!(path = %source.display(), chars = text.char_count(), "read source document");
                source_chars = Some(text.char_count());
            }
            Err(err) if options.ignore_source_errors => {
                warn!(error = %err, "continuing without source document");
                source_warning = Some(err.to_string());
            }
            Err(err) => return Err(err),
        }
    }

    let manifest = ManifestResolver::new(ctx.templates(), ctx.renderer()).resolve(&root, &options.params)?;
    let fingerprint = manifest.fingerprint();
    info!(root = %root.display(), entries = manifest.len(), fingerprint = %fingerprint, "resolved manifest");

    let report = Materializer::new(ctx.filesystem()).apply(&manifest);
    info!(created = report.created(), overwritten = report.overwritten(), failed = report.failed(), "materialized manifest");

    Ok(GenerateOutcome {
        root,
        environment: options.params.environment,
        fingerprint,
        report,
        source_chars,
        source_warning,
    })
}
