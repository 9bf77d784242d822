//! API Facade for the application.
//!
//! This module exposes high-level functions that glue together context creation
//! and command execution.

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::adapters::assets::EmbeddedTemplateStore;
use crate::adapters::filesystem::FilesystemStore;
use crate::adapters::source_reader::DocumentSourceReader;
use crate::adapters::template::MinijinjaTemplateRenderer;
use crate::app::{
    AppContext,
    commands::{envs, generate, plan as plan_command},
    config,
    services::{ManifestResolver, Materializer},
};

pub use crate::adapters::source_reader::DEFAULT_SOURCE_TIMEOUT;
pub use crate::app::commands::envs::{EnvironmentListing, EnvironmentSummary, HostPortSummary};
pub use crate::app::commands::generate::{GenerateOptions, GenerateOutcome};
pub use crate::app::commands::plan::{Plan, PlanFormat, PlannedEntry};
pub use crate::app::config::ParamOverrides;
pub use crate::domain::{
    AppError, Manifest, MaterializationOutcome, MaterializationReport, ScaffoldParams,
};

/// Create an `AppContext` rooted at `root`.
fn create_context(
    root: PathBuf,
    source_timeout: Duration,
) -> Result<
    AppContext<FilesystemStore, EmbeddedTemplateStore, MinijinjaTemplateRenderer, DocumentSourceReader>,
    AppError,
> {
    Ok(AppContext::new(
        FilesystemStore::new(root),
        EmbeddedTemplateStore::new(),
        MinijinjaTemplateRenderer::new()?,
        DocumentSourceReader::with_timeout(source_timeout),
    ))
}

/// Resolve the manifest for `root` without touching the filesystem.
pub fn resolve(root: impl Into<PathBuf>, params: &ScaffoldParams) -> Result<Manifest, AppError> {
    let root: PathBuf = root.into();
    let templates = EmbeddedTemplateStore::new();
    let renderer = MinijinjaTemplateRenderer::new()?;
    ManifestResolver::new(&templates, &renderer).resolve(&root, params)
}

/// Apply an already resolved manifest to its root directory.
pub fn apply(manifest: &Manifest) -> MaterializationReport {
    let filesystem = FilesystemStore::new(manifest.root().to_path_buf());
    Materializer::new(&filesystem).apply(manifest)
}

/// Generate the deployment lab at `root` using the default source timeout.
pub fn generate_at(
    root: impl Into<PathBuf>,
    options: GenerateOptions,
) -> Result<GenerateOutcome, AppError> {
    generate_with_timeout(root, options, DEFAULT_SOURCE_TIMEOUT)
}

/// Generate the deployment lab at `root`, waiting at most `source_timeout` for the source document.
pub fn generate_with_timeout(
    root: impl Into<PathBuf>,
    options: GenerateOptions,
    source_timeout: Duration,
) -> Result<GenerateOutcome, AppError> {
    let root = root.into();
    let ctx = create_context(root.clone(), source_timeout)?;
    generate::execute(&ctx, root, options)
}

/// Resolve the manifest for `root` and describe it as a plan.
pub fn plan(root: impl Into<PathBuf>, params: &ScaffoldParams) -> Result<Plan, AppError> {
    let templates = EmbeddedTemplateStore::new();
    let renderer = MinijinjaTemplateRenderer::new()?;
    plan_command::execute(&templates, &renderer, root.into(), params)
}

/// List recognized environments and default host ports.
pub fn environments() -> EnvironmentListing {
    envs::execute()
}

/// Load scaffold parameters from an optional TOML file plus overrides.
pub fn load_params(
    config: Option<&Path>,
    overrides: &ParamOverrides,
) -> Result<ScaffoldParams, AppError> {
    config::load_params(config, overrides)
}
