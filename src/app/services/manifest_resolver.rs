//! Manifest resolution service.
//!
//! Turns scaffold parameters into an ordered `Manifest` by rendering every
//! row of the artifact table. No filesystem access happens here.

use std::path::Path;

use tracing::debug;

use crate::domain::artifacts::{self, ARTIFACTS, ArtifactSpec, TemplateParam};
use crate::domain::{AppError, Manifest, ResolvedParams, ScaffoldParams, TemplateContext};
use crate::domain::TemplateRenderer;
use crate::ports::ArtifactTemplateStore;

pub struct ManifestResolver<'a, T: ArtifactTemplateStore, R: TemplateRenderer> {
    templates: &'a T,
    renderer: &'a R,
}

impl<'a, T: ArtifactTemplateStore, R: TemplateRenderer> ManifestResolver<'a, T, R> {
    pub fn new(templates: &'a T, renderer: &'a R) -> Self {
        Self { templates, renderer }
    }

    /// Resolve the manifest for `root`.
    ///
    /// Directories come first (parents before children), then files in
    /// artifact-table order. Identical params always yield identical manifests.
    pub fn resolve(&self, root: &Path, params: &ScaffoldParams) -> Result<Manifest, AppError> {
        let resolved = params.validate()?;
        let mut manifest = Manifest::new(root);

        for dir in artifacts::ordered_directories() {
            manifest.push_directory(dir)?;
        }

        for artifact in ARTIFACTS {
            let context = artifact_context(artifact, &resolved)?;
            let template = self.templates.require_template(artifact.template)?;
            let content = self.renderer.render(template, &context, artifact.template)?;
            if content.trim().is_empty() {
                return Err(AppError::InvalidManifest(format!(
                    "artifact '{}' rendered to empty content",
                    artifact.template
                )));
            }
            let path = self.renderer.render(artifact.path, &context, artifact.path)?;

            debug!(path = %path, bytes = content.len(), executable = artifact.executable, "resolved artifact");
            manifest.push_file(&path, content, artifact.executable)?;
        }

        Ok(manifest)
    }
}

/// Context exposing only the parameters the artifact declares.
fn artifact_context(
    artifact: &ArtifactSpec,
    resolved: &ResolvedParams,
) -> Result<TemplateContext, AppError> {
    artifact.params.iter().try_fold(TemplateContext::new(), |context, param| {
        let key = param.key();
        match param {
            TemplateParam::Environment => context.with_var(key, resolved.environment.name()),
            TemplateParam::Profile => context.with_var(key, &resolved.profile),
            TemplateParam::Inventory => context.with_var(key, &resolved.inventory),
            TemplateParam::AppVersion => context.with_var(key, &resolved.app_version),
        }
    })
}
