//! Dry-run view of a resolved manifest.

use std::path::PathBuf;

use serde::Serialize;

use crate::app::services::ManifestResolver;
use crate::domain::manifest::hash_content;
use crate::domain::{AppError, EntryKind, Manifest, ScaffoldParams, TemplateRenderer};
use crate::ports::ArtifactTemplateStore;

/// Output format for `plan`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlanFormat {
    #[default]
    Text,
    Json,
    Yaml,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlannedEntry {
    pub path: String,
    pub kind: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bytes: Option<usize>,
    pub executable: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sha256: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Plan {
    pub root: PathBuf,
    pub environment: String,
    pub fingerprint: String,
    pub entries: Vec<PlannedEntry>,
}

impl Plan {
    fn from_manifest(manifest: &Manifest, environment: &str) -> Self {
        let entries = manifest
            .entries()
            .iter()
            .map(|entry| match &entry.kind {
                EntryKind::Directory => PlannedEntry {
                    path: entry.relative_path.clone(),
                    kind: entry.kind_label(),
                    bytes: None,
                    executable: false,
                    sha256: None,
                },
                EntryKind::File { content, executable } => PlannedEntry {
                    path: entry.relative_path.clone(),
                    kind: entry.kind_label(),
                    bytes: Some(content.len()),
                    executable: *executable,
                    sha256: Some(hash_content(content)),
                },
            })
            .collect();

        Self {
            root: manifest.root().to_path_buf(),
            environment: environment.to_string(),
            fingerprint: manifest.fingerprint(),
            entries,
        }
    }

    pub fn render(&self, format: PlanFormat) -> Result<String, AppError> {
        match format {
            PlanFormat::Text => Ok(self.render_text()),
            PlanFormat::Json => serde_json::to_string_pretty(self)
                .map(|mut out| {
                    out.push('\n');
                    out
                })
                .map_err(|e| AppError::ParseError { what: "plan".into(), details: e.to_string() }),
            PlanFormat::Yaml => serde_yaml::to_string(self)
                .map_err(|e| AppError::ParseError { what: "plan".into(), details: e.to_string() }),
        }
    }

    fn render_text(&self) -> String {
        let mut out = format!(
            "Plan for {} ({} environment, {} entries)\n",
            self.root.display(),
            self.environment,
            self.entries.len()
        );
        for entry in &self.entries {
            match entry.bytes {
                Some(bytes) => {
                    let mode = if entry.executable { " [exec]" } else { "" };
                    out.push_str(&format!("  file  {} ({} bytes){}\n", entry.path, bytes, mode));
                }
                None => out.push_str(&format!("  dir   {}/\n", entry.path)),
            }
        }
        out.push_str(&format!("Fingerprint: {}\n", self.fingerprint));
        out
    }
}

/// Resolve the manifest without touching the filesystem.
pub fn execute<T: ArtifactTemplateStore, R: TemplateRenderer>(
    templates: &T,
    renderer: &R,
    root: PathBuf,
    params: &ScaffoldParams,
) -> Result<Plan, AppError> {
    let manifest = ManifestResolver::new(templates, renderer).resolve(&root, params)?;
    Ok(Plan::from_manifest(&manifest, &params.environment))
}
