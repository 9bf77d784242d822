pub mod artifacts;
pub mod environment;
pub mod error;
pub mod inventory;
pub mod manifest;
pub mod params;
pub mod paths;
pub mod report;
pub mod source;
pub mod template;

pub use artifacts::{ARTIFACTS, ArtifactSpec, DIRECTORIES, TemplateParam};
pub use environment::{DeployEnvironment, EnvironmentProfile};
pub use error::AppError;
pub use inventory::Inventory;
pub use manifest::{EntryKind, Manifest, ManifestEntry};
pub use params::{ResolvedParams, ScaffoldParams};
pub use report::{MaterializationOutcome, MaterializationReport, MaterializationResult};
pub use source::SourceText;
pub use template::{TemplateContext, TemplateRenderer};
