use std::io;

use thiserror::Error;

use crate::exit_codes;

/// Library-wide error type for deploykit operations.
#[derive(Debug, Error)]
pub enum AppError {
    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] io::Error),

    /// Scaffold parameters were rejected before anything was written.
    #[error("Invalid configuration: {0}")]
    InvalidConfiguration(String),

    /// Reference document could not be read.
    #[error("Source document unavailable ({path}): {reason}")]
    SourceUnavailable { path: String, reason: String },

    /// Path escapes the output root.
    #[error("Path traversal detected: {0}")]
    PathTraversal(String),

    /// Manifest entries violate ordering or shape rules.
    #[error("Invalid manifest: {0}")]
    InvalidManifest(String),

    /// Artifact template is not embedded in the binary.
    #[error("Template '{0}' not found")]
    TemplateNotFound(String),

    /// Artifact template failed to render.
    #[error("Failed to render template '{template}': {reason}")]
    TemplateRender { template: String, reason: String },

    /// Parse error.
    #[error("Failed to parse {what}: {details}")]
    ParseError { what: String, details: String },

    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    TomlParseError(#[from] toml::de::Error),
}

impl AppError {
    pub fn invalid_configuration<S: Into<String>>(message: S) -> Self {
        AppError::InvalidConfiguration(message.into())
    }

    pub fn source_unavailable(path: impl Into<String>, reason: impl Into<String>) -> Self {
        AppError::SourceUnavailable { path: path.into(), reason: reason.into() }
    }

    /// Process exit status for a run that stopped on this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AppError::InvalidConfiguration(_) | AppError::TomlParseError(_) => {
                exit_codes::INVALID_CONFIGURATION
            }
            AppError::SourceUnavailable { .. } => exit_codes::SOURCE_UNAVAILABLE,
            _ => exit_codes::ERROR,
        }
    }
}
