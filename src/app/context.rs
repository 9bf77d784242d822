use crate::domain::TemplateRenderer;
use crate::ports::{ArtifactTemplateStore, ScaffoldFilesystem, SourceReader};

/// Application context holding dependencies for command execution.
pub struct AppContext<F, T, R, S>
where
    F: ScaffoldFilesystem,
    T: ArtifactTemplateStore,
    R: TemplateRenderer,
    S: SourceReader,
{
    filesystem: F,
    templates: T,
    renderer: R,
    source_reader: S,
}

impl<F, T, R, S> AppContext<F, T, R, S>
where
    F: ScaffoldFilesystem,
    T: ArtifactTemplateStore,
    R: TemplateRenderer,
    S: SourceReader,
{
    /// Create a new application context.
    pub fn new(filesystem: F, templates: T, renderer: R, source_reader: S) -> Self {
        Self { filesystem, templates, renderer, source_reader }
    }

    /// Get a reference to the output filesystem.
    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    /// Get a reference to the artifact template store.
    pub fn templates(&self) -> &T {
        &self.templates
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn source_reader(&self) -> &S {
        &self.source_reader
    }
}
