use include_dir::{Dir, include_dir};

use crate::ports::ArtifactTemplateStore;

static TEMPLATES_DIR: Dir = include_dir!("$CARGO_MANIFEST_DIR/src/assets/templates");

/// Artifact templates compiled into the binary.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedTemplateStore;

impl EmbeddedTemplateStore {
    pub fn new() -> Self {
        Self
    }
}

impl ArtifactTemplateStore for EmbeddedTemplateStore {
    fn template(&self, name: &str) -> Option<&str> {
        TEMPLATES_DIR.get_file(name).and_then(|file| file.contents_utf8())
    }

    fn template_names(&self) -> Vec<String> {
        let mut names: Vec<String> = TEMPLATES_DIR
            .files()
            .map(|file| file.path().to_string_lossy().to_string())
            .collect();
        names.sort();
        names
    }
}
