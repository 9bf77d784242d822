use crate::domain::AppError;

/// Port for looking up artifact templates by name.
pub trait ArtifactTemplateStore {
    /// Template source, or `None` if no template has that name.
    fn template(&self, name: &str) -> Option<&str>;

    /// Names of all available templates, sorted.
    fn template_names(&self) -> Vec<String>;

    /// Template source, failing with `TemplateNotFound` when missing.
    fn require_template(&self, name: &str) -> Result<&str, AppError> {
        self.template(name).ok_or_else(|| AppError::TemplateNotFound(name.to_string()))
    }
}
