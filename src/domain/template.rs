use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::AppError;

/// Variables visible to a single artifact template.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TemplateContext {
    /// Variable name to value mapping.
    pub variables: BTreeMap<String, serde_json::Value>,
}

impl TemplateContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a variable to the context.
    pub fn with_var(
        mut self,
        name: impl Into<String>,
        value: impl Serialize,
    ) -> Result<Self, AppError> {
        let name = name.into();
        let value = serde_json::to_value(value).map_err(|err| AppError::TemplateRender {
            template: format!("<context:{}>", name),
            reason: err.to_string(),
        })?;
        self.variables.insert(name, value);
        Ok(self)
    }
}

/// Trait for rendering templates.
///
/// Keeps the template engine out of the domain layer.
pub trait TemplateRenderer {
    /// Render `template` with `context`; `template_name` is used for error reporting.
    fn render(
        &self,
        template: &str,
        context: &TemplateContext,
        template_name: &str,
    ) -> Result<String, AppError>;
}
