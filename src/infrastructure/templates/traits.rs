//! Template repository traits for the infrastructure layer

use crate::infrastructure::templates::TemplateError;

/// Source of template text, addressed by names such as `gin/handlers.go.tera`
pub trait TemplateRepository: Send + Sync {
    /// Load the source of a template
    fn load(&self, name: &str) -> Result<String, TemplateError>;

    /// Check if a template exists under the given name
    fn has_template(&self, name: &str) -> bool;
}
