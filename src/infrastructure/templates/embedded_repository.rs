//! Embedded template repository implementation

use rust_embed::RustEmbed;

use super::{TemplateError, TemplateRepository};

/// Container for all templates embedded at compile time
#[derive(RustEmbed)]
#[folder = "templates/"]
struct EmbeddedTemplates;

/// Template repository backed by embedded templates
pub struct EmbeddedTemplateRepository;

impl EmbeddedTemplateRepository {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EmbeddedTemplateRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRepository for EmbeddedTemplateRepository {
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        let file = EmbeddedTemplates::get(name).ok_or_else(|| TemplateError::not_found(name))?;
        String::from_utf8(file.data.into_owned())
            .map_err(|_| TemplateError::InvalidUtf8(name.to_string()))
    }

    fn has_template(&self, name: &str) -> bool {
        EmbeddedTemplates::get(name).is_some()
    }
}
