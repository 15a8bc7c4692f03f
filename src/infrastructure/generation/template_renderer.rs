//! Tera-based template renderer implementation

use serde::Serialize;
use std::error::Error as StdError;
use std::sync::Arc;
use tera::{Context, Tera};

use crate::generation::{ArtifactKind, EmitError};
use crate::infrastructure::templates::TemplateRepository;

/// Renders a single named template against a serializable view model
pub struct TeraTemplateRenderer {
    repository: Arc<dyn TemplateRepository>,
}

impl TeraTemplateRenderer {
    pub fn new(repository: Arc<dyn TemplateRepository>) -> Self {
        Self { repository }
    }

    pub fn render<V: Serialize>(
        &self,
        artifact: ArtifactKind,
        template_name: &str,
        view: &V,
    ) -> Result<String, EmitError> {
        let source = self
            .repository
            .load(template_name)
            .map_err(|e| EmitError::render(artifact, error_chain(&e)))?;

        // Create a new Tera instance for this template
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);
        tera.add_raw_template(template_name, &source)
            .map_err(|e| EmitError::render(artifact, error_chain(&e)))?;

        let context =
            Context::from_serialize(view).map_err(|e| EmitError::render(artifact, error_chain(&e)))?;

        tera.render(template_name, &context)
            .map_err(|e| EmitError::render(artifact, error_chain(&e)))
    }
}

/// Tera reports the useful detail in nested sources; flatten them into one line.
fn error_chain(error: &dyn StdError) -> String {
    let mut message = error.to_string();
    let mut source = error.source();
    while let Some(cause) = source {
        message.push_str(": ");
        message.push_str(&cause.to_string());
        source = cause.source();
    }
    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::templates::TemplateError;
    use std::collections::HashMap;

    struct InMemoryTemplates(HashMap<&'static str, &'static str>);

    impl TemplateRepository for InMemoryTemplates {
        fn load(&self, name: &str) -> Result<String, TemplateError> {
            self.0
                .get(name)
                .map(|s| s.to_string())
                .ok_or_else(|| TemplateError::not_found(name))
        }

        fn has_template(&self, name: &str) -> bool {
            self.0.contains_key(name)
        }
    }

    fn renderer(templates: &[(&'static str, &'static str)]) -> TeraTemplateRenderer {
        TeraTemplateRenderer::new(Arc::new(InMemoryTemplates(
            templates.iter().copied().collect(),
        )))
    }

    #[derive(Serialize)]
    struct View {
        message: &'static str,
    }

    #[test]
    fn test_render_does_not_escape() {
        let renderer = renderer(&[("t.tera", "c.JSON(200, gin.H{\"message\": {{ message }}})")]);
        let out = renderer
            .render(ArtifactKind::Handlers, "t.tera", &View { message: "\"a<b>\"" })
            .unwrap();
        assert_eq!(out, "c.JSON(200, gin.H{\"message\": \"a<b>\"})");
    }

    #[test]
    fn test_syntax_error_is_render_error() {
        let renderer = renderer(&[("broken.tera", "{% for x in %}")]);
        let error = renderer
            .render(ArtifactKind::Tests, "broken.tera", &View { message: "" })
            .unwrap_err();
        assert!(matches!(
            error,
            EmitError::Render {
                artifact: ArtifactKind::Tests,
                ..
            }
        ));
    }

    #[test]
    fn test_missing_template_is_render_error() {
        let renderer = renderer(&[]);
        let error = renderer
            .render(ArtifactKind::GoModule, "gin/go.mod.tera", &View { message: "" })
            .unwrap_err();
        assert!(error.to_string().contains("gin/go.mod.tera"));
    }
}
