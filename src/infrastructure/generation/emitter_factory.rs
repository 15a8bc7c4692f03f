//! Wires the Gin emitters for a run

use std::sync::Arc;

use crate::application::EmitterFactory;
use crate::core::Config;
use crate::generation::ArtifactEmitter;
use crate::infrastructure::generation::{
    HandlerEmitter, ModuleEmitter, OpenApiEmitter, TeraTemplateRenderer, TestEmitter,
};
use crate::infrastructure::templates::{
    EmbeddedTemplateRepository, OverlayTemplateRepository, TemplateRepository,
};

/// Emitters for Gin scaffolding: handlers, OpenAPI, tests and, when a module
/// path is configured, `go.mod`.
#[derive(Debug, Default)]
pub struct GinEmitterFactory;

impl GinEmitterFactory {
    pub fn new() -> Self {
        Self
    }

    fn templates(config: &Config) -> Arc<dyn TemplateRepository> {
        let embedded: Arc<dyn TemplateRepository> = Arc::new(EmbeddedTemplateRepository::new());
        match &config.template_dir {
            Some(dir) => Arc::new(OverlayTemplateRepository::new(dir, embedded)),
            None => embedded,
        }
    }
}

impl EmitterFactory for GinEmitterFactory {
    fn emitters(&self, config: &Config) -> Vec<Arc<dyn ArtifactEmitter>> {
        let renderer = Arc::new(TeraTemplateRenderer::new(Self::templates(config)));

        let mut emitters: Vec<Arc<dyn ArtifactEmitter>> = vec![
            Arc::new(HandlerEmitter::new(
                Arc::clone(&renderer),
                &config.package_name,
                &config.files.handlers,
            )),
            Arc::new(OpenApiEmitter::new(
                &config.api_title,
                &config.api_version,
                &config.files.openapi,
            )),
            Arc::new(TestEmitter::new(
                Arc::clone(&renderer),
                &config.package_name,
                &config.files.tests,
            )),
        ];

        if let Some(module) = &config.go_module {
            emitters.push(Arc::new(ModuleEmitter::new(renderer, module)));
        }

        emitters
    }
}
