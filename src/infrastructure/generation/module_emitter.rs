//! `go.mod` for the generated package

use serde::Serialize;
use std::sync::Arc;

use crate::core::config::GO_MODULE_FILE;
use crate::design::ApiModel;
use crate::generation::{ArtifactEmitter, ArtifactKind, EmitError};
use crate::infrastructure::generation::TeraTemplateRenderer;
use crate::infrastructure::templates::GO_MODULE_TEMPLATE;

pub const GO_VERSION: &str = "1.21";
pub const GIN_VERSION: &str = "v1.9.1";
pub const TESTIFY_VERSION: &str = "v1.8.4";

#[derive(Debug, Serialize)]
struct ModuleView<'a> {
    module: &'a str,
    go_version: &'a str,
    gin_version: &'a str,
    testify_version: &'a str,
}

/// Declares the module and requires Gin and testify
pub struct ModuleEmitter {
    renderer: Arc<TeraTemplateRenderer>,
    module: String,
}

impl ModuleEmitter {
    pub fn new(renderer: Arc<TeraTemplateRenderer>, module: impl Into<String>) -> Self {
        Self {
            renderer,
            module: module.into(),
        }
    }
}

impl ArtifactEmitter for ModuleEmitter {
    fn kind(&self) -> ArtifactKind {
        ArtifactKind::GoModule
    }

    fn file_name(&self) -> &str {
        GO_MODULE_FILE
    }

    fn render(&self, _model: &ApiModel) -> Result<String, EmitError> {
        let view = ModuleView {
            module: &self.module,
            go_version: GO_VERSION,
            gin_version: GIN_VERSION,
            testify_version: TESTIFY_VERSION,
        };
        self.renderer.render(self.kind(), GO_MODULE_TEMPLATE, &view)
    }
}
