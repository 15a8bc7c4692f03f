//! Filesystem overrides for templates
//!
//! A user-supplied directory (`--template-dir`) may replace any template by
//! placing a file with the same file name in it. Templates without an override
//! come from the fallback repository.

use std::path::PathBuf;
use std::sync::Arc;
use tracing::debug;

use crate::infrastructure::templates::{TemplateError, TemplateRepository};

/// Template repository that prefers files from an override directory
pub struct OverlayTemplateRepository {
    dir: PathBuf,
    fallback: Arc<dyn TemplateRepository>,
}

impl OverlayTemplateRepository {
    pub fn new(dir: impl Into<PathBuf>, fallback: Arc<dyn TemplateRepository>) -> Self {
        Self {
            dir: dir.into(),
            fallback,
        }
    }

    fn override_path(&self, name: &str) -> PathBuf {
        let file_name = name.rsplit('/').next().unwrap_or(name);
        self.dir.join(file_name)
    }
}

impl TemplateRepository for OverlayTemplateRepository {
    fn load(&self, name: &str) -> Result<String, TemplateError> {
        let path = self.override_path(name);
        if !path.is_file() {
            return self.fallback.load(name);
        }

        debug!(template = name, path = %path.display(), "Using template override");
        std::fs::read_to_string(&path).map_err(|source| TemplateError::Io { path, source })
    }

    fn has_template(&self, name: &str) -> bool {
        self.override_path(name).is_file() || self.fallback.has_template(name)
    }
}
