//! Error types for the template infrastructure layer

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading templates
#[derive(Error, Debug)]
pub enum TemplateError {
    /// No template with this name, neither overridden nor embedded
    #[error("Template not found: {0}")]
    TemplateNotFound(String),

    /// IO error reading an override
    #[error("Failed to read template {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Template bytes are not UTF-8
    #[error("Template {0} is not valid UTF-8")]
    InvalidUtf8(String),
}

impl TemplateError {
    /// Create a new template not found error with name
    pub fn not_found<S: Into<String>>(name: S) -> Self {
        Self::TemplateNotFound(name.into())
    }
}
