//! Error types for the generation domain

use std::path::PathBuf;
use thiserror::Error;

use crate::generation::ArtifactKind;

/// Errors that fail a single artifact. Other artifacts of the run are unaffected.
#[derive(Error, Debug)]
pub enum EmitError {
    #[error("failed to render {artifact}: {message}")]
    Render {
        artifact: ArtifactKind,
        message: String,
    },

    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl EmitError {
    pub fn render(artifact: ArtifactKind, message: impl Into<String>) -> Self {
        Self::Render {
            artifact,
            message: message.into(),
        }
    }

    pub fn write(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}
