//! Port interfaces for the generation domain

use async_trait::async_trait;
use std::path::Path;

use crate::design::ApiModel;
use crate::generation::{Artifact, ArtifactKind, EmitError};

/// Renders one artifact from the designed API
pub trait ArtifactEmitter: Send + Sync {
    fn kind(&self) -> ArtifactKind;

    /// File name of the artifact, relative to the output directory
    fn file_name(&self) -> &str;

    /// Render the artifact into memory. Must not touch the filesystem.
    fn render(&self, model: &ApiModel) -> Result<String, EmitError>;
}

/// Persists rendered artifacts
#[async_trait]
pub trait OutputService: Send + Sync {
    /// Write an artifact so that it either fully exists or not at all
    async fn write_artifact(&self, artifact: &Artifact) -> Result<(), EmitError>;

    /// Create the directory and its parents if missing
    async fn ensure_directory(&self, path: &Path) -> Result<(), EmitError>;
}
