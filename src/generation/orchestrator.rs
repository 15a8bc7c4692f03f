//! Generation orchestration - runs every emitter over the shared model

use futures::future::join_all;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{error, info};

use crate::design::ApiModel;
use crate::generation::{
    Artifact, ArtifactEmitter, ArtifactOutcome, EmitError, GenerationReport, OutputService,
};

/// Runs emitters concurrently and collects one outcome per emitter
pub struct GenerationOrchestrator {
    emitters: Vec<Arc<dyn ArtifactEmitter>>,
    output: Arc<dyn OutputService>,
    output_dir: PathBuf,
}

impl GenerationOrchestrator {
    /// Create a new generation orchestrator
    pub fn new(output: Arc<dyn OutputService>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            emitters: Vec::new(),
            output,
            output_dir: output_dir.into(),
        }
    }

    pub fn with_emitter(mut self, emitter: Arc<dyn ArtifactEmitter>) -> Self {
        self.emitters.push(emitter);
        self
    }

    /// Render and write every artifact.
    ///
    /// Each emitter runs in its own task. A failing or panicking emitter only
    /// fails its own artifact; the report lists outcomes in emitter order.
    pub async fn generate(&self, model: Arc<ApiModel>) -> GenerationReport {
        let tasks: Vec<_> = self
            .emitters
            .iter()
            .map(|emitter| {
                let emitter = Arc::clone(emitter);
                let output = Arc::clone(&self.output);
                let model = Arc::clone(&model);
                let path = self.output_dir.join(emitter.file_name());
                tokio::spawn(async move { emit(emitter.as_ref(), &model, output.as_ref(), path).await })
            })
            .collect();

        let results = join_all(tasks).await;

        let outcomes = self
            .emitters
            .iter()
            .zip(results)
            .map(|(emitter, joined)| {
                let kind = emitter.kind();
                let result = joined.unwrap_or_else(|e| {
                    Err(EmitError::render(kind, format!("emitter task failed: {e}")))
                });
                match result {
                    Ok(path) => {
                        info!(artifact = %kind, path = %path.display(), "Artifact written");
                        ArtifactOutcome::Written { kind, path }
                    }
                    Err(error) => {
                        error!(artifact = %kind, error = %error, "Artifact failed");
                        ArtifactOutcome::Failed { kind, error }
                    }
                }
            })
            .collect();

        GenerationReport { outcomes }
    }
}

async fn emit(
    emitter: &dyn ArtifactEmitter,
    model: &ApiModel,
    output: &dyn OutputService,
    path: PathBuf,
) -> Result<PathBuf, EmitError> {
    let content = emitter.render(model)?;
    let artifact = Artifact {
        kind: emitter.kind(),
        path,
        content,
    };
    output.write_artifact(&artifact).await?;
    Ok(artifact.path)
}
