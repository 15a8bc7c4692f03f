//! Use case for generating the Gin scaffolding, OpenAPI document and tests

use std::sync::Arc;
use tracing::info;

use crate::analysis::extract_path;
use crate::application::analyze::design_functions;
use crate::application::{
    ApplicationError, EmitterFactory, GenerateApiRequest, GenerateApiResponse,
};
use crate::generation::{GenerationOrchestrator, OutputService};

/// Use case for running the whole pipeline
pub struct GenerateApiUseCase {
    output_service: Arc<dyn OutputService>,
    emitter_factory: Arc<dyn EmitterFactory>,
}

impl GenerateApiUseCase {
    pub fn new(
        output_service: Arc<dyn OutputService>,
        emitter_factory: Arc<dyn EmitterFactory>,
    ) -> Self {
        Self {
            output_service,
            emitter_factory,
        }
    }

    /// Extraction and design failures abort the run before anything is
    /// written. Artifact failures are reported per artifact in the response.
    pub async fn execute(
        &self,
        request: GenerateApiRequest,
    ) -> Result<GenerateApiResponse, ApplicationError> {
        // 1. Validate request
        request.validate()?;

        info!(
            source = %request.source.display(),
            output_dir = %request.output_dir.display(),
            "Starting API generation"
        );

        // 2. Extract declarations and design endpoints
        let functions = extract_path(&request.source).await?;
        let model = Arc::new(design_functions(&functions, &request.config)?);

        // 3. Emit artifacts
        self.output_service
            .ensure_directory(&request.output_dir)
            .await?;

        let orchestrator = self
            .emitter_factory
            .emitters(&request.config)
            .into_iter()
            .fold(
                GenerationOrchestrator::new(Arc::clone(&self.output_service), &request.output_dir),
                GenerationOrchestrator::with_emitter,
            );
        let report = orchestrator.generate(Arc::clone(&model)).await;

        Ok(GenerateApiResponse {
            output_dir: request.output_dir,
            functions: functions.len(),
            model,
            report,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Config;
    use crate::generation::ArtifactKind;
    use crate::infrastructure::FileSystemOutputService;
    use crate::infrastructure::generation::GinEmitterFactory;
    use tempfile::TempDir;

    fn use_case() -> GenerateApiUseCase {
        GenerateApiUseCase::new(
            Arc::new(FileSystemOutputService::new()),
            Arc::new(GinEmitterFactory::new()),
        )
    }

    fn source_dir() -> TempDir {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join("users.go"),
            "package users\n\nfunc CreateUser(name string, email string) (string, error) { return \"\", nil }\nfunc GetUser(id string) {}\n",
        )
        .unwrap();
        dir
    }

    #[tokio::test]
    async fn test_generates_all_artifacts() {
        let source = source_dir();
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("generated");

        let response = use_case()
            .execute(GenerateApiRequest {
                source: source.path().to_path_buf(),
                output_dir: output_dir.clone(),
                config: Config::default(),
            })
            .await
            .unwrap();

        assert!(response.report.is_success());
        assert_eq!(response.functions, 2);
        assert_eq!(response.model.len(), 2);
        assert!(output_dir.join("generated_handlers.go").is_file());
        assert!(output_dir.join("openapi.json").is_file());
        assert!(output_dir.join("generated_handlers_test.go").is_file());
        assert!(!output_dir.join("go.mod").exists());
    }

    #[tokio::test]
    async fn test_go_module_is_opt_in() {
        let source = source_dir();
        let out = TempDir::new().unwrap();

        let config = Config {
            go_module: Some("example.com/users".to_string()),
            ..Default::default()
        };
        let response = use_case()
            .execute(GenerateApiRequest {
                source: source.path().to_path_buf(),
                output_dir: out.path().to_path_buf(),
                config,
            })
            .await
            .unwrap();

        assert!(response.report.outcome(ArtifactKind::GoModule).is_some());
        let go_mod = std::fs::read_to_string(out.path().join("go.mod")).unwrap();
        assert!(go_mod.starts_with("module example.com/users"));
    }

    #[tokio::test]
    async fn test_parse_failure_writes_nothing() {
        let source = TempDir::new().unwrap();
        std::fs::write(source.path().join("bad.go"), "package bad\nfunc Broken( {\n").unwrap();
        let out = TempDir::new().unwrap();
        let output_dir = out.path().join("generated");

        let error = use_case()
            .execute(GenerateApiRequest {
                source: source.path().to_path_buf(),
                output_dir: output_dir.clone(),
                config: Config::default(),
            })
            .await
            .unwrap_err();

        assert!(matches!(error, ApplicationError::Parse(_)));
        assert!(!output_dir.exists());
    }
}
