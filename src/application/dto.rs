//! Request and response types of the use cases

use std::path::PathBuf;
use std::sync::Arc;

use crate::analysis::FunctionDescriptor;
use crate::application::{ApplicationError, ValidationError};
use crate::core::Config;
use crate::design::ApiModel;
use crate::generation::GenerationReport;

/// Extract and design only
#[derive(Debug, Clone)]
pub struct AnalyzeRequest {
    /// Go file or directory to scan
    pub source: PathBuf,
    pub config: Config,
}

impl AnalyzeRequest {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if !self.source.exists() {
            return Err(ValidationError::MissingSource(self.source.clone()).into());
        }
        self.config.validate()?;
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct AnalyzeResponse {
    pub functions: Vec<FunctionDescriptor>,
    pub model: ApiModel,
}

/// Full pipeline into `output_dir`
#[derive(Debug, Clone)]
pub struct GenerateApiRequest {
    pub source: PathBuf,
    /// Resolved output directory; created when missing
    pub output_dir: PathBuf,
    pub config: Config,
}

impl GenerateApiRequest {
    pub fn validate(&self) -> Result<(), ApplicationError> {
        if !self.source.exists() {
            return Err(ValidationError::MissingSource(self.source.clone()).into());
        }

        if let Some(dir) = &self.config.template_dir {
            if !dir.is_dir() {
                return Err(ValidationError::MissingTemplateDir(dir.clone()).into());
            }
        }

        if self.output_dir.exists() && !self.output_dir.is_dir() {
            return Err(ValidationError::OutputNotADirectory(self.output_dir.clone()).into());
        }

        self.config.validate()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct GenerateApiResponse {
    pub output_dir: PathBuf,
    /// Number of declarations extracted, before exclusions
    pub functions: usize,
    pub model: Arc<ApiModel>,
    pub report: GenerationReport,
}
