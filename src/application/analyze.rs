//! Use case for inspecting the API a source tree would produce

use tracing::info;

use crate::analysis::{FunctionDescriptor, extract_path};
use crate::application::{AnalyzeRequest, AnalyzeResponse, ApplicationError};
use crate::core::Config;
use crate::design::{ApiModel, DesignError, design};

/// Drop excluded functions, then design the rest.
pub fn design_functions(
    functions: &[FunctionDescriptor],
    config: &Config,
) -> Result<ApiModel, DesignError> {
    let kept: Vec<FunctionDescriptor> = functions
        .iter()
        .filter(|f| !config.exclude_functions.contains(&f.name))
        .cloned()
        .collect();

    let excluded = functions.len() - kept.len();
    if excluded > 0 {
        info!(excluded, "Excluded functions from the API");
    }

    design(&kept, config.design_options())
}

/// Runs extraction and design without writing anything
#[derive(Debug, Default)]
pub struct AnalyzeUseCase;

impl AnalyzeUseCase {
    pub fn new() -> Self {
        Self
    }

    pub async fn execute(
        &self,
        request: AnalyzeRequest,
    ) -> Result<AnalyzeResponse, ApplicationError> {
        request.validate()?;

        let functions = extract_path(&request.source).await?;
        let model = design_functions(&functions, &request.config)?;

        Ok(AnalyzeResponse { functions, model })
    }
}
