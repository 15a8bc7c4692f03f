//! Application layer error types

use std::path::PathBuf;
use thiserror::Error;

/// Application layer errors. Every variant aborts the run.
#[derive(Error, Debug)]
pub enum ApplicationError {
    #[error(transparent)]
    Parse(#[from] crate::analysis::ParseError),

    #[error(transparent)]
    Design(#[from] crate::design::DesignError),

    #[error("Validation error: {0}")]
    ValidationError(#[from] ValidationError),

    #[error(transparent)]
    Config(#[from] crate::core::Error),

    #[error("Output error: {0}")]
    OutputError(#[from] crate::generation::EmitError),
}

/// Validation errors for requests
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Source path does not exist: {}", .0.display())]
    MissingSource(PathBuf),

    #[error("Template directory does not exist: {}", .0.display())]
    MissingTemplateDir(PathBuf),

    #[error("Output directory {} is not a directory", .0.display())]
    OutputNotADirectory(PathBuf),
}
