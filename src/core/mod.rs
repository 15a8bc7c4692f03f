//! Shared plumbing: configuration, error types and string utilities.

pub mod config;
pub mod error;
pub mod utils;

pub use config::{Config, OutputFiles};
pub use error::{Error, Result};
