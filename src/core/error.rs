//! Error handling for restforge configuration and shared plumbing.
//!
//! Stage-specific failures live next to their stage (`analysis::ParseError`,
//! `design::DesignError`, `generation::EmitError`); this module covers the
//! ambient concerns around them, chiefly loading and validating configuration.
//!
//! # Examples
//!
//! ```
//! use restforge::core::error::{Error, Result};
//!
//! fn might_fail() -> Result<()> {
//!     Err(Error::config("output file names must be distinct"))
//! }
//!
//! assert!(might_fail().is_err());
//! ```

use std::path::PathBuf;
use thiserror::Error;

/// Result type for restforge configuration operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for configuration and shared plumbing
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error while reading a configuration file
    #[error("I/O error reading {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a new configuration error
    pub fn config<S: Into<String>>(msg: S) -> Self {
        Self::Config(msg.into())
    }
}
