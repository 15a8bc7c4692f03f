//! Error types for declaration extraction

use std::path::PathBuf;
use thiserror::Error;

/// Extraction failed for one source file. Fatal to the whole run.
#[derive(Debug, Error)]
#[error("failed to parse {}: {cause}", .path.display())]
pub struct ParseError {
    pub path: PathBuf,
    #[source]
    pub cause: ParseCause,
}

impl ParseError {
    pub fn new(path: impl Into<PathBuf>, cause: ParseCause) -> Self {
        Self {
            path: path.into(),
            cause,
        }
    }
}

/// Why a source file could not be turned into descriptors
#[derive(Debug, Error)]
pub enum ParseCause {
    #[error("unable to read source: {0}")]
    Io(#[from] std::io::Error),

    #[error("syntax error at line {line}, column {column}")]
    Syntax { line: usize, column: usize },

    #[error("expected 'package' clause")]
    MissingPackage,

    #[error("Go grammar unavailable: {0}")]
    Grammar(String),

    #[error("parser produced no syntax tree")]
    NoTree,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_error_display() {
        let error = ParseError::new(
            "src/users.go",
            ParseCause::Syntax {
                line: 3,
                column: 14,
            },
        );
        assert_eq!(
            error.to_string(),
            "failed to parse src/users.go: syntax error at line 3, column 14"
        );
    }

    #[test]
    fn test_parse_error_source_chain() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error = ParseError::new("locked.go", ParseCause::from(io));
        let source = std::error::Error::source(&error).unwrap();
        assert!(source.to_string().contains("denied"));
    }
}
