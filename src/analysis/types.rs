//! Descriptors produced by declaration extraction

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

/// A named, typed slot in a signature: a parameter or a result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Declared name; empty for unnamed parameters and results
    pub name: String,
    /// Rendered type expression
    pub type_text: String,
}

impl Field {
    pub fn new(name: impl Into<String>, type_text: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            type_text: type_text.into(),
        }
    }

    pub fn unnamed(type_text: impl Into<String>) -> Self {
        Self::new(String::new(), type_text)
    }
}

/// Where a declaration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Origin {
    pub file: PathBuf,
    /// 1-based line of the `func` keyword
    pub line: usize,
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file.display(), self.line)
    }
}

/// One parsed function or method declaration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FunctionDescriptor {
    pub name: String,
    /// Receiver type text, present iff the declaration is a method
    pub receiver_type: Option<String>,
    pub parameters: Vec<Field>,
    pub results: Vec<Field>,
    pub is_generic: bool,
    pub origin: Origin,
}

impl FunctionDescriptor {
    pub fn is_method(&self) -> bool {
        self.receiver_type.is_some()
    }
}
