//! Core types for the generation domain

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;

use crate::generation::EmitError;

/// The artifacts a generation run can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Handlers,
    OpenApi,
    Tests,
    GoModule,
}

impl ArtifactKind {
    /// Get the display name for this artifact
    pub fn display_name(&self) -> &'static str {
        match self {
            ArtifactKind::Handlers => "Gin handlers",
            ArtifactKind::OpenApi => "OpenAPI document",
            ArtifactKind::Tests => "Go test suite",
            ArtifactKind::GoModule => "Go module file",
        }
    }
}

impl fmt::Display for ArtifactKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArtifactKind::Handlers => write!(f, "handlers"),
            ArtifactKind::OpenApi => write!(f, "openapi"),
            ArtifactKind::Tests => write!(f, "tests"),
            ArtifactKind::GoModule => write!(f, "go.mod"),
        }
    }
}

/// A rendered file ready to be written
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub kind: ArtifactKind,
    pub path: PathBuf,
    pub content: String,
}

/// What happened to one artifact
#[derive(Debug)]
pub enum ArtifactOutcome {
    Written { kind: ArtifactKind, path: PathBuf },
    Failed { kind: ArtifactKind, error: EmitError },
}

impl ArtifactOutcome {
    pub fn kind(&self) -> ArtifactKind {
        match self {
            ArtifactOutcome::Written { kind, .. } | ArtifactOutcome::Failed { kind, .. } => *kind,
        }
    }

    pub fn is_written(&self) -> bool {
        matches!(self, ArtifactOutcome::Written { .. })
    }
}

/// Per-artifact outcomes of a generation run, in emitter order
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub outcomes: Vec<ArtifactOutcome>,
}

impl GenerationReport {
    /// True iff every artifact was written
    pub fn is_success(&self) -> bool {
        self.outcomes.iter().all(ArtifactOutcome::is_written)
    }

    pub fn written(&self) -> impl Iterator<Item = (ArtifactKind, &PathBuf)> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            ArtifactOutcome::Written { kind, path } => Some((*kind, path)),
            ArtifactOutcome::Failed { .. } => None,
        })
    }

    pub fn failures(&self) -> impl Iterator<Item = (ArtifactKind, &EmitError)> + '_ {
        self.outcomes.iter().filter_map(|o| match o {
            ArtifactOutcome::Failed { kind, error } => Some((*kind, error)),
            ArtifactOutcome::Written { .. } => None,
        })
    }

    pub fn outcome(&self, kind: ArtifactKind) -> Option<&ArtifactOutcome> {
        self.outcomes.iter().find(|o| o.kind() == kind)
    }
}
