//! Ports used by the application layer

use std::sync::Arc;

use crate::core::Config;
use crate::generation::ArtifactEmitter;

/// Builds the emitters of a run from its configuration
pub trait EmitterFactory: Send + Sync {
    /// Emitters in the order their outcomes are reported
    fn emitters(&self, config: &Config) -> Vec<Arc<dyn ArtifactEmitter>>;
}
