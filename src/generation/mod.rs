//! Generation domain module - turns the designed API into artifacts
//!
//! Emitters are pure renderers behind the [`ArtifactEmitter`] port; the
//! [`GenerationOrchestrator`] runs them concurrently and persists their output
//! through an [`OutputService`].

pub mod errors;
pub mod orchestrator;
pub mod traits;
pub mod types;

pub use errors::*;
pub use orchestrator::*;
pub use traits::*;
pub use types::*;
