//! Endpoint design - maps function descriptors onto REST endpoints
//!
//! Design is pure: the same descriptors and options always produce the same
//! [`ApiModel`].

pub mod designer;
pub mod errors;
pub mod rules;
pub mod types;

pub use designer::{EndpointDesigner, design};
pub use errors::DesignError;
pub use types::*;
