//! restforge turns Go function declarations into REST scaffolding.
//!
//! The pipeline runs in one direction:
//!
//! 1. [`analysis`] extracts function descriptors from Go source.
//! 2. [`design`] maps each function onto an endpoint.
//! 3. [`generation`] runs the emitters from [`infrastructure::generation`]
//!    to write Gin handlers, an OpenAPI document and a Go test suite.
//!
//! [`application`] wires the stages into the `generate` and `analyze` use cases.
#![deny(unsafe_code)]

pub mod analysis;
pub mod application;
pub mod core;
pub mod design;
pub mod generation;
pub mod infrastructure;
