//! Template repository implementations

pub mod embedded_repository;
pub mod errors;
pub mod filesystem_loader;
pub mod traits;

pub use embedded_repository::*;
pub use errors::*;
pub use filesystem_loader::*;
pub use traits::*;

/// Gin handler source template
pub const HANDLERS_TEMPLATE: &str = "gin/handlers.go.tera";

/// Go test suite template
pub const TESTS_TEMPLATE: &str = "gin/handlers_test.go.tera";

/// `go.mod` template
pub const GO_MODULE_TEMPLATE: &str = "gin/go.mod.tera";
