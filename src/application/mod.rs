//! Application layer - orchestrates use cases and coordinates between domains

pub mod analyze;
pub mod dto;
pub mod errors;
pub mod generate_api;
pub mod traits;

pub use analyze::AnalyzeUseCase;
pub use dto::*;
pub use errors::*;
pub use generate_api::GenerateApiUseCase;
pub use traits::*;
