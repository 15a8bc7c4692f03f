//! Error types for endpoint design

use thiserror::Error;

use crate::analysis::Origin;
use crate::design::HttpMethod;

#[derive(Debug, Error)]
pub enum DesignError {
    #[error(
        "duplicate endpoint {method} {path}: '{first}' ({first_origin}) and '{second}' ({second_origin})"
    )]
    DuplicateEndpoint {
        method: HttpMethod,
        path: String,
        first: String,
        first_origin: Origin,
        second: String,
        second_origin: Origin,
    },
}
