//! Error types for the HTTP layer
//!
//! The cache itself cannot fail; these errors describe malformed requests
//! rejected before they reach it.

use axum::{
    extract::rejection::{PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

// == Api Error Enum ==
/// Client errors raised while decoding a request.
#[derive(Error, Debug)]
pub enum ApiError {
    /// A path segment could not be decoded
    #[error("Invalid path: {0}")]
    InvalidPath(String),

    /// A query parameter could not be decoded
    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    /// The `data` query parameter is missing or empty
    #[error("Data cannot be empty!")]
    MissingData,

    /// The `data` query parameter is not valid JSON
    #[error("Invalid data: {0}")]
    InvalidData(#[from] serde_json::Error),
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::InvalidPath(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, self.to_string()).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for request handlers.
pub type Result<T> = std::result::Result<T, ApiError>;
