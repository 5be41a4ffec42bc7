//! Error types for the tracked defaults store
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::models::ErrorResponse;

// == Defaults Error Enum ==
/// Unified error type for the defaults store and its HTTP surface.
///
/// Absence of a key is never an error; lookups return `None` or `false`.
#[derive(Error, Debug)]
pub enum DefaultsError {
    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// The store has no room for a new key
    #[error("Store full: {0}")]
    StoreFull(String),

    /// The store refused or could not complete the operation
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

// == IntoResponse Implementation ==
impl IntoResponse for DefaultsError {
    fn into_response(self) -> Response {
        let status = match &self {
            DefaultsError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            DefaultsError::StoreFull(_) => StatusCode::SERVICE_UNAVAILABLE,
            DefaultsError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            DefaultsError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(ErrorResponse::new(self.to_string()));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the defaults store.
pub type Result<T> = std::result::Result<T, DefaultsError>;
