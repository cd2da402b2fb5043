//! Uniform failure contract between the engine and the HTTP boundary.

use crate::domain::validate::Violation;
use crate::storage::catalog::StoreError;
use axum::http::StatusCode;
use thiserror::Error;

/// Every engine failure carries a human-readable message (for validation
/// failures, the structured violation list) and maps onto one of a small
/// fixed set of status codes. The engine never writes an HTTP response;
/// translation happens once, at the boundary.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// The request payload failed one or more field rules.
    #[error("payload validation failed")]
    Validation(Vec<Violation>),
    /// Reserved for future auth checks; unused by the core logic.
    #[error("Unauthorized!")]
    Unauthorized,
    #[error("{0}")]
    NotFound(String),
    #[error(transparent)]
    Storage(#[from] StoreError),
}

impl ServiceError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            ServiceError::Validation(_) => StatusCode::BAD_REQUEST,
            ServiceError::Unauthorized => StatusCode::UNAUTHORIZED,
            ServiceError::NotFound(_) => StatusCode::NOT_FOUND,
            ServiceError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}
