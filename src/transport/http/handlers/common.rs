use crate::app::error::ServiceError;
use crate::transport::http::types::ErrorResponse;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::Json;

/// Translates an engine failure into the one error response sent for the
/// request. Picks the status from the error contract and carries the
/// violation list through for validation failures.
pub fn error_response(err: ServiceError) -> (StatusCode, Json<ErrorResponse>) {
    let status = err.status_code();
    let body = match err {
        ServiceError::Validation(violations) => ErrorResponse {
            message: "Payload validation failed".to_string(),
            errors: Some(violations),
        },
        other => ErrorResponse {
            message: other.to_string(),
            errors: None,
        },
    };
    (status, Json(body))
}

/// A body that does not parse as JSON at all maps onto the 400 slot of the
/// status contract.
pub fn bad_json(err: JsonRejection) -> (StatusCode, Json<ErrorResponse>) {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            message: format!("Invalid JSON body: {}", err),
            errors: None,
        }),
    )
}
