use crate::domain::model::Review;
use crate::transport::http::handlers::common::{bad_json, error_response};
use crate::transport::http::types::{AppState, CreateReviewRequest, ErrorResponse};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/movies/{id}/reviews",
    params(
        ("id" = String, Path, description = "Movie id")
    ),
    request_body = CreateReviewRequest,
    responses(
        (status = 201, description = "Review posted", body = Review),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 404, description = "No movie with that id", body = ErrorResponse),
        (status = 500, description = "Catalog document unavailable", body = ErrorResponse)
    )
)]
pub async fn create_review_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => return bad_json(e).into_response(),
    };

    match state.catalog.create_review(&id, &payload).await {
        Ok(review) => (StatusCode::CREATED, Json(review)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/movies/{id}/reviews/{review_id}",
    params(
        ("id" = String, Path, description = "Movie id"),
        ("review_id" = String, Path, description = "Review id")
    ),
    responses(
        (status = 204, description = "Review removed (no-op when already absent)"),
        (status = 404, description = "No movie with that id", body = ErrorResponse),
        (status = 500, description = "Catalog document unavailable", body = ErrorResponse)
    )
)]
pub async fn delete_review_handler(
    State(state): State<AppState>,
    Path((id, review_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.catalog.delete_review(&id, &review_id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
