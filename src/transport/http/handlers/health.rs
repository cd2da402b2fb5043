use crate::transport::http::handlers::common::error_response;
use crate::transport::http::types::{AppState, ErrorResponse};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is healthy (catalog document readable)"),
        (status = 503, description = "Catalog document unreadable", body = ErrorResponse)
    )
)]
pub async fn healthcheck_handler(State(state): State<AppState>) -> impl IntoResponse {
    match state.catalog.list_movies(None).await {
        Ok(movies) => (
            StatusCode::OK,
            Json(serde_json::json!({ "status": "ok", "movies": movies.len() })),
        )
            .into_response(),
        Err(e) => {
            let (_, body) = error_response(e);
            (StatusCode::SERVICE_UNAVAILABLE, body).into_response()
        }
    }
}
