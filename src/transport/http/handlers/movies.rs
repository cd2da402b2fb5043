use crate::domain::model::Movie;
use crate::transport::http::handlers::common::{bad_json, error_response};
use crate::transport::http::types::{
    AppState, CreateMovieRequest, ErrorResponse, ListMoviesQuery, MessageResponse,
};
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use serde_json::Value as JsonValue;

#[utoipa::path(
    post,
    path = "/movies",
    request_body = CreateMovieRequest,
    responses(
        (status = 200, description = "Movie added to the catalog", body = MessageResponse),
        (status = 400, description = "Payload failed validation", body = ErrorResponse),
        (status = 500, description = "Catalog document unavailable", body = ErrorResponse)
    )
)]
pub async fn create_movie_handler(
    State(state): State<AppState>,
    payload: Result<Json<JsonValue>, JsonRejection>,
) -> impl IntoResponse {
    let Json(payload) = match payload {
        Ok(v) => v,
        Err(e) => return bad_json(e).into_response(),
    };

    match state.catalog.create_movie(&payload).await {
        Ok(message) => (StatusCode::OK, Json(MessageResponse { message })).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    get,
    path = "/movies",
    params(
        ("category" = Option<String>, Query, description = "Exact-match category filter")
    ),
    responses(
        (status = 200, description = "Movies in the catalog", body = [Movie]),
        (status = 500, description = "Catalog document unavailable", body = ErrorResponse)
    )
)]
pub async fn list_movies_handler(
    State(state): State<AppState>,
    Query(query): Query<ListMoviesQuery>,
) -> impl IntoResponse {
    match state.catalog.list_movies(query.category.as_deref()).await {
        Ok(movies) => (StatusCode::OK, Json(movies)).into_response(),
        Err(e) => error_response(e).into_response(),
    }
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = String, Path, description = "Movie id")
    ),
    responses(
        (status = 204, description = "Movie and all its reviews removed"),
        (status = 404, description = "No movie with that id", body = ErrorResponse),
        (status = 500, description = "Catalog document unavailable", body = ErrorResponse)
    )
)]
pub async fn delete_movie_handler(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.catalog.delete_movie(&id).await {
        Ok(()) => StatusCode::NO_CONTENT.into_response(),
        Err(e) => error_response(e).into_response(),
    }
}
