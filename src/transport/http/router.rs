use crate::domain::model::{Movie, Review};
use crate::domain::validate::Violation;
use crate::transport::http::handlers::{health, movies, reviews};
use crate::transport::http::types::{
    AppState, CreateMovieRequest, CreateReviewRequest, ErrorResponse, MessageResponse,
};
use axum::routing::{delete, get, post};
use axum::Router;
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    paths(
        health::healthcheck_handler,
        movies::create_movie_handler,
        movies::list_movies_handler,
        movies::delete_movie_handler,
        reviews::create_review_handler,
        reviews::delete_review_handler
    ),
    components(schemas(
        Movie,
        Review,
        Violation,
        CreateMovieRequest,
        CreateReviewRequest,
        MessageResponse,
        ErrorResponse
    ))
)]
#[allow(dead_code)]
pub struct ApiDoc;

pub fn create_router(app_state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::healthcheck_handler))
        .route(
            "/movies",
            post(movies::create_movie_handler).get(movies::list_movies_handler),
        )
        .route("/movies/:id", delete(movies::delete_movie_handler))
        .route("/movies/:id/reviews", post(reviews::create_review_handler))
        .route(
            "/movies/:id/reviews/:review_id",
            delete(reviews::delete_review_handler),
        )
        .with_state(app_state)
}
