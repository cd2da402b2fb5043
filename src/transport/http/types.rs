use crate::app::catalog_service::CatalogService;
use crate::domain::validate::Violation;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use utoipa::ToSchema;

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<CatalogService>,
}

/// Body of `POST /movies`.
///
/// Documentation schema only: the handler reads the raw JSON value so the
/// field rules can report every violation at once instead of a serde
/// rejection on the first missing field.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateMovieRequest {
    pub title: String,
    pub year: i64,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

/// Body of `POST /movies/{id}/reviews`. Documentation schema only, as above.
#[derive(Serialize, Deserialize, Debug, ToSchema)]
pub struct CreateReviewRequest {
    pub comment: String,
    pub rate: f64,
}

#[derive(Deserialize, Debug)]
pub struct ListMoviesQuery {
    pub category: Option<String>,
}

/// Success acknowledgment for operations that confirm with a message.
#[derive(Serialize, Debug, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

/// Uniform error body: a message, plus the full violation list when the
/// failure came from payload validation.
#[derive(Serialize, Debug, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<Violation>>,
}
