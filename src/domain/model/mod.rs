//! Domain entities for the movie catalog.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A catalog entry with its owned reviews.
///
/// The `id` is assigned server-side at creation and never changes; reviews
/// live and die with their parent movie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: String,
    pub title: String,
    pub year: i64,
    /// Classification of the entry (e.g. "movie", "series").
    #[serde(rename = "type")]
    pub kind: String,
    /// Free-form grouping used by the list filter; omitted from the document
    /// when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub reviews: Vec<Review>,
}

/// A comment+rating entity owned by exactly one movie.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct Review {
    pub id: String,
    pub comment: String,
    pub rate: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// Generates an opaque entity id: hex millisecond timestamp plus a random
/// suffix. Callers that need uniqueness against an existing collection must
/// still check and regenerate on collision.
pub fn new_entity_id() -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix: u32 = rand::thread_rng().gen();
    format!("{:x}{:08x}", millis, suffix)
}
