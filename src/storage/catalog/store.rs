//! Persistence gateway contract for the movie collection.

use crate::domain::model::Movie;
use async_trait::async_trait;
use thiserror::Error;

/// Failures surfaced by the gateway. Read covers a missing or malformed
/// document as well as I/O errors; both classes map to 500 at the boundary.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read catalog document: {0}")]
    Read(String),
    #[error("failed to write catalog document: {0}")]
    Write(String),
}

/// The movie collection persisted as one document.
///
/// No caching: every call round-trips through the backing document, so memory
/// is bounded by catalog size and throughput by document size.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Loads the full collection. A missing or malformed document is an
    /// error, propagated rather than recovered.
    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError>;

    /// Serializes and overwrites the full collection. The write is atomic
    /// with respect to the calling request: a concurrent reader sees either
    /// the old or the new document, never a partial one.
    async fn write_movies(&self, movies: &[Movie]) -> Result<(), StoreError>;
}
