//! The movie mutation engine.
//!
//! Sits between the HTTP boundary and the persistence gateway. Every mutation
//! is a full read-modify-write cycle against the backing document; cycles are
//! serialized through a single write lock so two concurrent writers cannot
//! lose each other's updates. Pure reads bypass the lock.

use crate::app::error::ServiceError;
use crate::domain::model::{new_entity_id, Movie, Review};
use crate::domain::validate::{self, MOVIE_RULES, REVIEW_RULES};
use crate::storage::catalog::CatalogStore;
use chrono::Utc;
use serde_json::Value as JsonValue;
use std::sync::Arc;
use tokio::sync::Mutex;

pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
    /// Guards the read-modify-write cycle of every mutation. The guard is
    /// dropped on every exit path, including failures.
    write_lock: Mutex<()>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }

    /// Validates the payload, assigns an id, and appends a movie with an
    /// empty review list. Returns the confirmation message. Either the full
    /// collection is re-persisted with the new movie or nothing changes.
    pub async fn create_movie(&self, payload: &JsonValue) -> Result<String, ServiceError> {
        let violations = validate::check(MOVIE_RULES, payload);
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        // The rules above guarantee these fields are present and well-typed.
        let title = payload["title"].as_str().unwrap_or_default().to_string();
        let year = payload["year"].as_i64().unwrap_or_default();
        let kind = payload["type"].as_str().unwrap_or_default().to_string();
        let category = payload
            .get("category")
            .and_then(JsonValue::as_str)
            .map(str::to_string);

        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.get_movies().await?;

        let mut id = new_entity_id();
        while movies.iter().any(|m| m.id == id) {
            id = new_entity_id();
        }

        movies.push(Movie {
            id,
            title: title.clone(),
            year,
            kind,
            category,
            reviews: Vec::new(),
        });
        self.store.write_movies(&movies).await?;

        Ok(format!("{} added to the catalog successfully!", title))
    }

    /// Lists the collection, optionally filtered to movies whose `category`
    /// equals `category` exactly. Preserves document order. Lock-free.
    pub async fn list_movies(&self, category: Option<&str>) -> Result<Vec<Movie>, ServiceError> {
        let movies = self.store.get_movies().await?;
        Ok(match category {
            Some(wanted) => movies
                .into_iter()
                .filter(|m| m.category.as_deref() == Some(wanted))
                .collect(),
            None => movies,
        })
    }

    /// Removes the movie (and with it all its reviews) by exact id match.
    pub async fn delete_movie(&self, id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.get_movies().await?;

        let before = movies.len();
        movies.retain(|m| m.id != id);
        if movies.len() == before {
            return Err(ServiceError::NotFound(format!("No movie with id {}", id)));
        }
        self.store.write_movies(&movies).await?;
        Ok(())
    }

    /// Appends a review under the movie, stamping id and creation time.
    /// A missing movie takes precedence over payload violations.
    pub async fn create_review(
        &self,
        movie_id: &str,
        payload: &JsonValue,
    ) -> Result<Review, ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.get_movies().await?;

        let movie = movies
            .iter_mut()
            .find(|m| m.id == movie_id)
            .ok_or_else(|| ServiceError::NotFound(format!("No movie with id {}", movie_id)))?;

        let violations = validate::check(REVIEW_RULES, payload);
        if !violations.is_empty() {
            return Err(ServiceError::Validation(violations));
        }

        let review = Review {
            id: new_entity_id(),
            comment: payload["comment"].as_str().unwrap_or_default().to_string(),
            rate: payload["rate"].as_f64().unwrap_or_default(),
            created_at: Utc::now(),
        };
        movie.reviews.push(review.clone());
        self.store.write_movies(&movies).await?;
        Ok(review)
    }

    /// Removes a review by exact id match under the movie. The movie must
    /// exist; removing an already-absent review is a safe no-op.
    pub async fn delete_review(&self, movie_id: &str, review_id: &str) -> Result<(), ServiceError> {
        let _guard = self.write_lock.lock().await;
        let mut movies = self.store.get_movies().await?;

        let movie = movies
            .iter_mut()
            .find(|m| m.id == movie_id)
            .ok_or_else(|| ServiceError::NotFound(format!("No movie with id {}", movie_id)))?;

        movie.reviews.retain(|r| r.id != review_id);
        self.store.write_movies(&movies).await?;
        Ok(())
    }
}
