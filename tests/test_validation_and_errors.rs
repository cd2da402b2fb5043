//! Validation failures, missing-id behavior, and the "nothing changed"
//! invariants on every failure path.

use movie_catalog_api::{transport, CatalogService, CatalogStore, JsonFileStore};
use serde_json::json;
use std::sync::Arc;

async fn spawn_server(
) -> Result<(String, Arc<JsonFileStore>, tempfile::TempDir), Box<dyn std::error::Error>> {
    let dir = tempfile::tempdir()?;
    let store = Arc::new(JsonFileStore::new(dir.path().join("movies.json")).await?);
    let catalog = Arc::new(CatalogService::new(store.clone()));
    let app_state = transport::http::AppState { catalog };
    let router = transport::http::create_router(app_state);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await?;
    let port = listener.local_addr()?.port();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });

    Ok((format!("http://127.0.0.1:{}", port), store, dir))
}

fn violation_fields(body: &serde_json::Value) -> Vec<&str> {
    body["errors"]
        .as_array()
        .map(|errors| {
            errors
                .iter()
                .filter_map(|e| e["field"].as_str())
                .collect()
        })
        .unwrap_or_default()
}

#[tokio::test]
async fn test_create_movie_collects_all_violations() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();
    let document_before = tokio::fs::read(store.path()).await?;

    // Empty payload: every movie rule fails, all reported at once.
    let resp = client
        .post(format!("{}/movies", base_url))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(violation_fields(&body), vec!["title", "year", "type"]);

    // Wrong year type: only that rule fails.
    let resp = client
        .post(format!("{}/movies", base_url))
        .json(&json!({"title": "Up", "year": "soon", "type": "movie"}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(violation_fields(&body), vec!["year"]);

    // Failed creates never touch the document.
    let document_after = tokio::fs::read(store.path()).await?;
    assert_eq!(document_before, document_after);

    Ok(())
}

#[tokio::test]
async fn test_delete_missing_movie_is_404_and_document_untouched(
) -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/movies", base_url))
        .json(&json!({"title": "Up", "year": 2009, "type": "movie"}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 200);
    let document_before = tokio::fs::read(store.path()).await?;

    let resp = client
        .delete(format!("{}/movies/no-such-id", base_url))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 404);
    let body: serde_json::Value = resp.json().await?;
    assert!(body["message"].as_str().unwrap_or("").contains("no-such-id"));

    let document_after = tokio::fs::read(store.path()).await?;
    assert_eq!(document_before, document_after);

    Ok(())
}

#[tokio::test]
async fn test_delete_movie_leaves_other_movies_intact() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    for title in ["First", "Second", "Third"] {
        client
            .post(format!("{}/movies", base_url))
            .json(&json!({"title": title, "year": 2001, "type": "movie"}))
            .send()
            .await?;
    }
    let movies = store.get_movies().await?;
    let second_id = movies[1].id.clone();

    // Review the movie about to be deleted; its review must go with it.
    let resp = client
        .post(format!("{}/movies/{}/reviews", base_url, second_id))
        .json(&json!({"comment": "fine", "rate": 3}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 201);

    let resp = client
        .delete(format!("{}/movies/{}", base_url, second_id))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 204);

    let remaining = store.get_movies().await?;
    assert_eq!(remaining.len(), 2);
    assert_eq!(remaining[0].title, "First");
    assert_eq!(remaining[1].title, "Third");
    assert!(remaining.iter().all(|m| m.reviews.is_empty()));

    Ok(())
}

#[tokio::test]
async fn test_review_missing_movie_and_validation() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    // A valid review body still 404s when the movie does not exist.
    let resp = client
        .post(format!("{}/movies/no-such-id/reviews", base_url))
        .json(&json!({"comment": "great", "rate": 5}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 404);

    client
        .post(format!("{}/movies", base_url))
        .json(&json!({"title": "Up", "year": 2009, "type": "movie"}))
        .send()
        .await?;
    let movie_id = store.get_movies().await?[0].id.clone();

    let resp = client
        .post(format!("{}/movies/{}/reviews", base_url, movie_id))
        .json(&json!({}))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert_eq!(violation_fields(&body), vec!["comment", "rate"]);
    assert!(store.get_movies().await?[0].reviews.is_empty());

    Ok(())
}

#[tokio::test]
async fn test_delete_review_semantics() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    client
        .post(format!("{}/movies", base_url))
        .json(&json!({"title": "Up", "year": 2009, "type": "movie"}))
        .send()
        .await?;
    let movie_id = store.get_movies().await?[0].id.clone();
    for (comment, rate) in [("great", 5), ("meh", 2)] {
        client
            .post(format!("{}/movies/{}/reviews", base_url, movie_id))
            .json(&json!({"comment": comment, "rate": rate}))
            .send()
            .await?;
    }

    // Each review is appended after the ones before it.
    let reviews = store.get_movies().await?[0].reviews.clone();
    assert_eq!(reviews.len(), 2);
    assert_eq!(reviews[0].comment, "great");
    assert_eq!(reviews[1].comment, "meh");

    // Unknown review id under an existing movie is an idempotent no-op.
    let resp = client
        .delete(format!("{}/movies/{}/reviews/no-such-review", base_url, movie_id))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 204);
    assert_eq!(store.get_movies().await?[0].reviews.len(), 2);

    // Deleting the first review removes exactly that one.
    let resp = client
        .delete(format!("{}/movies/{}/reviews/{}", base_url, movie_id, reviews[0].id))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 204);
    let remaining = store.get_movies().await?[0].reviews.clone();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].comment, "meh");

    // A missing movie is still 404 on the review path.
    let resp = client
        .delete(format!("{}/movies/no-such-id/reviews/whatever", base_url))
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 404);

    Ok(())
}

#[tokio::test]
async fn test_malformed_json_body_is_400() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, _store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client
        .post(format!("{}/movies", base_url))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await?;
    assert_eq!(resp.status().as_u16(), 400);
    let body: serde_json::Value = resp.json().await?;
    assert!(body["message"].as_str().unwrap_or("").contains("Invalid JSON body"));

    Ok(())
}

#[tokio::test]
async fn test_healthcheck_reports_catalog_state() -> Result<(), Box<dyn std::error::Error>> {
    let (base_url, store, _dir) = spawn_server().await?;
    let client = reqwest::Client::new();

    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status().as_u16(), 200);

    // Corrupt the backing document: the service reports unhealthy.
    tokio::fs::write(store.path(), b"{ definitely not an array").await?;
    let resp = client.get(format!("{}/health", base_url)).send().await?;
    assert_eq!(resp.status().as_u16(), 503);

    Ok(())
}
