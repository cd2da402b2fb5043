use axum::extract::Request;
use axum::http::HeaderValue;
use axum::middleware::{self, Next};
use axum::response::Response;
use chrono::Utc;
use movie_catalog_api::infra::config;
use movie_catalog_api::transport;
use movie_catalog_api::{CatalogService, JsonFileStore};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

async fn log_request(req: Request, next: Next) -> Response {
    println!("Logged {} {} -- {}", req.uri().path(), req.method(), Utc::now());
    next.run(req).await
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    // --- Catalog Initialization ---
    let catalog_path = config::catalog_path();
    println!("> Opening catalog document at {}...", catalog_path);
    let store = Arc::new(JsonFileStore::new(catalog_path).await?);
    let catalog = Arc::new(CatalogService::new(store));
    let app_state = transport::http::AppState { catalog };
    println!("> Catalog service initialized.");

    // Production restricts CORS to the configured frontend origin; any other
    // environment stays open for local development.
    let cors = match (config::app_env().as_str(), config::frontend_url()) {
        ("production", Some(origin)) => {
            let origin = origin.parse::<HeaderValue>()?;
            CorsLayer::new().allow_origin(origin).allow_methods(Any)
        }
        _ => CorsLayer::new().allow_origin(Any).allow_methods(Any),
    };

    // --- API Server Initialization ---
    let app = transport::http::create_router(app_state)
        .merge(
            SwaggerUi::new("/swagger-ui")
                .url("/api-docs/openapi.json", transport::http::ApiDoc::openapi()),
        )
        .layer(middleware::from_fn(log_request))
        .layer(cors);

    let port = config::server_port();
    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    if config::app_env() == "production" {
        println!("> Running in production on port {}", port);
    } else {
        println!("> Running locally on port {}", port);
    }
    println!("> Swagger UI available at http://localhost:{}/swagger-ui", port);
    for route in [
        "POST   /movies",
        "GET    /movies",
        "DELETE /movies/:id",
        "POST   /movies/:id/reviews",
        "DELETE /movies/:id/reviews/:reviewId",
        "GET    /health",
    ] {
        println!(">   {}", route);
    }

    tokio::select! {
        result = axum::serve(listener, app) => {
            result?;
        }
        _ = tokio::signal::ctrl_c() => {
            println!("\n> Shutdown signal received (Ctrl+C), stopping server.");
        }
    }

    Ok(())
}
