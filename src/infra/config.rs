//! Centralized configuration (environment variables + defaults).

/// Port the HTTP server binds to.
pub fn server_port() -> u16 {
    std::env::var("PORT")
        .ok()
        .and_then(|v| v.parse::<u16>().ok())
        .unwrap_or(4004)
}

/// Path of the JSON document backing the movie collection.
pub fn catalog_path() -> String {
    std::env::var("CATALOG_PATH").unwrap_or_else(|_| "data/movies.json".to_string())
}

/// Deployment environment. Anything other than `production` keeps CORS open.
pub fn app_env() -> String {
    std::env::var("APP_ENV").unwrap_or_else(|_| "development".to_string())
}

/// Exact origin allowed by CORS in production.
pub fn frontend_url() -> Option<String> {
    std::env::var("FRONTEND_URL").ok()
}
