pub mod app;
pub mod domain;
pub mod infra;
pub mod storage;
pub mod transport;

// Convenience re-exports (keeps call-sites clean)
pub use app::catalog_service::CatalogService;
pub use app::error::ServiceError;
pub use domain::model::{Movie, Review};
pub use storage::catalog::{CatalogStore, JsonFileStore, StoreError};
