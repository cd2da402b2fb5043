//! Flat-file implementation of the catalog store.

use crate::domain::model::Movie;
use crate::storage::catalog::store::{CatalogStore, StoreError};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Stores the whole collection as one pretty-printed JSON array document.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens a store backed by `path`, creating parent directories and
    /// seeding an empty collection when the document does not exist yet.
    pub async fn new(path: impl Into<PathBuf>) -> anyhow::Result<Self> {
        let path = path.into();
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent).await?;
            }
        }
        if !tokio::fs::try_exists(&path).await? {
            tokio::fs::write(&path, b"[]").await?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}

#[async_trait]
impl CatalogStore for JsonFileStore {
    async fn get_movies(&self) -> Result<Vec<Movie>, StoreError> {
        let raw = tokio::fs::read(&self.path)
            .await
            .map_err(|e| StoreError::Read(e.to_string()))?;
        serde_json::from_slice(&raw).map_err(|e| StoreError::Read(e.to_string()))
    }

    async fn write_movies(&self, movies: &[Movie]) -> Result<(), StoreError> {
        let raw =
            serde_json::to_vec_pretty(movies).map_err(|e| StoreError::Write(e.to_string()))?;
        // Write to a sibling temp file, then rename over the target, so a
        // reader never observes a partially written document.
        let tmp = self.tmp_path();
        tokio::fs::write(&tmp, &raw)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .map_err(|e| StoreError::Write(e.to_string()))
    }
}
