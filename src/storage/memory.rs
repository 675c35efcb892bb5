// src/storage/memory.rs

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use super::{BlobStore, validate_key};
use crate::error::StorageError;

/// Process-local blob store. Used by tests and by ephemeral runs
/// (`STORAGE_ROOT=:memory:`). Listing is in lexicographic key order.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: RwLock<BTreeMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        validate_key(key)?;
        self.blobs
            .read()
            .await
            .get(key)
            .cloned()
            .ok_or_else(|| StorageError::NotFound(key.to_string()))
    }

    async fn put(&self, key: &str, content: Vec<u8>, overwrite: bool) -> Result<(), StorageError> {
        validate_key(key)?;
        let mut blobs = self.blobs.write().await;
        if !overwrite && blobs.contains_key(key) {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }
        blobs.insert(key.to_string(), content);
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        Ok(self
            .blobs
            .read()
            .await
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }
}
