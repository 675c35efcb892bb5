// src/storage/mod.rs

//! Key-addressed blob storage used for quiz documents and CSV artifacts.

pub mod fs;
pub mod memory;
pub mod timeout;

use async_trait::async_trait;

use crate::error::StorageError;

pub use fs::FsBlobStore;
pub use memory::MemoryBlobStore;
pub use timeout::TimeoutBlobStore;

/// Minimal contract the services need from a blob backend.
///
/// Keys are `/`-separated relative paths such as `quizzes/dev.json`.
#[async_trait]
pub trait BlobStore: Send + Sync {
    /// Returns the full content of `key`, or `StorageError::NotFound`.
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError>;

    /// Writes `content` at `key`. With `overwrite = false` an existing key
    /// fails with `StorageError::AlreadyExists`.
    async fn put(&self, key: &str, content: Vec<u8>, overwrite: bool) -> Result<(), StorageError>;

    /// Lists every key starting with `prefix`, in backend order.
    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError>;
}

/// Rejects keys that could escape the store root or address nothing.
pub(crate) fn validate_key(key: &str) -> Result<(), StorageError> {
    let malformed = key.is_empty()
        || key.starts_with('/')
        || key.contains('\\')
        || key.split('/').any(|segment| segment.is_empty() || segment == "." || segment == "..");

    if malformed {
        return Err(StorageError::InvalidKey(key.to_string()));
    }
    Ok(())
}
