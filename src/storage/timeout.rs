// src/storage/timeout.rs

use std::time::Duration;

use async_trait::async_trait;

use super::BlobStore;
use crate::error::StorageError;

/// Bounds every call to the wrapped store. An expired call is reported as
/// `StorageError::Unavailable`; the underlying operation is not retried.
pub struct TimeoutBlobStore<S> {
    inner: S,
    limit: Duration,
}

impl<S> TimeoutBlobStore<S> {
    pub fn new(inner: S, limit: Duration) -> Self {
        Self { inner, limit }
    }
}

impl<S> TimeoutBlobStore<S> {
    async fn bounded<T>(
        &self,
        op: &str,
        key: &str,
        fut: impl Future<Output = Result<T, StorageError>>,
    ) -> Result<T, StorageError> {
        match tokio::time::timeout(self.limit, fut).await {
            Ok(result) => result,
            Err(_) => {
                tracing::warn!(
                    op,
                    key,
                    limit_ms = self.limit.as_millis() as u64,
                    "storage call timed out"
                );
                Err(StorageError::Unavailable(format!(
                    "{} {} timed out after {:?}",
                    op, key, self.limit
                )))
            }
        }
    }
}

#[async_trait]
impl<S: BlobStore> BlobStore for TimeoutBlobStore<S> {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        self.bounded("get", key, self.inner.get(key)).await
    }

    async fn put(&self, key: &str, content: Vec<u8>, overwrite: bool) -> Result<(), StorageError> {
        self.bounded("put", key, self.inner.put(key, content, overwrite))
            .await
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        self.bounded("list", prefix, self.inner.list(prefix)).await
    }
}
