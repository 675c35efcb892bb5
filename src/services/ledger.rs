// src/services/ledger.rs

use std::sync::Arc;

use crate::{
    error::{ServiceError, StorageError},
    models::result::ResultRecord,
    services::csv_table,
    storage::BlobStore,
};

/// Append-only CSV table of every scored attempt, kept as a single blob.
///
/// Appends read the whole table, add one row and write the whole table back.
/// Two appends racing on the same key can lose one row (last writer wins);
/// there is no version check on the blob.
#[derive(Clone)]
pub struct ResultLedger {
    store: Arc<dyn BlobStore>,
    key: String,
}

impl ResultLedger {
    pub fn new(store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Stored bytes as-is, or `None` if nothing was ever appended.
    pub async fn raw(&self) -> Result<Option<Vec<u8>>, ServiceError> {
        match self.store.get(&self.key).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every record in append order. A missing ledger is an empty one.
    pub async fn read_all(&self) -> Result<Vec<ResultRecord>, ServiceError> {
        match self.raw().await? {
            Some(bytes) => csv_table::decode(&bytes),
            None => Ok(Vec::new()),
        }
    }

    pub async fn append(&self, record: ResultRecord) -> Result<(), ServiceError> {
        let mut records = self.read_all().await?;
        records.push(record);

        let bytes = csv_table::encode(&records)?;
        self.store.put(&self.key, bytes, true).await?;

        tracing::info!(key = %self.key, rows = records.len(), "result appended to ledger");
        Ok(())
    }
}
