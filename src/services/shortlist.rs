// src/services/shortlist.rs

use std::sync::Arc;

use crate::{
    error::{ServiceError, StorageError},
    models::result::ResultRecord,
    services::{csv_table, ledger::ResultLedger},
    storage::BlobStore,
};

/// Result of one derivation.
#[derive(Debug, Clone)]
pub struct Shortlist {
    pub threshold: i64,
    pub records: Vec<ResultRecord>,
    pub ledger_size: usize,
}

/// Keeps the records scoring at or above `threshold`, in ledger order.
pub fn filter_qualified(records: Vec<ResultRecord>, threshold: i64) -> Vec<ResultRecord> {
    records
        .into_iter()
        .filter(|record| record.qualifies(threshold))
        .collect()
}

/// Rebuilds the shortlist artifact from the ledger.
///
/// The artifact is recomputed in full and overwritten on every call, even
/// when no candidate qualifies, so it always reflects the latest request.
#[derive(Clone)]
pub struct ShortlistDeriver {
    ledger: ResultLedger,
    store: Arc<dyn BlobStore>,
    key: String,
}

impl ShortlistDeriver {
    pub fn new(ledger: ResultLedger, store: Arc<dyn BlobStore>, key: impl Into<String>) -> Self {
        Self {
            ledger,
            store,
            key: key.into(),
        }
    }

    pub async fn derive(&self, threshold: i64) -> Result<Shortlist, ServiceError> {
        let records = self.ledger.read_all().await?;
        let ledger_size = records.len();

        let records = filter_qualified(records, threshold);
        let bytes = csv_table::encode(&records)?;
        self.store.put(&self.key, bytes, true).await?;

        tracing::info!(
            key = %self.key,
            threshold,
            shortlisted = records.len(),
            ledger_size,
            "shortlist derived"
        );

        Ok(Shortlist {
            threshold,
            records,
            ledger_size,
        })
    }

    /// Bytes of the latest derivation, or `None` if none was ever made.
    pub async fn raw(&self) -> Result<Option<Vec<u8>>, ServiceError> {
        match self.store.get(&self.key).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(StorageError::NotFound(_)) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
