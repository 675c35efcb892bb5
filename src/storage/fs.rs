// src/storage/fs.rs

use std::{io::ErrorKind, path::PathBuf};

use async_trait::async_trait;

use super::{BlobStore, validate_key};
use crate::error::StorageError;

/// Suffix of in-flight writes. Such files are never reported by `list`.
const PARTIAL_SUFFIX: &str = ".partial";

/// Blob store backed by a local directory. Each key maps to a file under
/// `root`, with `/` in the key becoming a directory separator.
#[derive(Debug, Clone)]
pub struct FsBlobStore {
    root: PathBuf,
}

impl FsBlobStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        validate_key(key)?;
        Ok(key.split('/').fold(self.root.clone(), |path, segment| path.join(segment)))
    }
}

fn io_error(key: &str, err: std::io::Error) -> StorageError {
    match err.kind() {
        ErrorKind::NotFound => StorageError::NotFound(key.to_string()),
        _ => StorageError::Unavailable(format!("{}: {}", key, err)),
    }
}

#[async_trait]
impl BlobStore for FsBlobStore {
    async fn get(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let path = self.path_for(key)?;
        tokio::fs::read(&path).await.map_err(|e| io_error(key, e))
    }

    async fn put(&self, key: &str, content: Vec<u8>, overwrite: bool) -> Result<(), StorageError> {
        let path = self.path_for(key)?;

        if !overwrite && tokio::fs::try_exists(&path).await.map_err(|e| io_error(key, e))? {
            return Err(StorageError::AlreadyExists(key.to_string()));
        }

        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| StorageError::Unavailable(format!("{}: {}", key, e)))?;
        }

        // Each write stages into its own file; the rename swaps it in whole.
        let mut partial = path.clone().into_os_string();
        partial.push(format!(".{}{}", uuid::Uuid::new_v4().simple(), PARTIAL_SUFFIX));
        let partial = PathBuf::from(partial);

        tokio::fs::write(&partial, &content)
            .await
            .map_err(|e| StorageError::Unavailable(format!("{}: {}", key, e)))?;
        if let Err(e) = tokio::fs::rename(&partial, &path).await {
            let _ = tokio::fs::remove_file(&partial).await;
            return Err(StorageError::Unavailable(format!("{}: {}", key, e)));
        }

        tracing::debug!(key, bytes = content.len(), "blob written");
        Ok(())
    }

    async fn list(&self, prefix: &str) -> Result<Vec<String>, StorageError> {
        let mut keys = Vec::new();
        let mut pending: Vec<(PathBuf, String)> = vec![(self.root.clone(), String::new())];

        while let Some((dir, dir_key)) = pending.pop() {
            let mut entries = match tokio::fs::read_dir(&dir).await {
                Ok(entries) => entries,
                Err(e) if e.kind() == ErrorKind::NotFound => continue,
                Err(e) => return Err(StorageError::Unavailable(format!("list {}: {}", prefix, e))),
            };

            while let Some(entry) = entries
                .next_entry()
                .await
                .map_err(|e| StorageError::Unavailable(format!("list {}: {}", prefix, e)))?
            {
                let name = entry.file_name().to_string_lossy().into_owned();
                let key = if dir_key.is_empty() {
                    name.clone()
                } else {
                    format!("{}/{}", dir_key, name)
                };

                let file_type = entry
                    .file_type()
                    .await
                    .map_err(|e| StorageError::Unavailable(format!("list {}: {}", prefix, e)))?;

                if file_type.is_dir() {
                    pending.push((entry.path(), key));
                } else if !name.ends_with(PARTIAL_SUFFIX) && key.starts_with(prefix) {
                    keys.push(key);
                }
            }
        }

        Ok(keys)
    }
}
