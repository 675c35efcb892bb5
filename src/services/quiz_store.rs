// src/services/quiz_store.rs

use std::sync::Arc;

use crate::{
    error::{ServiceError, StorageError},
    models::quiz::Quiz,
    storage::BlobStore,
};

const QUIZ_EXTENSION: &str = ".json";

/// Quiz definitions stored as one JSON document per quiz under a prefix.
#[derive(Clone)]
pub struct QuizStore {
    store: Arc<dyn BlobStore>,
    prefix: String,
}

impl QuizStore {
    pub fn new(store: Arc<dyn BlobStore>, prefix: impl Into<String>) -> Self {
        let prefix: String = prefix.into();
        Self {
            store,
            prefix: prefix.trim_end_matches('/').to_string(),
        }
    }

    fn key_for(&self, name: &str) -> String {
        format!("{}/{}{}", self.prefix, name, QUIZ_EXTENSION)
    }

    /// Writes the quiz under its own name, replacing any previous version.
    pub async fn save(&self, quiz: &Quiz) -> Result<(), ServiceError> {
        let key = self.key_for(&quiz.quiz_name);
        let document = serde_json::to_vec_pretty(quiz)
            .map_err(|e| ServiceError::StorageUnavailable(format!("failed to encode quiz: {}", e)))?;

        self.store.put(&key, document, true).await?;

        tracing::info!(quiz = %quiz.quiz_name, questions = quiz.questions.len(), "quiz saved");
        Ok(())
    }

    /// Missing and unparseable documents are both reported as `QuizNotFound`.
    pub async fn load(&self, name: &str) -> Result<Quiz, ServiceError> {
        let key = self.key_for(name);
        let bytes = match self.store.get(&key).await {
            Ok(bytes) => bytes,
            Err(StorageError::NotFound(_) | StorageError::InvalidKey(_)) => {
                return Err(ServiceError::QuizNotFound(name.to_string()));
            }
            Err(e) => return Err(e.into()),
        };

        let mut quiz: Quiz = serde_json::from_slice(&bytes).map_err(|e| {
            tracing::warn!(quiz = %name, "quiz document is not valid JSON: {}", e);
            ServiceError::QuizNotFound(name.to_string())
        })?;

        if quiz.quiz_name.is_empty() {
            quiz.quiz_name = name.to_string();
        }
        Ok(quiz)
    }

    /// Names of every stored quiz, in the store's listing order.
    pub async fn list(&self) -> Result<Vec<String>, ServiceError> {
        let keys = self.store.list(&format!("{}/", self.prefix)).await?;

        Ok(keys
            .iter()
            .filter_map(|key| key.strip_suffix(QUIZ_EXTENSION))
            .filter_map(|stem| stem.rsplit('/').next())
            .filter(|name| !name.is_empty())
            .map(str::to_string)
            .collect())
    }
}
