use std::sync::Arc;

use axum::extract::FromRef;

use crate::{
    config::Config,
    services::{QuizSession, QuizStore, ResultLedger, ShortlistDeriver},
    storage::BlobStore,
    utils::credentials::AdminCredential,
};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BlobStore>,
    pub config: Config,
    pub admin: Arc<AdminCredential>,
}

impl AppState {
    pub fn quizzes(&self) -> QuizStore {
        QuizStore::new(self.store.clone(), self.config.quizzes_prefix.clone())
    }

    pub fn ledger(&self) -> ResultLedger {
        ResultLedger::new(self.store.clone(), self.config.results_key.clone())
    }

    pub fn shortlist(&self) -> ShortlistDeriver {
        ShortlistDeriver::new(
            self.ledger(),
            self.store.clone(),
            self.config.shortlist_key.clone(),
        )
    }

    pub fn session(&self) -> QuizSession {
        QuizSession::new(self.quizzes(), self.ledger())
    }
}

impl FromRef<AppState> for Config {
    fn from_ref(state: &AppState) -> Self {
        state.config.clone()
    }
}

impl FromRef<AppState> for Arc<AdminCredential> {
    fn from_ref(state: &AppState) -> Self {
        state.admin.clone()
    }
}
