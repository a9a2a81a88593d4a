//! Shared server state.

use tokio::sync::RwLock;

use quizme_core::{ScoreLog, SetStore};

/// Shared application state: one lock per store.
#[derive(Debug, Default)]
pub struct AppState {
    pub sets: RwLock<SetStore>,
    pub scores: RwLock<ScoreLog>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Empty both stores. Used by tests.
    pub async fn reset(&self) {
        self.sets.write().await.clear();
        self.scores.write().await.clear();
    }
}
