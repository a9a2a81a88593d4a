//! In-memory backend for testing front ends without a server.

use std::sync::atomic::{AtomicU32, Ordering};

use async_trait::async_trait;
use serde_json::json;
use tokio::sync::Mutex;

use quizme_core::handlers;
use quizme_core::model::{LoadResponse, ScoreRecord};
use quizme_core::traits::FlashcardBackend;
use quizme_core::{FlashcardError, ScoreLog, SetStore};

use crate::error::ClientError;

/// Runs the real request handlers over private stores.
///
/// Handler errors come back as [`ClientError::Rejected`] with the same status
/// and message the server would send.
#[derive(Default)]
pub struct MockBackend {
    sets: Mutex<SetStore>,
    scores: Mutex<ScoreLog>,
    call_count: AtomicU32,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of trait calls made so far.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    fn record_call(&self) {
        self.call_count.fetch_add(1, Ordering::Relaxed);
    }
}

fn rejected(e: FlashcardError) -> ClientError {
    ClientError::Rejected {
        status: e.status_code(),
        message: e.to_string(),
    }
}

#[async_trait]
impl FlashcardBackend for MockBackend {
    fn name(&self) -> &str {
        "mock"
    }

    async fn save_set(&self, name: &str, value: &str) -> anyhow::Result<bool> {
        self.record_call();
        let mut sets = self.sets.lock().await;
        let body = handlers::save(&mut sets, &json!({"name": name, "value": value}))
            .map_err(rejected)?;
        Ok(body.check)
    }

    async fn list_sets(&self) -> anyhow::Result<Vec<String>> {
        self.record_call();
        Ok(handlers::lists(&*self.sets.lock().await).sets)
    }

    async fn load_set(&self, name: &str) -> anyhow::Result<LoadResponse> {
        self.record_call();
        let sets = self.sets.lock().await;
        Ok(handlers::load(&sets, Some(name)).map_err(rejected)?)
    }

    async fn clear_sets(&self) -> anyhow::Result<bool> {
        self.record_call();
        Ok(handlers::clear(&mut *self.sets.lock().await).cleared)
    }

    async fn save_score(&self, record: &ScoreRecord) -> anyhow::Result<()> {
        self.record_call();
        let body = serde_json::to_value(record)?;
        let mut scores = self.scores.lock().await;
        handlers::save_score(&mut scores, &body).map_err(rejected)?;
        Ok(())
    }

    async fn list_scores(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        self.record_call();
        Ok(handlers::list_scores(&*self.scores.lock().await).scores)
    }

    async fn clear_scores(&self) -> anyhow::Result<bool> {
        self.record_call();
        Ok(handlers::clear_scores(&mut *self.scores.lock().await).cleared)
    }
}
