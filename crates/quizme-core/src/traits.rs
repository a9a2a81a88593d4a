//! Backend trait implemented by the HTTP client and the in-memory mock.

use async_trait::async_trait;

use crate::model::{LoadResponse, ScoreRecord};

/// Everything a front end needs from a quizme server.
#[async_trait]
pub trait FlashcardBackend: Send + Sync {
    /// Human-readable backend name (e.g. "http").
    fn name(&self) -> &str;

    /// Create a set from `front|back` lines. Returns the server's `check` flag.
    async fn save_set(&self, name: &str, value: &str) -> anyhow::Result<bool>;

    /// Names of all stored sets.
    async fn list_sets(&self) -> anyhow::Result<Vec<String>>;

    /// Cards of one set.
    async fn load_set(&self, name: &str) -> anyhow::Result<LoadResponse>;

    /// Remove all sets.
    async fn clear_sets(&self) -> anyhow::Result<bool>;

    /// Record a finished practice session.
    async fn save_score(&self, record: &ScoreRecord) -> anyhow::Result<()>;

    /// All recorded scores in the order they were saved.
    async fn list_scores(&self) -> anyhow::Result<Vec<ScoreRecord>>;

    /// Remove all scores.
    async fn clear_scores(&self) -> anyhow::Result<bool>;
}
