//! Core data model types for quizme.
//!
//! These are the records stored by the server and exchanged over the wire,
//! plus the response bodies for each endpoint.

use serde::{Deserialize, Serialize};

/// One question/answer pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QnA {
    /// Front of the card.
    pub question: String,
    /// Back of the card.
    pub answer: String,
}

impl QnA {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
        }
    }
}

/// A completed practice session's result.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// Who practiced.
    pub username: String,
    /// Which set was practiced.
    #[serde(rename = "setName")]
    pub set_name: String,
    /// Pre-formatted integer percentage, e.g. "80".
    pub percent: String,
}

impl ScoreRecord {
    pub fn new(
        username: impl Into<String>,
        set_name: impl Into<String>,
        percent: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            set_name: set_name.into(),
            percent: percent.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

/// Body of a successful `/api/save`.
///
/// `check` reports whether the name already existed before insertion, so it
/// is always `false` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaveResponse {
    pub check: bool,
}

/// Body of `/api/lists`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SetsResponse {
    pub sets: Vec<String>,
}

/// Body of a successful `/api/load`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoadResponse {
    pub name: String,
    pub content: Vec<QnA>,
}

/// Body of `/api/clear` and `/api/clearScore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClearedResponse {
    pub cleared: bool,
}

/// Body of a successful `/api/saveScore`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedScoreResponse {
    pub savedscore: bool,
}

/// Body of `/api/listScores`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoresResponse {
    pub scores: Vec<ScoreRecord>,
}
