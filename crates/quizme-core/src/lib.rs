//! quizme-core: Flashcard store, request handlers, and practice sessions.
//!
//! This crate defines the data model, the in-memory set store and score log,
//! the per-endpoint request handlers, and the client-side practice session
//! state machine that the rest of quizme builds on.

pub mod config;
pub mod error;
pub mod handlers;
pub mod model;
pub mod parser;
pub mod practice;
pub mod scores;
pub mod store;
pub mod traits;

pub use error::{ErrorKind, FlashcardError};
pub use model::{QnA, ScoreRecord};
pub use scores::ScoreLog;
pub use store::SetStore;
