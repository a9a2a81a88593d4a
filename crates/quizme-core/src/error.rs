//! Flashcard error types.
//!
//! Each variant's `Display` output is the exact plain-text body the server
//! sends back, so the message text is part of the HTTP contract.

use thiserror::Error;

/// Errors produced by the stores and request handlers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FlashcardError {
    /// A required argument was absent (or not usable as a string).
    #[error("required argument \"{0}\" was missing")]
    MissingArgument(&'static str),

    /// A required argument was present but not a string.
    #[error("required argument \"{0}\" is not a string")]
    NotAString(&'static str),

    /// A score field was absent or not a string.
    #[error("missing '{0}' parameter")]
    MissingParameter(&'static str),

    /// A line of card text had no `|` or an empty side.
    #[error("Must have a question/answer or must have a \"|\" separating front and back")]
    MalformedCard { line: usize },

    /// A set with this name is already stored.
    #[error("Name of the Set Already Exists")]
    DuplicateName(String),

    /// No set is stored under this name.
    #[error("No file under the name {0}")]
    NotFound(String),
}

/// Coarse classification used to pick a response status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    NotFound,
    Duplicate,
}

impl FlashcardError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            FlashcardError::MissingArgument(_)
            | FlashcardError::NotAString(_)
            | FlashcardError::MissingParameter(_)
            | FlashcardError::MalformedCard { .. } => ErrorKind::Validation,
            FlashcardError::DuplicateName(_) => ErrorKind::Duplicate,
            FlashcardError::NotFound(_) => ErrorKind::NotFound,
        }
    }

    /// 1-based line of card text that failed to parse, if any.
    pub fn line(&self) -> Option<usize> {
        match self {
            FlashcardError::MalformedCard { line } => Some(*line),
            _ => None,
        }
    }

    /// HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self.kind() {
            ErrorKind::Validation | ErrorKind::Duplicate => 400,
            ErrorKind::NotFound => 404,
        }
    }
}
