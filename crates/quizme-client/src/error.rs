//! Client error types.

use thiserror::Error;

/// Errors that can occur when talking to a quizme server.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The server answered with a non-200 status and a plain-text reason.
    #[error("server rejected request (HTTP {status}): {message}")]
    Rejected { status: u16, message: String },

    /// The request timed out.
    #[error("request timed out after {0}s")]
    Timeout(u64),

    /// A network error occurred.
    #[error("network error: {0}")]
    NetworkError(String),

    /// A 200 response whose body was not the expected JSON.
    #[error("invalid response from {endpoint}: {message}")]
    InvalidResponse { endpoint: String, message: String },
}

impl ClientError {
    /// Returns `true` if the server understood the request and refused it.
    pub fn is_rejection(&self) -> bool {
        matches!(self, ClientError::Rejected { .. })
    }

    /// The server's plain-text reason, if this is a rejection.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            ClientError::Rejected { message, .. } => Some(message),
            _ => None,
        }
    }
}
