//! HTTP error responses.
//!
//! Rejections go out as `text/plain` with the error's `Display` text as the
//! body.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

use quizme_core::FlashcardError;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error(transparent)]
    Flashcard(#[from] FlashcardError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Flashcard(e) => {
                StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::BAD_REQUEST)
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        match &self {
            ApiError::Flashcard(e) => tracing::warn!(
                status = status.as_u16(),
                line = ?e.line(),
                "request rejected: {self}"
            ),
        }
        (status, self.to_string()).into_response()
    }
}
