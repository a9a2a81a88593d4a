//! quizme-client: backends for talking to a quizme server.
//!
//! Implements the `FlashcardBackend` trait over HTTP, plus an in-memory mock
//! that runs the same request handlers without a network.

pub mod error;
pub mod http;
pub mod mock;

pub use error::ClientError;
pub use http::HttpBackend;
pub use mock::MockBackend;
