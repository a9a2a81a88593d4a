//! quizme-server: HTTP server for the flashcard API.
//!
//! Serves seven JSON endpoints under `/api` over a shared [`AppState`].
//! Successful responses are JSON; failures are plain text with a 400 or 404
//! status.

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{header::CONTENT_TYPE, Method},
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tokio::signal;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use quizme_core::config::QuizmeConfig;

pub mod error;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use state::AppState;

/// Build the API router over `state`.
pub fn router(state: Arc<AppState>, cors: bool) -> Router {
    let mut router = Router::new()
        .route("/api/save", post(routes::save))
        .route("/api/lists", get(routes::lists))
        .route("/api/load", get(routes::load))
        .route("/api/clear", get(routes::clear))
        .route("/api/saveScore", post(routes::save_score))
        .route("/api/listScores", get(routes::list_scores))
        .route("/api/clearScore", get(routes::clear_scores))
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    if cors {
        router = router.layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
                .allow_headers([CONTENT_TYPE]),
        );
    }

    router
}

/// The quizme HTTP server.
pub struct Server {
    config: QuizmeConfig,
    state: Arc<AppState>,
}

impl Server {
    pub fn new(config: QuizmeConfig) -> Self {
        Self {
            config,
            state: Arc::new(AppState::new()),
        }
    }

    /// Shared state, for callers that want to inspect the stores.
    pub fn state(&self) -> Arc<AppState> {
        self.state.clone()
    }

    /// Bind the configured address and serve until Ctrl+C or SIGTERM.
    pub async fn run(self) -> Result<()> {
        let address = self.config.bind_addr();
        let listener = TcpListener::bind(&address)
            .await
            .with_context(|| format!("failed to bind {address}"))?;
        tracing::info!("Server listening on {address}");

        self.serve(listener, shutdown_signal()).await
    }

    /// Serve on an already-bound listener until `shutdown` completes.
    pub async fn serve(
        self,
        listener: TcpListener,
        shutdown: impl std::future::Future<Output = ()> + Send + 'static,
    ) -> Result<()> {
        let app = router(self.state, self.config.cors);

        axum::serve(listener, app)
            .with_graceful_shutdown(shutdown)
            .await
            .context("server error")?;

        tracing::info!("Server shutdown complete");
        Ok(())
    }
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
        tracing::info!("Received Ctrl+C, shutting down");
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
                tracing::info!("Received terminate signal, shutting down");
            }
            Err(e) => {
                tracing::error!("failed to install signal handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
