//! axum handlers for the `/api` endpoints.
//!
//! Each one takes the lock for its store and delegates to the matching
//! function in [`quizme_core::handlers`].

use std::sync::Arc;

use axum::{
    body::Bytes,
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use quizme_core::handlers;
use quizme_core::model::{
    ClearedResponse, LoadResponse, SaveResponse, SavedScoreResponse, ScoresResponse, SetsResponse,
};

use crate::error::ApiError;
use crate::state::AppState;

/// Decode a JSON body, treating anything that is not JSON as an empty body.
fn json_body(bytes: &Bytes) -> Value {
    serde_json::from_slice(bytes).unwrap_or_else(|e| {
        tracing::debug!("request body is not JSON: {e}");
        Value::Null
    })
}

pub async fn save(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SaveResponse>, ApiError> {
    let body = json_body(&body);
    let mut sets = state.sets.write().await;
    Ok(Json(handlers::save(&mut sets, &body)?))
}

pub async fn lists(State(state): State<Arc<AppState>>) -> Json<SetsResponse> {
    let sets = state.sets.read().await;
    Json(handlers::lists(&sets))
}

pub async fn load(
    State(state): State<Arc<AppState>>,
    Query(params): Query<Vec<(String, String)>>,
) -> Result<Json<LoadResponse>, ApiError> {
    // Repeated `name` parameters: the first one wins.
    let name = params
        .iter()
        .find(|(key, _)| key == "name")
        .map(|(_, value)| value.as_str());
    let sets = state.sets.read().await;
    Ok(Json(handlers::load(&sets, name)?))
}

pub async fn clear(State(state): State<Arc<AppState>>) -> Json<ClearedResponse> {
    let mut sets = state.sets.write().await;
    Json(handlers::clear(&mut sets))
}

pub async fn save_score(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<SavedScoreResponse>, ApiError> {
    let body = json_body(&body);
    let mut scores = state.scores.write().await;
    Ok(Json(handlers::save_score(&mut scores, &body)?))
}

pub async fn list_scores(State(state): State<Arc<AppState>>) -> Json<ScoresResponse> {
    let scores = state.scores.read().await;
    Json(handlers::list_scores(&scores))
}

pub async fn clear_scores(State(state): State<Arc<AppState>>) -> Json<ClearedResponse> {
    let mut scores = state.scores.write().await;
    Json(handlers::clear_scores(&mut scores))
}
