//! reqwest-backed client for a running quizme server.

use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::json;
use tracing::instrument;

use quizme_core::model::{
    ClearedResponse, LoadResponse, SaveResponse, SavedScoreResponse, ScoreRecord, ScoresResponse,
    SetsResponse,
};
use quizme_core::traits::FlashcardBackend;

use crate::error::ClientError;

const DEFAULT_BASE_URL: &str = "http://localhost:8088";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Talks to the `/api` endpoints of a quizme server.
pub struct HttpBackend {
    base_url: String,
    timeout_secs: u64,
    client: reqwest::Client,
}

impl HttpBackend {
    pub fn new(base_url: &str, timeout_secs: u64) -> anyhow::Result<Self> {
        let base = if base_url.is_empty() {
            DEFAULT_BASE_URL
        } else {
            base_url
        };
        let timeout_secs = if timeout_secs == 0 {
            DEFAULT_TIMEOUT_SECS
        } else {
            timeout_secs
        };

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .build()
            .map_err(|e| ClientError::NetworkError(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            base_url: base.trim_end_matches('/').to_string(),
            timeout_secs,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn transport_error(&self, e: reqwest::Error) -> ClientError {
        if e.is_timeout() {
            ClientError::Timeout(self.timeout_secs)
        } else if e.is_connect() {
            ClientError::NetworkError(format!(
                "quizme server not reachable at {}. Is it running? Start with: quizme serve",
                self.base_url
            ))
        } else {
            ClientError::NetworkError(e.to_string())
        }
    }

    async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ClientError> {
        let endpoint = self.endpoint(path);
        let url = if params.is_empty() {
            reqwest::Url::parse(&endpoint)
        } else {
            reqwest::Url::parse_with_params(&endpoint, params)
        }
        .map_err(|e| ClientError::NetworkError(format!("invalid server URL {endpoint}: {e}")))?;
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        read_json(path, response).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, ClientError> {
        let response = self
            .client
            .post(self.endpoint(path))
            .json(body)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;
        read_json(path, response).await
    }
}

/// Decode a 200 JSON body, or turn any other status into a rejection.
async fn read_json<T: DeserializeOwned>(
    path: &str,
    response: reqwest::Response,
) -> Result<T, ClientError> {
    let status = response.status().as_u16();
    if status != 200 {
        let message = response.text().await.unwrap_or_default();
        tracing::debug!(endpoint = path, status, %message, "request rejected");
        return Err(ClientError::Rejected { status, message });
    }

    response
        .json()
        .await
        .map_err(|e| ClientError::InvalidResponse {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
}

#[async_trait]
impl FlashcardBackend for HttpBackend {
    fn name(&self) -> &str {
        "http"
    }

    #[instrument(skip(self, value))]
    async fn save_set(&self, name: &str, value: &str) -> anyhow::Result<bool> {
        let body: SaveResponse = self
            .post("/api/save", &json!({"name": name, "value": value}))
            .await?;
        Ok(body.check)
    }

    #[instrument(skip(self))]
    async fn list_sets(&self) -> anyhow::Result<Vec<String>> {
        let body: SetsResponse = self.get("/api/lists", &[]).await?;
        Ok(body.sets)
    }

    #[instrument(skip(self))]
    async fn load_set(&self, name: &str) -> anyhow::Result<LoadResponse> {
        let body: LoadResponse = self.get("/api/load", &[("name", name)]).await?;
        Ok(body)
    }

    #[instrument(skip(self))]
    async fn clear_sets(&self) -> anyhow::Result<bool> {
        let body: ClearedResponse = self.get("/api/clear", &[]).await?;
        Ok(body.cleared)
    }

    #[instrument(skip(self, record), fields(set = %record.set_name))]
    async fn save_score(&self, record: &ScoreRecord) -> anyhow::Result<()> {
        let body: SavedScoreResponse = self.post("/api/saveScore", record).await?;
        if !body.savedscore {
            anyhow::bail!("server did not save the score");
        }
        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_scores(&self) -> anyhow::Result<Vec<ScoreRecord>> {
        let body: ScoresResponse = self.get("/api/listScores", &[]).await?;
        Ok(body.scores)
    }

    #[instrument(skip(self))]
    async fn clear_scores(&self) -> anyhow::Result<bool> {
        let body: ClearedResponse = self.get("/api/clearScore", &[]).await?;
        Ok(body.cleared)
    }
}
