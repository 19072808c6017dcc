//! HTTP client for the article generation API.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::errors::ClientError;

/// Body of `POST /generate-article`.
#[derive(Debug, Clone, Serialize)]
pub struct GenerationRequest {
    pub headline: String,
    pub tone: String,
    pub length: u32,
}

/// Successful response of `POST /generate-article`.
#[derive(Debug, Clone, Deserialize)]
pub struct GenerationResult {
    pub headline: String,
    pub article: String,
    /// Kept as sent by the API; only ever displayed.
    pub generated_at: String,
    pub word_count: usize,
}

/// Thin wrapper over reqwest. One request per call, no retry, no timeout
/// beyond what the API itself enforces.
#[derive(Clone)]
pub struct ArticleClient {
    client: Client,
    base_url: String,
}

impl ArticleClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    pub async fn generate(
        &self,
        request: &GenerationRequest,
    ) -> Result<GenerationResult, ClientError> {
        let url = format!("{}/generate-article", self.base_url.trim_end_matches('/'));
        debug!(%url, tone = %request.tone, length = request.length, "Requesting article");

        let response = self.client.post(url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
