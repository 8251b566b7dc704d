use std::time::Duration;

use async_trait::async_trait;
use reqwest::StatusCode;
use tracing::{debug, warn};

use crate::application::ports::{CompletionClient, CompletionError};

use super::anthropic_types::{ApiErrorResponse, MessageRequest, MessageResponse};

const API_BASE_URL: &str = "https://api.anthropic.com/v1/messages";
const API_VERSION: &str = "2023-06-01";

/// HTTP client for the Anthropic Messages API.
///
/// Applies an explicit request timeout and a bounded retry with doubling
/// backoff for transient upstream statuses. Non-transient errors surface
/// immediately.
pub struct AnthropicClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
    max_retries: u32,
    base_url: String,
}

impl AnthropicClient {
    pub fn new(
        api_key: String,
        model: String,
        timeout: Duration,
        max_retries: u32,
    ) -> Result<Self, CompletionError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| CompletionError::Upstream(format!("failed to build HTTP client: {e}")))?;

        Ok(Self {
            client,
            api_key,
            model,
            max_retries,
            base_url: API_BASE_URL.to_string(),
        })
    }

    /// Overrides the base URL (for tests against a local mock server).
    pub fn with_base_url(mut self, url: String) -> Self {
        self.base_url = url;
        self
    }
}

fn is_transient(status: StatusCode) -> bool {
    matches!(status.as_u16(), 429 | 500 | 503 | 529)
}

#[async_trait]
impl CompletionClient for AnthropicClient {
    #[tracing::instrument(skip(self, prompt), fields(model = %self.model, prompt_chars = prompt.len()))]
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError> {
        if self.api_key.is_empty() {
            return Err(CompletionError::MissingCredential);
        }

        let request = MessageRequest::user_prompt(&self.model, prompt, max_tokens, temperature);
        let mut delay = Duration::from_secs(1);
        let mut last_error = None;

        for attempt in 0..=self.max_retries {
            if attempt > 0 {
                warn!(attempt, delay_ms = delay.as_millis() as u64, "retrying after transient error");
                tokio::time::sleep(delay).await;
                delay *= 2;
            }

            let response = self
                .client
                .post(&self.base_url)
                .header("x-api-key", &self.api_key)
                .header("anthropic-version", API_VERSION)
                .json(&request)
                .send()
                .await
                .map_err(|e| CompletionError::Upstream(format!("HTTP request failed: {e}")))?;

            let status = response.status();
            debug!(status = %status, attempt, "completion response received");

            if status.is_success() {
                let body = response.text().await.map_err(|e| {
                    CompletionError::Upstream(format!("failed to read response body: {e}"))
                })?;
                let parsed: MessageResponse = serde_json::from_str(&body).map_err(|e| {
                    CompletionError::InvalidResponse(format!("failed to parse API response: {e}"))
                })?;
                return Ok(parsed.first_text());
            }

            let body = response.text().await.unwrap_or_default();

            if is_transient(status) && attempt < self.max_retries {
                warn!(status = %status, body = %body, "transient error, will retry");
                last_error = Some(CompletionError::Upstream(format!(
                    "API returned {status}: {body}"
                )));
                continue;
            }

            let message = match serde_json::from_str::<ApiErrorResponse>(&body) {
                Ok(api_err) => format!(
                    "Anthropic API error ({}): {}",
                    api_err.error.type_, api_err.error.message
                ),
                Err(_) => format!("API returned {status}: {body}"),
            };
            return Err(CompletionError::Upstream(message));
        }

        Err(last_error
            .unwrap_or_else(|| CompletionError::Upstream("request failed after retries".into())))
    }
}
