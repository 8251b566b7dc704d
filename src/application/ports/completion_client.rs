use async_trait::async_trait;

/// Seam to the hosted large-language-model API. A single prompt in, the raw
/// completion text out; everything upstream of this trait is deterministic.
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(
        &self,
        prompt: &str,
        max_tokens: u32,
        temperature: f32,
    ) -> Result<String, CompletionError>;
}

#[derive(Debug, thiserror::Error)]
pub enum CompletionError {
    #[error("api credential is not configured")]
    MissingCredential,
    #[error("upstream request failed: {0}")]
    Upstream(String),
    #[error("invalid upstream response: {0}")]
    InvalidResponse(String),
}
