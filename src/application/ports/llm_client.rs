use async_trait::async_trait;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// `context` becomes the system message, `prompt` the user message.
    async fn complete(&self, prompt: &str, context: &str) -> Result<String, LlmClientError>;
}

#[derive(Debug, thiserror::Error)]
pub enum LlmClientError {
    #[error("api request failed: {0}")]
    ApiRequestFailed(String),
    #[error("rate limited")]
    RateLimited,
    #[error("request timed out")]
    Timeout,
    #[error("invalid response: {0}")]
    InvalidResponse(String),
    #[error("invalid configuration: {0}")]
    Configuration(String),
}
