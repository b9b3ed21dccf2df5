use std::sync::Mutex;

use crate::application::ports::{LlmClient, LlmClientError};

/// Returns a fixed answer and remembers every prompt it was given.
pub struct MockLlmClient {
    answer: String,
    prompts: Mutex<Vec<String>>,
}

impl MockLlmClient {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
            prompts: Mutex::new(Vec::new()),
        }
    }

    pub fn prompts(&self) -> Vec<String> {
        self.prompts
            .lock()
            .map(|prompts| prompts.clone())
            .unwrap_or_default()
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new("Mock answer")
    }
}

#[async_trait::async_trait]
impl LlmClient for MockLlmClient {
    async fn complete(&self, prompt: &str, _context: &str) -> Result<String, LlmClientError> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        Ok(self.answer.clone())
    }
}

/// Always fails with a rate-limit error.
pub struct FailingLlmClient;

#[async_trait::async_trait]
impl LlmClient for FailingLlmClient {
    async fn complete(&self, _prompt: &str, _context: &str) -> Result<String, LlmClientError> {
        Err(LlmClientError::RateLimited)
    }
}
