use async_trait::async_trait;

use crate::error::Result;

/// Request to send to a summarization endpoint
#[derive(Debug, Clone)]
pub struct CompletionRequest {
    pub prompt: String,
    pub system_prompt: Option<String>,
    pub temperature: Option<f32>,
    pub top_p: Option<f32>,
    pub max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Create a request with just a user prompt.
    pub fn new(prompt: impl Into<String>) -> Self {
        Self {
            prompt: prompt.into(),
            system_prompt: None,
            temperature: None,
            top_p: None,
            max_tokens: None,
        }
    }

    /// Set the system prompt.
    pub fn with_system_prompt(mut self, system_prompt: impl Into<String>) -> Self {
        self.system_prompt = Some(system_prompt.into());
        self
    }

    /// Set the sampling temperature.
    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }
}

/// Response from a summarization endpoint
#[derive(Debug, Clone)]
pub struct Completion {
    pub content: String,
    pub model: String,
}

/// Trait for summarization clients
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Execute a completion request
    async fn complete(&self, request: CompletionRequest) -> Result<Completion>;

    /// Get the client name for display
    fn name(&self) -> &'static str;
}
