//! Mock summarization client for testing
//!
//! Returns scripted responses in sequence and records every request it
//! receives, so tests can assert on call counts and prompt order.

use async_trait::async_trait;
use std::sync::Mutex;

use crate::client::{Completion, CompletionClient, CompletionRequest};
use crate::error::{ClientError, Result};

/// A mock client with scripted responses
pub struct MockClient {
    responses: Vec<String>,
    requests: Mutex<Vec<CompletionRequest>>,
    fail_with: Option<ClientError>,
}

impl MockClient {
    /// Create a client that returns the given responses in order,
    /// repeating the last one once the script runs out.
    pub fn scripted(responses: &[&str]) -> Self {
        Self {
            responses: responses.iter().map(|s| s.to_string()).collect(),
            requests: Mutex::new(Vec::new()),
            fail_with: None,
        }
    }

    /// Create a client that always returns the same response
    pub fn always(response: &str) -> Self {
        Self::scripted(&[response])
    }

    /// Create a client that always fails with the given error
    pub fn always_fails(error: ClientError) -> Self {
        Self {
            responses: Vec::new(),
            requests: Mutex::new(Vec::new()),
            fail_with: Some(error),
        }
    }

    /// Number of requests received so far
    pub fn call_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Prompts of the requests received, in order
    pub fn prompts(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.prompt.clone())
            .collect()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        let call_num = {
            let mut requests = self.requests.lock().unwrap();
            requests.push(request);
            requests.len() - 1
        };

        if let Some(error) = &self.fail_with {
            return Err(clone_error(error));
        }

        let content = self
            .responses
            .get(call_num)
            .or_else(|| self.responses.last())
            .cloned()
            .unwrap_or_default();

        Ok(Completion {
            content,
            model: "mock-model".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "mock"
    }
}

/// Clone a ClientError (needed because ClientError doesn't implement Clone)
fn clone_error(err: &ClientError) -> ClientError {
    match err {
        ClientError::MissingApiKey { env_var } => ClientError::MissingApiKey {
            env_var: env_var.clone(),
        },
        ClientError::Api { message, status } => ClientError::Api {
            message: message.clone(),
            status: *status,
        },
        ClientError::MissingRequestId { header } => {
            ClientError::MissingRequestId { header: *header }
        }
        ClientError::PollTimeout { attempts } => ClientError::PollTimeout {
            attempts: *attempts,
        },
        ClientError::Config(s) => ClientError::Config(s.clone()),
        // Transport, Io and TOML errors can't be cloned; collapse them.
        other => ClientError::Config(format!("{other} (mock)")),
    }
}
