//! Invoke-then-poll inference endpoint client
//!
//! Some managed inference endpoints accept a scoring request with HTTP
//! 202 and a request-id header, and expect the caller to fetch the
//! result from a status URL until the job leaves the in-progress state.
//! The original tooling polled in an unbounded busy loop; this client
//! bounds the wait with a configurable attempt count and inter-poll
//! delay (a visible behavior change, see DESIGN.md).

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use crate::client::{Completion, CompletionClient, CompletionRequest};
use crate::config::ClientConfig;
use crate::error::{ClientError, Result};

/// Header carrying the job identifier on an accepted (202) response.
pub const REQUEST_ID_HEADER: &str = "request-id";

/// Client for invoke-then-poll summarization endpoints
pub struct PollingClient {
    invoke_url: String,
    status_url: String,
    api_key: String,
    max_attempts: u32,
    poll_interval: Duration,
    client: Client,
}

impl PollingClient {
    /// Create a new polling client
    pub fn new(invoke_url: &str, status_url: &str, api_key: String) -> Self {
        Self {
            invoke_url: invoke_url.trim_end_matches('/').to_string(),
            status_url: status_url.trim_end_matches('/').to_string(),
            api_key,
            max_attempts: 60,
            poll_interval: Duration::from_millis(2000),
            client: Client::new(),
        }
    }

    /// Create a client from configuration with an explicit API key
    /// (the key arrives on the command line for this flow).
    pub fn from_config(config: &ClientConfig, api_key: String) -> Self {
        Self::new(&config.base_url, &config.status_endpoint(), api_key)
            .with_poll_policy(config.poll_max_attempts, config.poll_interval_ms)
    }

    /// Override the poll bound and delay
    pub fn with_poll_policy(mut self, max_attempts: u32, interval_ms: u64) -> Self {
        self.max_attempts = max_attempts;
        self.poll_interval = Duration::from_millis(interval_ms);
        self
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    async fn parse_terminal(&self, response: reqwest::Response) -> Result<Completion> {
        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(ClientError::Api {
                message,
                status: Some(status.as_u16()),
            });
        }

        let scored: ScoreResponse = response.json().await?;
        let content = scored
            .choices
            .first()
            .map(|c| c.message.content.clone())
            .unwrap_or_default();

        Ok(Completion {
            content,
            model: scored.model.unwrap_or_default(),
        })
    }
}

// Wire types

#[derive(Debug, Serialize)]
struct ScoreRequest {
    messages: Vec<Message>,
    temperature: f32,
    top_p: f32,
    max_tokens: u32,
    stream: bool,
}

#[derive(Debug, Serialize)]
struct Message {
    content: String,
    role: String,
}

#[derive(Debug, Deserialize)]
struct ScoreResponse {
    choices: Vec<Choice>,
    #[serde(default)]
    model: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: String,
}

#[async_trait]
impl CompletionClient for PollingClient {
    async fn complete(&self, request: CompletionRequest) -> Result<Completion> {
        let mut messages = Vec::new();

        if let Some(system) = &request.system_prompt {
            messages.push(Message {
                content: system.clone(),
                role: "system".to_string(),
            });
        }

        messages.push(Message {
            content: request.prompt.clone(),
            role: "user".to_string(),
        });

        let score_request = ScoreRequest {
            messages,
            temperature: request.temperature.unwrap_or(0.7),
            top_p: request.top_p.unwrap_or(1.0),
            max_tokens: request.max_tokens.unwrap_or(1024),
            stream: false,
        };

        let response = self
            .client
            .post(&self.invoke_url)
            .header("Authorization", self.bearer())
            .json(&score_request)
            .send()
            .await?;

        if response.status() != StatusCode::ACCEPTED {
            return self.parse_terminal(response).await;
        }

        // Accepted: the job runs server-side, fetch the result by id.
        let request_id = response
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .map(str::to_string)
            .ok_or(ClientError::MissingRequestId {
                header: REQUEST_ID_HEADER,
            })?;

        let poll_url = format!("{}/{}", self.status_url, request_id);
        log::debug!("Request accepted, polling {poll_url}");

        for _ in 0..self.max_attempts {
            tokio::time::sleep(self.poll_interval).await;

            let response = self
                .client
                .get(&poll_url)
                .header("Authorization", self.bearer())
                .send()
                .await?;

            if response.status() == StatusCode::ACCEPTED {
                continue;
            }

            return self.parse_terminal(response).await;
        }

        Err(ClientError::PollTimeout {
            attempts: self.max_attempts,
        })
    }

    fn name(&self) -> &'static str {
        "polling"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use serde_json::json;

    fn client(server: &MockServer) -> PollingClient {
        PollingClient::new(
            &server.url("/score"),
            &server.url("/status"),
            "test-key".into(),
        )
        .with_poll_policy(3, 1)
    }

    #[tokio::test]
    async fn test_immediate_terminal_response() {
        let server = MockServer::start_async().await;
        let invoke = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/score")
                    .header("authorization", "Bearer test-key")
                    .json_body_partial(r#"{"stream": false}"#);
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "done"}}]
                }));
            })
            .await;

        let completion = client(&server)
            .complete(CompletionRequest::new("summarize"))
            .await
            .unwrap();

        invoke.assert_async().await;
        assert_eq!(completion.content, "done");
    }

    #[tokio::test]
    async fn test_accepted_then_polled_result() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/score");
                then.status(202).header(REQUEST_ID_HEADER, "job-42");
            })
            .await;
        let status = server
            .mock_async(|when, then| {
                when.method(GET)
                    .path("/status/job-42")
                    .header("authorization", "Bearer test-key");
                then.status(200).json_body(json!({
                    "choices": [{"message": {"role": "assistant", "content": "polled"}}]
                }));
            })
            .await;

        let completion = client(&server)
            .complete(CompletionRequest::new("summarize"))
            .await
            .unwrap();

        status.assert_async().await;
        assert_eq!(completion.content, "polled");
    }

    #[tokio::test]
    async fn test_poll_bound_is_enforced() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/score");
                then.status(202).header(REQUEST_ID_HEADER, "job-7");
            })
            .await;
        let status = server
            .mock_async(|when, then| {
                when.method(GET).path("/status/job-7");
                then.status(202);
            })
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("summarize"))
            .await
            .unwrap_err();

        status.assert_hits_async(3).await;
        assert!(matches!(err, ClientError::PollTimeout { attempts: 3 }));
    }

    #[tokio::test]
    async fn test_accepted_without_request_id_is_an_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/score");
                then.status(202);
            })
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("summarize"))
            .await
            .unwrap_err();

        assert!(matches!(err, ClientError::MissingRequestId { .. }));
    }

    #[tokio::test]
    async fn test_terminal_failure_aborts() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/score");
                then.status(202).header(REQUEST_ID_HEADER, "job-9");
            })
            .await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/status/job-9");
                then.status(424).body("model error");
            })
            .await;

        let err = client(&server)
            .complete(CompletionRequest::new("summarize"))
            .await
            .unwrap_err();

        match err {
            ClientError::Api { status, .. } => assert_eq!(status, Some(424)),
            other => panic!("unexpected error: {other}"),
        }
    }
}
