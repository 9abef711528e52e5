//! Shared summarization client library for the paper-voice workspace
//!
//! Provides a unified interface to remote summarization endpoints:
//! - OpenAI-compatible chat completions (synchronous request/response)
//! - Invoke-then-poll inference endpoints (HTTP 202 + request-id flow)
//! - A scripted mock for tests

pub mod client;
pub mod clients;
pub mod config;
pub mod error;

pub use client::{Completion, CompletionClient, CompletionRequest};
pub use clients::{MockClient, OpenAiClient, PollingClient};
pub use config::{API_KEY_ENV, ClientConfig};
pub use error::{ClientError, Result};
