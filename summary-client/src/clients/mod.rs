//! Summarization client implementations

pub mod mock;
mod openai;
mod polling;

pub use mock::MockClient;
pub use openai::OpenAiClient;
pub use polling::PollingClient;
