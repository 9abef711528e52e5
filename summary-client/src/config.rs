use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::error::{ClientError, Result};

/// Environment variable consulted when the config carries no API key.
pub const API_KEY_ENV: &str = "SUMMARY_API_KEY";

/// Endpoint configuration shared by both summarization clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the summarization endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Model identifier sent with each request
    #[serde(default = "default_model")]
    pub model: String,

    /// API key (optional, can use env var instead)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Status-fetch URL for polling endpoints (defaults to `<base_url>/status`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status_url: Option<String>,

    /// Maximum number of status polls before giving up on an accepted job
    #[serde(default = "default_poll_max_attempts")]
    pub poll_max_attempts: u32,

    /// Delay between status polls, in milliseconds
    #[serde(default = "default_poll_interval_ms")]
    pub poll_interval_ms: u64,
}

fn default_base_url() -> String {
    "https://api.openai.com/v1".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo-0125".to_string()
}

fn default_poll_max_attempts() -> u32 {
    60
}

fn default_poll_interval_ms() -> u64 {
    2000
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            api_key: None,
            status_url: None,
            poll_max_attempts: default_poll_max_attempts(),
            poll_interval_ms: default_poll_interval_ms(),
        }
    }
}

impl ClientConfig {
    /// Load configuration from the default location
    ///
    /// Returns the defaults when no config file exists.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(&config_path)?;
        let config: ClientConfig = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the configuration file path
    pub fn config_path() -> Result<PathBuf> {
        let home =
            std::env::var("HOME").map_err(|_| ClientError::Config("HOME not set".into()))?;
        Ok(PathBuf::from(home).join(".config/paper-voice/client.toml"))
    }

    /// Resolve the API key from the config or the environment
    pub fn resolve_api_key(&self) -> Result<String> {
        if let Some(key) = &self.api_key {
            return Ok(key.clone());
        }

        std::env::var(API_KEY_ENV).map_err(|_| ClientError::MissingApiKey {
            env_var: API_KEY_ENV.to_string(),
        })
    }

    /// Status-fetch URL, derived from the base URL when not set explicitly
    pub fn status_endpoint(&self) -> String {
        self.status_url
            .clone()
            .unwrap_or_else(|| format!("{}/status", self.base_url.trim_end_matches('/')))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.model, "gpt-3.5-turbo-0125");
        assert_eq!(config.poll_max_attempts, 60);
        assert!(config.api_key.is_none());
    }

    #[test]
    fn test_parse_partial_toml() {
        let config: ClientConfig =
            toml::from_str("base_url = \"https://example.test/score\"\n").unwrap();
        assert_eq!(config.base_url, "https://example.test/score");
        assert_eq!(config.poll_interval_ms, 2000);
    }

    #[test]
    fn test_status_url_derived_from_base() {
        let config: ClientConfig =
            toml::from_str("base_url = \"https://example.test/score/\"\n").unwrap();
        assert_eq!(config.status_endpoint(), "https://example.test/score/status");
    }

    #[test]
    fn test_explicit_api_key_wins() {
        let config: ClientConfig = toml::from_str("api_key = \"k-123\"\n").unwrap();
        assert_eq!(config.resolve_api_key().unwrap(), "k-123");
    }
}
