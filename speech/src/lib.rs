//! Speech synthesis backends.

pub mod google;
pub mod mock;

use async_trait::async_trait;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpeechError {
    #[error("no text to synthesize")]
    EmptyText,

    #[error("TTS request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("TTS endpoint returned HTTP {status}")]
    Http { status: u16 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SpeechError>;

/// Options for speech synthesis.
///
/// Language and accent are fixed configuration constants for this
/// pipeline, not runtime-derived values.
#[derive(Debug, Clone)]
pub struct SpeechOptions {
    /// BCP-47-ish language code sent to the TTS service
    pub lang: &'static str,
    /// Top-level domain selecting the service's regional accent
    pub tld: &'static str,
}

impl Default for SpeechOptions {
    fn default() -> Self {
        Self {
            lang: "en",
            tld: "com",
        }
    }
}

/// Speech synthesis backend trait - all engines implement this.
#[async_trait]
pub trait SpeechSynthesizer: Send + Sync {
    /// Synthesize text to an audio file at the given path.
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let opts = SpeechOptions::default();
        assert_eq!(opts.lang, "en");
        assert_eq!(opts.tld, "com");
    }
}
