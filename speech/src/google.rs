//! Google Translate TTS backend.
//!
//! Uses the unauthenticated `translate_tts` endpoint, which accepts
//! only short inputs. Longer text is split at word boundaries into
//! bounded segments; the MP3 bytes of each segment are concatenated in
//! order into one output file (MP3 frames are self-contained, so plain
//! byte concatenation produces a playable stream).

use async_trait::async_trait;
use reqwest::Client;
use std::path::Path;

use crate::{Result, SpeechError, SpeechOptions, SpeechSynthesizer};

/// Maximum bytes of text per TTS request.
const MAX_SEGMENT_BYTES: usize = 200;

/// Synthesizer backed by the Google Translate TTS endpoint
pub struct GoogleSynthesizer {
    endpoint: String,
    options: SpeechOptions,
    client: Client,
}

impl GoogleSynthesizer {
    /// Create a synthesizer with the given fixed options
    pub fn new(options: SpeechOptions) -> Self {
        let endpoint = format!("https://translate.google.{}/translate_tts", options.tld);
        Self {
            endpoint,
            options,
            client: Client::new(),
        }
    }

    #[cfg(test)]
    fn with_endpoint(endpoint: String, options: SpeechOptions) -> Self {
        Self {
            endpoint,
            options,
            client: Client::new(),
        }
    }
}

/// Split text into segments of at most `max_bytes`, breaking at
/// whitespace. A single word longer than the bound is emitted alone.
fn split_segments(text: &str, max_bytes: usize) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.len() + word.len() + 1 <= max_bytes {
            current.push(' ');
            current.push_str(word);
        } else {
            segments.push(std::mem::take(&mut current));
            current = word.to_string();
        }
    }

    if !current.is_empty() {
        segments.push(current);
    }

    segments
}

#[async_trait]
impl SpeechSynthesizer for GoogleSynthesizer {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SpeechError::EmptyText);
        }

        let segments = split_segments(text, MAX_SEGMENT_BYTES);
        log::debug!("Synthesizing {} segment(s)", segments.len());

        let mut audio = Vec::new();
        for segment in &segments {
            let response = self
                .client
                .get(&self.endpoint)
                .query(&[
                    ("ie", "UTF-8"),
                    ("client", "tw-ob"),
                    ("tl", self.options.lang),
                    ("q", segment.as_str()),
                ])
                .send()
                .await?;

            let status = response.status();
            if !status.is_success() {
                return Err(SpeechError::Http {
                    status: status.as_u16(),
                });
            }

            audio.extend_from_slice(&response.bytes().await?);
        }

        std::fs::write(output_path, &audio)?;
        Ok(())
    }
}
