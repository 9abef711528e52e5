//! Mock synthesizer for driver tests.

use async_trait::async_trait;
use std::path::Path;
use std::sync::Mutex;

use crate::{Result, SpeechSynthesizer};

/// Records the text it is asked to speak and writes a placeholder file.
#[derive(Default)]
pub struct MockSynthesizer {
    texts: Mutex<Vec<String>>,
}

impl MockSynthesizer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Texts passed to `synthesize`, in call order
    pub fn texts(&self) -> Vec<String> {
        self.texts.lock().unwrap().clone()
    }
}

#[async_trait]
impl SpeechSynthesizer for MockSynthesizer {
    async fn synthesize(&self, text: &str, output_path: &Path) -> Result<()> {
        self.texts.lock().unwrap().push(text.to_string());
        std::fs::write(output_path, text.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_records_text_and_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("x.mp3");

        let synth = MockSynthesizer::new();
        synth.synthesize("spoken words", &out).await.unwrap();

        assert_eq!(synth.texts(), vec!["spoken words"]);
        assert!(out.exists());
    }
}
