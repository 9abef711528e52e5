//! mmd-voice - Summarize a paper section by section and speak the result.
//!
//! The PDF is first converted to Nougat markup (`.mmd`, kept next to
//! the source), segmented into labeled blocks, and each block after the
//! title is summarized through an invoke-then-poll endpoint.

mod extract;
mod segment;
mod summarize;

use anyhow::{Context, Result};
use clap::Parser;
use speech::google::GoogleSynthesizer;
use speech::{SpeechOptions, SpeechSynthesizer};
use std::path::{Path, PathBuf};
use summary_client::{ClientConfig, CompletionClient, PollingClient};

#[derive(Parser, Debug)]
#[command(name = "mmd-voice")]
#[command(about = "Produce an audio summary of a PDF paper, section by section.")]
#[command(version)]
struct Args {
    /// Input PDF file to be summarized
    source_file: PathBuf,

    /// API key for the summarization endpoint
    api_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mmd_path = match extract::pdf_to_markup(&args.source_file).await {
        Ok(path) => path,
        Err(e) => {
            log::error!("Markup extraction failed: {e:#}");
            std::process::exit(1);
        }
    };

    let markup = std::fs::read_to_string(&mmd_path)
        .with_context(|| format!("Failed to read {}", mmd_path.display()))?;

    let config = ClientConfig::load().context("Failed to load client configuration")?;
    let client = PollingClient::from_config(&config, args.api_key);
    let synthesizer = GoogleSynthesizer::new(SpeechOptions::default());

    let audio_path = args.source_file.with_extension("mp3");
    run_pipeline(&markup, &audio_path, &client, &synthesizer).await?;

    log::info!("Wrote {}", audio_path.display());
    Ok(())
}

/// Segment the markup, summarize it block by block, and speak the
/// aggregate verbatim.
async fn run_pipeline(
    markup: &str,
    audio_path: &Path,
    client: &dyn CompletionClient,
    synthesizer: &dyn SpeechSynthesizer,
) -> Result<()> {
    let document = segment::segment(markup.lines());
    log::info!("Segmented into {} block(s)", document.blocks().len());

    let summary = summarize::summarize_document(client, &document).await?;

    synthesizer
        .synthesize(&summary, audio_path)
        .await
        .context("Speech synthesis failed")?;

    Ok(())
}
