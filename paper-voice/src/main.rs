//! paper-voice - Produce a spoken audio summary of a PDF paper.

mod chunker;
mod pdf;
mod summarize;

use anyhow::{Context, Result};
use clap::Parser;
use speech::google::GoogleSynthesizer;
use speech::{SpeechOptions, SpeechSynthesizer};
use std::path::{Path, PathBuf};
use summary_client::{ClientConfig, CompletionClient, OpenAiClient};

/// Spoken after every generated summary.
const TRAILER: &str = "This summary was produced using generative artificial intelligence. \
                       Thank you for listening.";

#[derive(Parser, Debug)]
#[command(name = "paper-voice")]
#[command(about = "Produce an audio summary of a PDF file.")]
#[command(version)]
struct Args {
    /// Input PDF file to be summarized
    pdf_file: PathBuf,

    /// Name of the output audio file without any audio extension
    #[arg(short, long, default_value = "summary")]
    output: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    // Historical behavior: a missing input is not an error, the run
    // just does nothing. The log line is the only change.
    if !args.pdf_file.exists() {
        log::warn!(
            "PDF file not found, nothing to do: {}",
            args.pdf_file.display()
        );
        return Ok(());
    }

    let config = ClientConfig::load().context("Failed to load client configuration")?;
    let client = OpenAiClient::from_config(&config)?;
    let synthesizer = GoogleSynthesizer::new(SpeechOptions::default());

    let text = pdf::extract_text(&args.pdf_file)?;
    let audio_path = PathBuf::from(format!("{}.mp3", args.output));

    run_pipeline(
        &text,
        &audio_path,
        &client,
        &synthesizer,
        chunker::DEFAULT_MAX_CHUNK_SIZE,
    )
    .await?;

    log::info!("Wrote {}", audio_path.display());
    Ok(())
}

/// Chunk, summarize, and speak already-extracted text.
async fn run_pipeline(
    text: &str,
    audio_path: &Path,
    client: &dyn CompletionClient,
    synthesizer: &dyn SpeechSynthesizer,
    max_chunk_size: usize,
) -> Result<()> {
    let chunks = chunker::split_chunks(text, chunker::SEPARATOR, max_chunk_size);
    log::info!("Summarizing {} chunk(s)", chunks.len());

    let summary = summarize::summarize_chunks(client, &chunks).await?;
    let final_text = format!("{summary} {TRAILER}");

    synthesizer
        .synthesize(&final_text, audio_path)
        .await
        .context("Speech synthesis failed")?;

    Ok(())
}
