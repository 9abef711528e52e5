//! Chunk summarization against a chat-completions endpoint.

use anyhow::{Context, Result};
use summary_client::{CompletionClient, CompletionRequest};

/// Returned verbatim by the model when a chunk holds only boilerplate.
pub const NOT_USEFUL: &str = "NOT USEFUL";

const TEMPERATURE: f32 = 0.2;

fn chunk_prompt(text: &str) -> String {
    format!(
        "You are an academic professor with many years of experience in summarizing \
         academic texts with detailed description of the main points. Summarize the \
         following text keeping a clear and in-depth description of the main ideas. \
         Ignore parts of the text that contain useless information such as \
         acknowledgements, list of publications, references, list of author names and \
         institutions. If the text provided only contains useless information such as \
         acknowledgements, or list of publications, or list of author names, or \
         institutions return 'NOT USEFUL'. Provide the output without linebreaks.\
         \n\nTEXT: {text}\n\nOUTPUT:"
    )
}

/// Summarize every chunk in input order and concatenate the accepted
/// pieces, each with a leading space. Responses equal to the sentinel
/// are excluded; any request failure aborts the run.
pub async fn summarize_chunks(
    client: &dyn CompletionClient,
    chunks: &[String],
) -> Result<String> {
    let mut summary = String::new();

    for (i, chunk) in chunks.iter().enumerate() {
        log::debug!("Summarizing chunk {} of {}", i + 1, chunks.len());

        let request = CompletionRequest::new(chunk_prompt(chunk)).with_temperature(TEMPERATURE);
        let completion = client
            .complete(request)
            .await
            .context("Summarization request failed")?;

        if completion.content != NOT_USEFUL {
            summary.push(' ');
            summary.push_str(&completion.content);
        }
    }

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use summary_client::{ClientError, MockClient};

    fn chunks(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|s| s.to_string()).collect()
    }

    #[tokio::test]
    async fn test_sentinel_responses_are_excluded() {
        let client = MockClient::scripted(&["first part", NOT_USEFUL, "second part"]);
        let summary = summarize_chunks(&client, &chunks(&["a", "b", "c"]))
            .await
            .unwrap();

        assert_eq!(summary, " first part second part");
        assert_eq!(client.call_count(), 3);
    }

    #[tokio::test]
    async fn test_requests_follow_chunk_order() {
        let client = MockClient::always("ok");
        summarize_chunks(&client, &chunks(&["alpha text", "beta text"]))
            .await
            .unwrap();

        let prompts = client.prompts();
        assert_eq!(prompts.len(), 2);
        assert!(prompts[0].contains("alpha text"));
        assert!(prompts[1].contains("beta text"));
    }

    #[tokio::test]
    async fn test_no_chunks_yields_empty_summary() {
        let client = MockClient::always("ok");
        let summary = summarize_chunks(&client, &[]).await.unwrap();
        assert!(summary.is_empty());
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn test_request_failure_aborts() {
        let client = MockClient::always_fails(ClientError::Api {
            message: "quota".to_string(),
            status: Some(429),
        });
        let err = summarize_chunks(&client, &chunks(&["a"])).await.unwrap_err();
        assert!(err.to_string().contains("Summarization request failed"));
    }
}
