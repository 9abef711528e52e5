//! Section-by-section summarization through a single reused client.

use anyhow::{Context, Result};
use summary_client::{CompletionClient, CompletionRequest};

use crate::segment::Document;

/// Summarize every block after the first (the title/header region),
/// strictly in encounter order, appending each response with a leading
/// space. Any request failure aborts the run with no partial result.
pub async fn summarize_document(
    client: &dyn CompletionClient,
    document: &Document,
) -> Result<String> {
    let mut summary = String::new();

    for block in document.blocks().iter().skip(1) {
        log::debug!("Summarizing {:?}", block.label);

        let request =
            CompletionRequest::new(format!("Summarize the following text:\n\n{}", block.text));
        let completion = client
            .complete(request)
            .await
            .with_context(|| format!("Summarization request failed for {:?}", block.label))?;

        summary.push(' ');
        summary.push_str(&completion.content);
    }

    Ok(summary)
}
