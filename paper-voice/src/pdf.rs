//! PDF text extraction.

use anyhow::{Context, Result};
use std::path::Path;

/// Extract the text of every page, concatenated in page order.
pub fn extract_text(path: &Path) -> Result<String> {
    pdf_extract::extract_text(path)
        .with_context(|| format!("Failed to extract text from {}", path.display()))
}
