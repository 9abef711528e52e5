//! PDF to markup conversion via the external Nougat OCR tool.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tokio::process::Command;

/// Run `nougat` on the source PDF, producing `<stem>.mmd` next to it.
pub async fn pdf_to_markup(source: &Path) -> Result<PathBuf> {
    let out_dir = source
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    log::info!("Running nougat on {}", source.display());
    let status = Command::new("nougat")
        .arg(source)
        .arg("-o")
        .arg(out_dir)
        .status()
        .await
        .context("Failed to run nougat; is it installed and on PATH?")?;

    if !status.success() {
        bail!("nougat exited with {status}");
    }

    let mmd = source.with_extension("mmd");
    if !mmd.exists() {
        bail!("nougat produced no markup file at {}", mmd.display());
    }

    Ok(mmd)
}
