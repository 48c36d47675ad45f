//! Transcript persistence

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use tracing::info;

/// Write the literal transcript to a flat text file.
pub fn save_transcript(path: &Path, transcript: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).context("Failed to create transcript directory")?;
        }
    }

    fs::write(path, transcript)
        .with_context(|| format!("Failed to write transcript to {}", path.display()))?;

    info!("Transcript saved to {}", path.display());
    Ok(())
}
