//! Input-file collaborator: loads the raw command text for the engine.

use std::path::Path;

use anyhow::{Context, Result};

/// Reads the whitespace-separated direction tokens from `path` as UTF-8 text.
pub async fn read_directions(path: &Path) -> Result<String> {
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("unable to read file located at {}", path.display()))
}
