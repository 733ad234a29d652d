use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;
use uuid::Uuid;

/// Writes an upload to `dir` under a collision-free name and returns that name.
/// `filename` must already be sanitized.
pub async fn store_upload(dir: &Path, filename: &str, bytes: &[u8]) -> Result<String> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory '{}'", dir.display()))?;

    let stored_as = format!("{}-{filename}", Uuid::new_v4());
    let path = dir.join(&stored_as);
    tokio::fs::write(&path, bytes)
        .await
        .with_context(|| format!("Failed to write upload '{}'", path.display()))?;

    info!("Stored upload {} ({} bytes)", path.display(), bytes.len());
    Ok(stored_as)
}
