//! Environment/runtime helpers
//!
//! Sanity checks to ensure expected directories exist at startup.

use std::path::Path;

use tracing::warn;

/// Ensure the data directory exists; warn when the optional frontend directory is missing.
pub async fn ensure_env(frontend_dir: &str, data_file: &str) -> anyhow::Result<()> {
    if tokio::fs::metadata(frontend_dir).await.is_err() {
        warn!(%frontend_dir, "frontend assets directory not found; static assets may 404");
    }
    if let Some(data_dir) = Path::new(data_file).parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(data_dir)
            .await
            .map_err(|e| anyhow::anyhow!("cannot create {}: {e}", data_dir.display()))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn creates_missing_data_dir() -> anyhow::Result<()> {
        let root = std::env::temp_dir().join(format!("ledger_env_{}", uuid::Uuid::new_v4()));
        let data_file = root.join("nested").join("records.json");
        ensure_env("/nonexistent-frontend", &data_file.to_string_lossy()).await?;
        assert!(tokio::fs::metadata(root.join("nested")).await?.is_dir());
        let _ = tokio::fs::remove_dir_all(&root).await;
        Ok(())
    }

    #[tokio::test]
    async fn bare_file_name_needs_no_dir() -> anyhow::Result<()> {
        ensure_env("/nonexistent-frontend", "records.json").await
    }
}
