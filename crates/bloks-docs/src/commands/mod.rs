//! CLI command implementations.

pub mod check;
pub mod init;
pub mod show;
pub mod title;

use std::path::Path;

use anyhow::{Context, Result};
use bloks_config::SiteConfig;

/// Read and parse the site config at `path`.
pub async fn load_config(path: &Path) -> Result<SiteConfig> {
    let source = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read {}. Run 'bloks-docs init' first.", path.display()))?;

    let config = SiteConfig::parse_file(path, &source)
        .with_context(|| format!("Failed to parse {}", path.display()))?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[tokio::test]
    async fn rejects_unsupported_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("vocs.config.ts");
        std::fs::write(&path, "export default {}").unwrap();

        let err = load_config(&path).await.unwrap_err();

        assert!(format!("{:#}", err).contains("Unsupported config file extension"));
    }
}
