//! Write the Bloks site config.

use std::path::Path;

use anyhow::{Context, Result};
use bloks_config::{ConfigFormat, SiteConfig};

/// Run the init command.
pub async fn run(config_path: &Path, yes: bool, format: Option<ConfigFormat>) -> Result<()> {
    tracing::info!("Initializing site config...");

    // Later commands pick the parser from the extension, so the two must agree.
    let implied = ConfigFormat::from_path(config_path)?;
    let format = format.unwrap_or(implied);
    if format != implied {
        anyhow::bail!(
            "Cannot write {} config to {}. Use a .{} path instead.",
            format,
            config_path.display(),
            format
        );
    }

    if config_path.exists() && !yes {
        tracing::warn!(
            "{} already exists. Use --yes to overwrite.",
            config_path.display()
        );
        return Ok(());
    }

    let config = SiteConfig::bloks();
    let source = config.to_string_pretty(format)?;

    if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create {}", parent.display()))?;
    }

    tokio::fs::write(config_path, source)
        .await
        .with_context(|| format!("Failed to write {}", config_path.display()))?;

    tracing::info!("Created {} ({})", config_path.display(), format);
    tracing::info!("Run 'bloks-docs check' to validate it.");

    Ok(())
}
