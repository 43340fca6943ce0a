//! Validate the site config.

use std::path::Path;

use anyhow::Result;
use bloks_config::Report;

use super::load_config;

/// Run the check command.
pub async fn run(config_path: &Path, strict: bool) -> Result<Report> {
    let config = load_config(config_path).await?;
    let report = config.validate();

    for diagnostic in report.warnings() {
        tracing::warn!("{}", diagnostic);
    }
    for diagnostic in report.errors() {
        tracing::error!("{}", diagnostic);
    }

    let errors = report.errors().count();
    let warnings = report.warnings().count();

    if errors > 0 {
        anyhow::bail!(
            "{} has {} error(s) and {} warning(s)",
            config_path.display(),
            errors,
            warnings
        );
    }
    if strict && warnings > 0 {
        anyhow::bail!(
            "{} has {} warning(s) (--strict)",
            config_path.display(),
            warnings
        );
    }

    tracing::info!(
        "{} is valid: {} top nav entries, {} sidebar sections, {} pages",
        config_path.display(),
        config.top_nav.len(),
        config.sidebar.len(),
        config.sidebar_links().count()
    );

    Ok(report)
}
