//! Print the document title for a page.

use std::path::Path;

use anyhow::Result;

use super::load_config;

/// Run the title command.
pub async fn run(config_path: &Path, page: &str, route: bool) -> Result<String> {
    let config = load_config(config_path).await?;

    if !route {
        return Ok(config.page_title(page));
    }

    match config.title_for_route(page) {
        Some(title) => Ok(title),
        None => anyhow::bail!("No sidebar page links to {}", page),
    }
}
