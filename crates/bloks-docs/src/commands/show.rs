//! Print the normalized site config.

use std::path::Path;

use anyhow::Result;
use bloks_config::ConfigFormat;

use super::load_config;

/// Run the show command, returning the serialized config.
pub async fn run(config_path: &Path, format: ConfigFormat) -> Result<String> {
    let config = load_config(config_path).await?;

    let mut output = config.to_string_pretty(format)?;
    if !output.ends_with('\n') {
        output.push('\n');
    }

    Ok(output)
}
