//! Reading and writing site configuration files.

use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::schema::SiteConfig;
use crate::validate::Report;

/// On-disk formats a site configuration can be written in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfigFormat {
    #[default]
    Toml,
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");

        match ext.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            _ => Err(ConfigError::UnsupportedFormat(path.to_path_buf())),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigFormat::Toml => "toml",
            ConfigFormat::Json => "json",
            ConfigFormat::Yaml => "yaml",
        }
    }
}

impl fmt::Display for ConfigFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ConfigFormat {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "toml" => Ok(ConfigFormat::Toml),
            "json" => Ok(ConfigFormat::Json),
            "yaml" | "yml" => Ok(ConfigFormat::Yaml),
            other => Err(ConfigError::UnknownFormat(other.to_string())),
        }
    }
}

/// Errors that can occur when loading or saving a site configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unsupported config file extension: {0} (expected .toml, .json, .yaml or .yml)")]
    UnsupportedFormat(PathBuf),

    #[error("Unknown config format '{0}' (expected toml, json or yaml)")]
    UnknownFormat(String),

    #[error("Invalid {format} config: {message}")]
    Parse {
        format: ConfigFormat,
        message: String,
    },

    #[error("Failed to serialize config as {format}: {message}")]
    Serialize {
        format: ConfigFormat,
        message: String,
    },

    #[error("Config validation failed:\n{0}")]
    Invalid(Report),
}

impl SiteConfig {
    /// Parse a configuration from source text.
    pub fn parse(source: &str, format: ConfigFormat) -> Result<Self, ConfigError> {
        let parse_error = |message: String| ConfigError::Parse { format, message };

        match format {
            ConfigFormat::Toml => toml::from_str(source).map_err(|e| parse_error(e.to_string())),
            ConfigFormat::Json => {
                serde_json::from_str(source).map_err(|e| parse_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::from_str(source).map_err(|e| parse_error(e.to_string()))
            }
        }
    }

    /// Parse the contents of a configuration file, picking the format from
    /// the file extension of `path`.
    pub fn parse_file(path: &Path, source: &str) -> Result<Self, ConfigError> {
        let format = ConfigFormat::from_path(path)?;
        let config = Self::parse(source, format)?;

        tracing::debug!(
            "Loaded site config '{}' from {} ({} sidebar sections)",
            config.title,
            path.display(),
            config.sidebar.len()
        );

        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        ConfigFormat::from_path(path)?;

        let source = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::parse_file(path, &source)
    }

    /// Serialize the configuration in a human-editable layout.
    pub fn to_string_pretty(&self, format: ConfigFormat) -> Result<String, ConfigError> {
        let serialize_error = |message: String| ConfigError::Serialize { format, message };

        match format {
            ConfigFormat::Toml => {
                toml::to_string_pretty(self).map_err(|e| serialize_error(e.to_string()))
            }
            ConfigFormat::Json => {
                serde_json::to_string_pretty(self).map_err(|e| serialize_error(e.to_string()))
            }
            ConfigFormat::Yaml => {
                serde_yaml::to_string(self).map_err(|e| serialize_error(e.to_string()))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    const BLOKS_TOML: &str = include_str!("../../../site/docs.toml");

    #[test]
    fn parses_checked_in_site_config() {
        let config = SiteConfig::parse(BLOKS_TOML, ConfigFormat::Toml).unwrap();

        assert_eq!(config, SiteConfig::bloks());
    }

    #[test]
    fn round_trips_every_format() {
        let config = SiteConfig::bloks();

        for format in [ConfigFormat::Toml, ConfigFormat::Json, ConfigFormat::Yaml] {
            let source = config.to_string_pretty(format).unwrap();
            let parsed = SiteConfig::parse(&source, format).unwrap();

            assert_eq!(parsed, config, "round trip through {format}");
        }
    }

    #[test]
    fn round_trips_through_json_value() {
        let config = SiteConfig::bloks();

        let value = serde_json::to_value(&config).unwrap();
        let back: SiteConfig = serde_json::from_value(value.clone()).unwrap();

        assert_eq!(back, config);
        assert_eq!(value["topNav"][0]["match"], "/docs");
        assert_eq!(value["theme"]["variables"]["color"]["border"]["dark"], "#333333");
    }

    #[test]
    fn loads_from_disk_by_extension() {
        let temp = tempdir().unwrap();
        let path = temp.path().join("docs.yaml");
        fs::write(
            &path,
            SiteConfig::bloks().to_string_pretty(ConfigFormat::Yaml).unwrap(),
        )
        .unwrap();

        let config = SiteConfig::load(&path).unwrap();

        assert_eq!(config.title, "Bloks");
    }

    #[test]
    fn parse_file_uses_extension() {
        let json = SiteConfig::bloks().to_string_pretty(ConfigFormat::Json).unwrap();

        let config = SiteConfig::parse_file(Path::new("site/docs.json"), &json).unwrap();
        assert_eq!(config, SiteConfig::bloks());

        let result = SiteConfig::parse_file(Path::new("site/docs.toml"), &json);
        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                format: ConfigFormat::Toml,
                ..
            })
        ));
    }

    #[test]
    fn rejects_unknown_extension() {
        let result = SiteConfig::load("docs.ts");

        assert!(matches!(result, Err(ConfigError::UnsupportedFormat(_))));
    }

    #[test]
    fn reports_missing_file() {
        let temp = tempdir().unwrap();

        let result = SiteConfig::load(temp.path().join("missing.toml"));

        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }

    #[test]
    fn reports_partial_theme_pair() {
        let source = "title = \"Docs\"\n[logoUrl]\nlight = \"/logo.png\"\n";

        let result = SiteConfig::parse(source, ConfigFormat::Toml);

        assert!(matches!(
            result,
            Err(ConfigError::Parse {
                format: ConfigFormat::Toml,
                ..
            })
        ));
    }

    #[test]
    fn parses_format_names() {
        assert_eq!("YML".parse::<ConfigFormat>().unwrap(), ConfigFormat::Yaml);
        assert!(matches!(
            "ts".parse::<ConfigFormat>(),
            Err(ConfigError::UnknownFormat(_))
        ));
    }
}
