//! Configuration management for badge CLI

use anyhow::{Context, Result};
use badge::Direction;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;

/// Environment variable overriding the config file location
pub const CONFIG_ENV: &str = "BADGE_CONFIG";

#[derive(Debug, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub format: Option<OutputFormat>,
    pub direction: Option<Direction>,
}

impl Config {
    /// Get the path to the config file
    pub fn config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(CONFIG_ENV) {
            return Ok(PathBuf::from(path));
        }

        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join("badge");

        Ok(config_dir.join("config.toml"))
    }

    /// Load configuration from file, or create default if it doesn't exist
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            tracing::debug!(path = %config_path.display(), "no config file, using defaults");
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        toml::from_str(&contents).context("Failed to parse config file")
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        // Create config directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory at {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(config_path, contents)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        Ok(())
    }

    /// Output format, falling back to the configured default
    pub fn format_or(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }

    /// Conversion direction, falling back to the configured default
    pub fn direction_or(&self, requested: Option<Direction>) -> Direction {
        requested.or(self.direction).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("missing.toml")).unwrap();
        assert_eq!(config, Config::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let config = Config {
            format: Some(OutputFormat::Json),
            direction: Some(Direction::DecToHex),
        };
        config.save_to(&path).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert!(contents.contains("format = \"json\""));
        assert!(contents.contains("direction = \"dec-to-hex\""));

        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "format = \"yaml\"").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_fallbacks() {
        let empty = Config::default();
        assert_eq!(empty.format_or(None), OutputFormat::Text);
        assert_eq!(empty.direction_or(None), Direction::HexToDec);

        let config = Config {
            format: Some(OutputFormat::Json),
            direction: Some(Direction::DecToHex),
        };
        assert_eq!(config.format_or(None), OutputFormat::Json);
        assert_eq!(config.format_or(Some(OutputFormat::Text)), OutputFormat::Text);
        assert_eq!(config.direction_or(Some(Direction::HexToDec)), Direction::HexToDec);
    }

    #[test]
    fn test_config_path_resolves() {
        assert!(Config::config_path().is_ok());
    }
}
