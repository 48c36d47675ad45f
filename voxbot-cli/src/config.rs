//! Configuration management

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Path to configuration file
    #[serde(skip)]
    pub config_path: PathBuf,

    /// Speech engine: "google" or "sphinx"
    pub engine: String,

    /// Recognition language code (e.g. "fr-FR", "en-US", "es-ES")
    pub language: String,

    /// API key override for the speech service (None = built-in key)
    pub api_key: Option<String>,

    /// Optional TOML rule file; built-in French rules when unset
    pub rules_path: Option<PathBuf>,

    /// Where the literal transcript is saved on request
    pub transcript_path: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            config_path: Self::default_config_path(),
            engine: "google".to_string(),
            language: "fr-FR".to_string(),
            api_key: None,
            rules_path: None,
            transcript_path: PathBuf::from("transcription.txt"),
        }
    }
}

impl AppConfig {
    /// Load configuration from file, or create default
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path();

        if config_path.exists() {
            let contents =
                std::fs::read_to_string(&config_path).context("Failed to read config file")?;

            let mut config: AppConfig =
                toml::from_str(&contents).context("Failed to parse config file")?;

            config.config_path = config_path;
            Ok(config)
        } else {
            let config = Self::default();
            config.save().context("Failed to save default config")?;
            Ok(config)
        }
    }

    /// Save configuration to file
    pub fn save(&self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(&self.config_path, contents).context("Failed to write config file")?;

        Ok(())
    }

    /// Get default config path
    fn default_config_path() -> PathBuf {
        let config_dir = if cfg!(target_os = "macos") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("com.voxbot.app")
        } else if cfg!(target_os = "windows") {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("Voxbot")
        } else {
            dirs::config_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("voxbot")
        };

        config_dir.join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.engine, "google");
        assert_eq!(config.language, "fr-FR");
        assert_eq!(config.transcript_path, PathBuf::from("transcription.txt"));
        assert!(config.api_key.is_none());
        assert!(config.rules_path.is_none());
    }

    #[test]
    fn test_parse_partial_file_fails_without_required_fields() {
        // All fields except config_path are required in the file
        let parsed: std::result::Result<AppConfig, _> = toml::from_str("engine = \"google\"");
        assert!(parsed.is_err());
    }

    #[test]
    fn test_round_trip() {
        let mut config = AppConfig::default();
        config.language = "es-ES".to_string();
        config.api_key = Some("key".to_string());

        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: AppConfig = toml::from_str(&text).unwrap();

        assert_eq!(parsed.language, "es-ES");
        assert_eq!(parsed.api_key.as_deref(), Some("key"));
        assert_eq!(parsed.engine, config.engine);
    }
}
