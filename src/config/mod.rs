use crate::constants::DEFAULT_AUTO_ADVANCE_MS;
use crate::error::AppError;
use crate::theme::Theme;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::get_config_path;
pub use paths::get_log_dir_path;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Persisted theme choice. Absent until the user toggles or sets one;
    /// while absent the effective theme follows the terminal preference.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<Theme>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Autoplay interval in milliseconds. Defaults to 5000 if not specified.
    #[serde(default = "default_auto_advance")]
    pub auto_advance_ms: u64,
}

/// Default autoplay interval in milliseconds
fn default_auto_advance() -> u64 {
    DEFAULT_AUTO_ADVANCE_MS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            theme: None,
            log_file_path: None,
            auto_advance_ms: default_auto_advance(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// A missing config file is not an error; defaults are used instead.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `TELEDECK_THEME` - Override theme (`dark` or `light`)
    /// - `TELEDECK_LOG_FILE` - Override log file path
    /// - `TELEDECK_AUTO_ADVANCE_MS` - Override autoplay interval in milliseconds
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or defaulted configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        Self::load_from_path(&get_config_path()).await
    }

    /// Loads configuration from an explicit path, applying environment
    /// overrides and validation. Used directly by tests.
    pub async fn load_from_path(config_path: &str) -> Result<Self, AppError> {
        let mut config = if Path::new(config_path).exists() {
            let content = fs::read_to_string(config_path).await?;
            toml::from_str(&content)?
        } else {
            Config::default()
        };

        // Override with environment variables if present
        if let Ok(theme) = std::env::var("TELEDECK_THEME") {
            config.theme = Some(theme.parse()?);
        }

        if let Ok(log_file_path) = std::env::var("TELEDECK_LOG_FILE") {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(interval) = std::env::var("TELEDECK_AUTO_ADVANCE_MS")
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.auto_advance_ms = interval;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self.auto_advance_ms, &self.log_file_path)
    }

    /// The theme to start with: the persisted choice when present,
    /// otherwise the terminal-derived preference.
    pub fn effective_theme(&self) -> Theme {
        self.theme.unwrap_or_else(Theme::detect_preferred)
    }

    /// Saves current configuration to the default config file location.
    ///
    /// # Notes
    /// - Creates config directory if it doesn't exist
    /// - Uses TOML format for storage
    pub async fn save(&self) -> Result<(), AppError> {
        self.save_to_path(&get_config_path()).await
    }

    /// Saves current configuration to a specific path. Used directly by tests.
    pub async fn save_to_path(&self, config_path: &str) -> Result<(), AppError> {
        if let Some(parent) = Path::new(config_path).parent() {
            fs::create_dir_all(parent).await?;
        }

        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(config_path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        Ok(())
    }

    /// Prints the current configuration to stdout for `--list-config`.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let config = Config::load().await?;

        println!("Config file: {config_path}");
        match config.theme {
            Some(theme) => println!("Theme: {theme}"),
            None => println!(
                "Theme: (not set, using terminal preference: {})",
                Theme::detect_preferred()
            ),
        }
        println!("Auto-advance interval: {} ms", config.auto_advance_ms);
        match &config.log_file_path {
            Some(path) => println!("Log file: {path}"),
            None => println!("Log file: (default location)"),
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file_yields_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nope.toml");
        let config = Config::load_from_path(path.to_str().unwrap()).await.unwrap();
        assert_eq!(config.theme, None);
        assert_eq!(config.auto_advance_ms, DEFAULT_AUTO_ADVANCE_MS);
    }

    #[tokio::test]
    async fn test_save_and_reload_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_str().unwrap();

        let config = Config {
            theme: Some(Theme::Light),
            log_file_path: Some("/tmp/teledeck.log".to_string()),
            auto_advance_ms: 3000,
        };
        config.save_to_path(path_str).await.unwrap();

        let loaded = Config::load_from_path(path_str).await.unwrap();
        assert_eq!(loaded.theme, Some(Theme::Light));
        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/teledeck.log"));
        assert_eq!(loaded.auto_advance_ms, 3000);
    }

    #[tokio::test]
    async fn test_invalid_interval_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        tokio::fs::write(&path, "auto_advance_ms = 10").await.unwrap();

        let result = Config::load_from_path(path.to_str().unwrap()).await;
        assert!(result.is_err());
    }

    #[test]
    fn test_absent_theme_falls_back_to_preference() {
        let config = Config::default();
        // Whatever the environment says, an explicit choice must win.
        let explicit = Config {
            theme: Some(Theme::Light),
            ..Config::default()
        };
        assert_eq!(explicit.effective_theme(), Theme::Light);
        // And the fallback must be a valid theme either way.
        let _ = config.effective_theme();
    }
}
