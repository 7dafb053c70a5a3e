use crate::constants::{DEFAULT_SNAPSHOT_MATCHES, LOG_FILE_NAME, backfill};
use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Config {
    /// Path to the league dataset (JSON) used when --dataset is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dataset_path: Option<String>,
    /// League shown when --league is not given.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_league: Option<String>,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// Number of recent results and upcoming fixtures on a team page.
    #[serde(default = "default_snapshot_matches")]
    pub snapshot_matches: usize,
    /// Pad short team page lists with placeholder fixtures.
    #[serde(default)]
    pub backfill_placeholders: bool,
    /// Days between placeholder fixtures.
    #[serde(default = "default_backfill_interval")]
    pub backfill_interval_days: i64,
}

fn default_snapshot_matches() -> usize {
    DEFAULT_SNAPSHOT_MATCHES
}

fn default_backfill_interval() -> i64 {
    backfill::INTERVAL_DAYS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            dataset_path: None,
            default_league: None,
            log_file_path: None,
            snapshot_matches: default_snapshot_matches(),
            backfill_placeholders: false,
            backfill_interval_days: default_backfill_interval(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, defaults are used.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `MANXHIVE_DATASET` - Override dataset path
    /// - `MANXHIVE_LEAGUE` - Override default league
    /// - `MANXHIVE_LOG_FILE` - Override log file path
    /// - `MANXHIVE_SNAPSHOT_MATCHES` - Override team page list length
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded configuration
    /// * `Err(AppError)` - Error occurred during load or validation
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            Self::load_from_path(&config_path).await?
        } else {
            tracing::debug!("No config file at {config_path}, using defaults");
            Config::default()
        };

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Applies `MANXHIVE_*` environment variables on top of the current values.
    pub fn apply_env_overrides(&mut self) {
        if let Ok(dataset_path) = std::env::var("MANXHIVE_DATASET") {
            self.dataset_path = Some(dataset_path);
        }

        if let Ok(league) = std::env::var("MANXHIVE_LEAGUE") {
            self.default_league = Some(league);
        }

        if let Ok(log_file_path) = std::env::var("MANXHIVE_LOG_FILE") {
            self.log_file_path = Some(log_file_path);
        }

        if let Some(count) = std::env::var("MANXHIVE_SNAPSHOT_MATCHES")
            .ok()
            .and_then(|s| s.parse::<usize>().ok())
        {
            self.snapshot_matches = count;
        }
    }

    /// Validates the configuration settings
    ///
    /// # Returns
    /// * `Ok(())` - Configuration is valid
    /// * `Err(AppError)` - Configuration validation failed
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(self)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    ///
    /// # Notes
    /// - Shows config file location and current settings
    /// - Handles case when no config file exists
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if !Path::new(&config_path).exists() {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
            return Ok(());
        }

        let config = Config::load().await?;
        println!("\nCurrent Configuration");
        println!("────────────────────────────────────");
        println!("Config Location:");
        println!("{config_path}");
        println!("────────────────────────────────────");
        println!("Dataset:");
        println!("{}", config.dataset_path.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("Default League:");
        println!("{}", config.default_league.as_deref().unwrap_or("(not set)"));
        println!("────────────────────────────────────");
        println!("Team Page:");
        println!("{} matches per list", config.snapshot_matches);
        if config.backfill_placeholders {
            println!(
                "Placeholders every {} days",
                config.backfill_interval_days
            );
        } else {
            println!("Placeholders off");
        }
        println!("────────────────────────────────────");
        println!("Log File Location:");
        if let Some(custom_path) = &config.log_file_path {
            println!("{custom_path}");
        } else {
            println!("{log_dir}/{LOG_FILE_NAME}");
            println!("(Default location)");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// # Errors
    /// * `AppError::Config` - If the provided path has no parent directory
    /// * `AppError::Io` - If there's an I/O error creating directories or writing the file
    /// * `AppError::TomlSerialize` - If there's an error serializing the configuration
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let content = toml::to_string_pretty(self)?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;

        tracing::info!("Saved configuration to {path}");
        Ok(())
    }

    /// Loads configuration from a custom file path without environment overrides.
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_config_load_existing_file() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();

        let config_content = r#"
dataset_path = "/data/iom.json"
default_league = "premier"
log_file_path = "/custom/log/path"
snapshot_matches = 5
"#;
        tokio::fs::write(&config_path, config_content).await.unwrap();

        let config = Config::load_from_path(&config_path_str).await.unwrap();

        assert_eq!(config.dataset_path.as_deref(), Some("/data/iom.json"));
        assert_eq!(config.default_league.as_deref(), Some("premier"));
        assert_eq!(config.log_file_path, Some("/custom/log/path".to_string()));
        assert_eq!(config.snapshot_matches, 5);
        assert!(!config.backfill_placeholders);
        assert_eq!(config.backfill_interval_days, 7);
    }

    #[tokio::test]
    async fn test_config_load_empty_file_uses_defaults() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "").await.unwrap();

        let config = Config::load_from_path(&config_path.to_string_lossy())
            .await
            .unwrap();

        assert_eq!(config, Config::default());
        assert_eq!(config.snapshot_matches, DEFAULT_SNAPSHOT_MATCHES);
    }

    #[tokio::test]
    async fn test_config_load_invalid_toml() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        tokio::fs::write(&config_path, "snapshot_matches = \"three\"")
            .await
            .unwrap();

        let result = Config::load_from_path(&config_path.to_string_lossy()).await;
        assert!(matches!(result, Err(AppError::TomlDeserialize(_))));
    }

    #[tokio::test]
    async fn test_config_save_creates_directory() {
        let temp_dir = tempdir().unwrap();
        let config_dir = temp_dir.path().join("manxhive_football");
        let config_path = config_dir.join("config.toml");
        let config = Config {
            default_league: Some("premier".to_string()),
            ..Config::default()
        };
        config
            .save_to_path(&config_path.to_string_lossy())
            .await
            .unwrap();
        assert!(config_dir.exists());
        assert!(config_path.exists());
    }

    #[tokio::test]
    async fn test_config_save_and_load_roundtrip() {
        let temp_dir = tempdir().unwrap();
        let config_path = temp_dir.path().join("config.toml");
        let config_path_str = config_path.to_string_lossy();
        let original_config = Config {
            dataset_path: Some("/data/iom.json".to_string()),
            default_league: Some("premier".to_string()),
            log_file_path: None,
            snapshot_matches: 4,
            backfill_placeholders: true,
            backfill_interval_days: 14,
        };
        original_config.save_to_path(&config_path_str).await.unwrap();

        let content = tokio::fs::read_to_string(&config_path).await.unwrap();
        assert!(
            content.contains("default_league") && content.contains("premier"),
            "Content should contain default_league. Content: {content}"
        );
        assert!(
            !content.contains("log_file_path"),
            "Unset optional fields should be omitted. Content: {content}"
        );

        let loaded_config = Config::load_from_path(&config_path_str).await.unwrap();
        assert_eq!(original_config, loaded_config);
    }

    #[test]
    fn test_get_config_path() {
        let config_path = Config::get_config_path();
        assert!(config_path.contains("manxhive_football"));
        assert!(config_path.ends_with("config.toml"));
    }

    #[test]
    fn test_get_log_dir_path() {
        let log_dir_path = Config::get_log_dir_path();
        assert!(log_dir_path.contains("manxhive_football"));
        assert!(log_dir_path.ends_with("logs"));
    }

    #[test]
    #[serial]
    fn test_environment_variable_override() {
        unsafe {
            std::env::set_var("MANXHIVE_DATASET", "/env/league.json");
            std::env::set_var("MANXHIVE_LEAGUE", "division-2");
            std::env::set_var("MANXHIVE_SNAPSHOT_MATCHES", "5");
        }

        let mut config = Config {
            dataset_path: Some("/file/league.json".to_string()),
            default_league: Some("premier".to_string()),
            ..Config::default()
        };
        config.apply_env_overrides();

        assert_eq!(config.dataset_path.as_deref(), Some("/env/league.json"));
        assert_eq!(config.default_league.as_deref(), Some("division-2"));
        assert_eq!(config.snapshot_matches, 5);
        assert_eq!(config.log_file_path, None);

        unsafe {
            std::env::remove_var("MANXHIVE_DATASET");
            std::env::remove_var("MANXHIVE_LEAGUE");
            std::env::remove_var("MANXHIVE_SNAPSHOT_MATCHES");
        }
    }

    #[test]
    #[serial]
    fn test_unparseable_env_count_is_ignored() {
        unsafe {
            std::env::set_var("MANXHIVE_SNAPSHOT_MATCHES", "lots");
        }

        let mut config = Config::default();
        config.apply_env_overrides();
        assert_eq!(config.snapshot_matches, DEFAULT_SNAPSHOT_MATCHES);

        unsafe {
            std::env::remove_var("MANXHIVE_SNAPSHOT_MATCHES");
        }
    }
}
