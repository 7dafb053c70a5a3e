use super::Config;
use crate::constants::{MAX_SNAPSHOT_MATCHES, backfill};
use crate::error::AppError;
use std::path::Path;

/// Validates the configuration settings
///
/// # Validation Rules
/// - Dataset path and default league, if provided, cannot be empty
/// - Snapshot match count must be between 1 and `MAX_SNAPSHOT_MATCHES`
/// - Backfill interval must be between 1 and `backfill::MAX_INTERVAL_DAYS` days
/// - If log file path is provided, it cannot be empty and its parent
///   directory must exist or be creatable
pub fn validate_config(config: &Config) -> Result<(), AppError> {
    if let Some(dataset_path) = &config.dataset_path
        && dataset_path.trim().is_empty()
    {
        return Err(AppError::config_error("Dataset path cannot be empty"));
    }

    if let Some(league) = &config.default_league
        && league.trim().is_empty()
    {
        return Err(AppError::config_error("Default league cannot be empty"));
    }

    if config.snapshot_matches == 0 || config.snapshot_matches > MAX_SNAPSHOT_MATCHES {
        return Err(AppError::config_error(format!(
            "Snapshot match count must be between 1 and {MAX_SNAPSHOT_MATCHES}, got {}",
            config.snapshot_matches
        )));
    }

    if !(1..=backfill::MAX_INTERVAL_DAYS).contains(&config.backfill_interval_days) {
        return Err(AppError::config_error(format!(
            "Backfill interval must be between 1 and {} days, got {}",
            backfill::MAX_INTERVAL_DAYS,
            config.backfill_interval_days
        )));
    }

    if let Some(log_path) = &config.log_file_path {
        if log_path.is_empty() {
            return Err(AppError::config_error("Log file path cannot be empty"));
        }

        if let Some(parent) = Path::new(log_path).parent()
            && !parent.as_os_str().is_empty()
            && !parent.exists()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::config_error(format!(
                    "Cannot create log directory '{}': {}",
                    parent.display(),
                    e
                ))
            })?;
        }
    }

    Ok(())
}
