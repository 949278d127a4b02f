//! File logging for the command-line front end.
//!
//! The library only emits records through the `log` macros; this module
//! installs a `fern` dispatcher that writes them to a log file.

use crate::config::LoggingConfig;
use crate::constants::{APP_NAME, LOG_FILE_NAME, LOG_TIMESTAMP_FORMAT};
use anyhow::{Context, Result};
use chrono::Utc;
use std::path::{Path, PathBuf};

/// Get the path of the log file under the platform data directory
pub fn get_log_file_path() -> Result<PathBuf> {
    dirs::data_local_dir()
        .ok_or_else(|| anyhow::anyhow!("Could not determine data directory"))
        .map(|dir| dir.join(APP_NAME).join(LOG_FILE_NAME))
}

/// Build a dispatcher writing to `path` at the configured level
pub fn build_dispatch(config: &LoggingConfig, path: &Path) -> Result<fern::Dispatch> {
    let level = config.level_filter()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }
    let file = fern::log_file(path).with_context(|| format!("Failed to open log file: {}", path.display()))?;

    Ok(fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{}] {:<5} {}: {}",
                Utc::now().format(LOG_TIMESTAMP_FORMAT),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        .chain(file))
}

/// Install the global logger when logging is enabled
///
/// Returns the log file path when a logger was installed, `None` when
/// logging is disabled.
pub fn init(config: &LoggingConfig) -> Result<Option<PathBuf>> {
    if !config.enabled {
        return Ok(None);
    }

    let path = get_log_file_path()?;
    build_dispatch(config, &path)?
        .apply()
        .context("Failed to install logger")?;

    log::info!("Logging to {}", path.display());
    Ok(Some(path))
}
