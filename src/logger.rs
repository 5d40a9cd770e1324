//! File logging for moodgit.
//!
//! The interactive browser owns the terminal, so log records never go to
//! stdout or stderr; when enabled they are appended to a log file instead.

use anyhow::{Context, Result};
use chrono::Local;
use log::LevelFilter;
use std::path::Path;

use crate::config::LoggingConfig;

/// Install the global logger from configuration.
///
/// Returns `false` without touching the filesystem when logging is disabled.
pub fn init(config: &LoggingConfig, log_path: &Path) -> Result<bool> {
    if !config.enabled {
        log::set_max_level(LevelFilter::Off);
        return Ok(false);
    }

    if let Some(parent) = log_path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory: {}", parent.display()))?;
    }

    dispatch(config.level_filter()?)
        .chain(fern::log_file(log_path).with_context(|| format!("Failed to open log file: {}", log_path.display()))?)
        .apply()
        .context("Logger already initialized")?;

    Ok(true)
}

/// Record layout shared by every sink
pub fn dispatch(level: LevelFilter) -> fern::Dispatch {
    fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S%.3f"),
                record.level(),
                record.target(),
                message
            ))
        })
        .level(level)
        // sqlx statement logging is noise at info level
        .level_for("sqlx", LevelFilter::Warn)
        .level_for("sea_orm", LevelFilter::Warn)
}
