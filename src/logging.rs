//! File logging
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `fuelsplit.log` in the platform data directory. The level comes from the
//! `FUELSPLIT_LOG` environment variable (`off`, `error`, `warn`, `info`,
//! `debug`, `trace`) and defaults to `info`.

use anyhow::{anyhow, Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_subscriber::filter::LevelFilter;

pub const LOG_ENV_VAR: &str = "FUELSPLIT_LOG";
pub const LOG_FILE_NAME: &str = "fuelsplit.log";

/// Parses a level name, falling back to `INFO` for anything unrecognised
pub fn parse_level(value: &str) -> LevelFilter {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return LevelFilter::INFO;
    }
    trimmed.parse().unwrap_or(LevelFilter::INFO)
}

/// Directory the log file is written to
///
/// # Errors
/// Returns an error if the HOME environment variable is not set (fallback case only).
pub fn log_dir() -> Result<PathBuf> {
    if let Some(proj_dirs) = ProjectDirs::from("", "", "fuelsplit") {
        Ok(proj_dirs.data_local_dir().to_path_buf())
    } else {
        let home = std::env::var("HOME").context("HOME not set")?;
        Ok(PathBuf::from(home).join(".local/share/fuelsplit"))
    }
}

/// Installs the global tracing subscriber
///
/// # Returns
/// The log file path, or `None` when logging is switched off
///
/// # Errors
/// Returns an error if the log directory cannot be created or a subscriber
/// is already installed.
pub fn init_logging() -> Result<Option<PathBuf>> {
    let level = std::env::var(LOG_ENV_VAR)
        .map(|v| parse_level(&v))
        .unwrap_or(LevelFilter::INFO);
    if level == LevelFilter::OFF {
        return Ok(None);
    }

    let dir = log_dir()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create log directory {:?}", dir))?;

    let appender = tracing_appender::rolling::never(&dir, LOG_FILE_NAME);
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_ansi(false)
        .with_writer(appender)
        .try_init()
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(Some(dir.join(LOG_FILE_NAME)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_level_known_names() {
        assert_eq!(parse_level("debug"), LevelFilter::DEBUG);
        assert_eq!(parse_level("WARN"), LevelFilter::WARN);
        assert_eq!(parse_level(" off "), LevelFilter::OFF);
    }

    #[test]
    fn test_parse_level_defaults_to_info() {
        assert_eq!(parse_level(""), LevelFilter::INFO);
        assert_eq!(parse_level("loud"), LevelFilter::INFO);
    }
}
