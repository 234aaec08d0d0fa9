//! File logging.
//!
//! The terminal belongs to the UI, so tracing output goes to
//! `<log_dir>/trackezy.log`. `RUST_LOG` takes precedence over the
//! configured level.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::error::{AppError, Result};

const LOG_FILE: &str = "trackezy.log";

/// Parses `level` into a filter, letting `RUST_LOG` override it.
pub fn build_filter(level: &str) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(level)
        .map_err(|e| AppError::logging(format!("invalid log level `{level}`: {e}")))
}

/// Installs the global subscriber and returns the log file path.
pub fn init(level: &str, log_dir: &Path) -> Result<PathBuf> {
    let filter = build_filter(level)?;
    fs::create_dir_all(log_dir)?;
    let path = log_dir.join(LOG_FILE);
    let file = OpenOptions::new().create(true).append(true).open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init()
        .map_err(|e| AppError::logging(e.to_string()))?;

    tracing::info!(path = %path.display(), "logging initialized");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_garbage_level() {
        if std::env::var_os("RUST_LOG").is_some() {
            return;
        }
        assert!(matches!(build_filter("trackezy=loud"), Err(AppError::Logging(_))));
    }

    #[test]
    fn test_accepts_directive() {
        assert!(build_filter("trackezy=debug").is_ok());
    }
}
