//! Tracing subscriber setup for the binary.
//!
//! `RUST_LOG` wins over the configured level; `--debug` forces `debug`. When
//! a log directory is configured, output goes to a file named after the
//! current date (`portfolio_2026-Oct-19.log`) instead of stderr.

use anyhow::Context;
use portfolio_core::config::LoggingConfig;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

/// File name of the log for `date`.
pub fn log_file_name(date: chrono::NaiveDate) -> String {
    format!("portfolio_{}.log", date.format("%Y-%b-%d"))
}

/// Full path of today's log file inside `dir`.
pub fn log_file_path(dir: &Path) -> PathBuf {
    dir.join(log_file_name(chrono::Local::now().date_naive()))
}

/// Install the global subscriber. Returns the log file path when logging to
/// a file.
pub fn init(config: &LoggingConfig, debug: bool) -> anyhow::Result<Option<PathBuf>> {
    let default_level = if debug { "debug" } else { config.level.as_str() };
    let filter = match std::env::var("RUST_LOG") {
        Ok(_) if !debug => EnvFilter::try_from_env("RUST_LOG")?,
        _ => EnvFilter::try_new(default_level)
            .with_context(|| format!("invalid log level `{default_level}`"))?,
    };

    let Some(dir) = config.directory() else {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_env_filter(filter)
            .try_init()
            .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;
        return Ok(None);
    };

    std::fs::create_dir_all(dir)
        .with_context(|| format!("failed to create log directory {}", dir.display()))?;
    let path = log_file_path(dir);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    tracing_subscriber::fmt()
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .with_env_filter(filter)
        .try_init()
        .map_err(|err| anyhow::anyhow!("failed to install tracing subscriber: {err}"))?;
    tracing::info!(path = %path.display(), "portfolio log started");
    Ok(Some(path))
}
