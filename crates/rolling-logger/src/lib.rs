//! Rolling Logger
//!
//! Installs a `tracing` subscriber that writes to stdout and to a size-rotated
//! log file, and keeps the most recent lines in a circular buffer.
//!
//! ```no_run
//! rolling_logger::init_logger("./logs", "TodoWeb").expect("failed to init rolling logger");
//! let _ = rolling_logger::info("started");
//! ```

mod writer;

use std::path::Path;
use std::sync::OnceLock;

use thiserror::Error;
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

pub use writer::{RollingConfig, RollingWriter};

static LOGGER: OnceLock<RollingWriter> = OnceLock::new();

#[derive(Debug, Error)]
pub enum LoggerError {
    #[error("failed to prepare log file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to install subscriber: {0}")]
    Subscriber(String),
    #[error("logger already initialized")]
    AlreadyInitialized,
    #[error("logger not initialized")]
    NotInitialized,
}

/// Local wall-clock timestamps, millisecond precision
struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f"))
    }
}

/// Initialize logging with default rotation settings
pub fn init_logger(log_dir: impl AsRef<Path>, app_name: &str) -> Result<(), LoggerError> {
    init_logger_with(log_dir, app_name, RollingConfig::default())
}

/// Initialize logging.
///
/// The filter comes from `RUST_LOG` and defaults to `info`. `log` records are
/// forwarded into the same subscriber.
pub fn init_logger_with(
    log_dir: impl AsRef<Path>,
    app_name: &str,
    config: RollingConfig,
) -> Result<(), LoggerError> {
    if LOGGER.get().is_some() {
        return Err(LoggerError::AlreadyInitialized);
    }

    let writer = RollingWriter::open(log_dir.as_ref(), app_name, config)?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_timer(LocalTimer))
        .with(
            tracing_subscriber::fmt::layer()
                .with_timer(LocalTimer)
                .with_writer(writer.clone())
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| LoggerError::Subscriber(e.to_string()))?;

    let log_file = writer.active_path();
    LOGGER.set(writer).map_err(|_| LoggerError::AlreadyInitialized)?;
    tracing::info!(log_file = %log_file.display(), app = app_name, "rolling logger initialized");
    Ok(())
}

fn ensure_initialized() -> Result<(), LoggerError> {
    LOGGER.get().map(|_| ()).ok_or(LoggerError::NotInitialized)
}

pub fn info(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::info!("{}", msg);
    Ok(())
}

pub fn warn(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::warn!("{}", msg);
    Ok(())
}

pub fn error(msg: &str) -> Result<(), LoggerError> {
    ensure_initialized()?;
    log::error!("{}", msg);
    Ok(())
}

/// Most recent lines written to the log file, oldest first.
/// Empty until the logger is initialized.
pub fn recent_lines() -> Vec<String> {
    LOGGER.get().map(RollingWriter::recent_lines).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_helpers_require_init() {
        assert!(matches!(info("hello"), Err(LoggerError::NotInitialized)));
        assert!(matches!(error("hello"), Err(LoggerError::NotInitialized)));
        assert!(recent_lines().is_empty());
    }
}
