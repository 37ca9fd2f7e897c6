//! Logging setup.
//!
//! One call to [`init_logging`] at startup installs the global subscriber:
//!
//! - **console**: compact, human-friendly, no target
//! - **file**: full metadata, no ANSI, appended to a single file that is
//!   never rotated, written through a non-blocking worker
//!
//! `RUST_LOG` replaces the configured level when set. Components only emit
//! `tracing` events; nothing else touches logging state.

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;

/// Logging initialization errors.
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The configured level is not a valid filter directive.
    #[error("invalid log level '{level}': {source}")]
    InvalidLevel {
        /// The configured level.
        level: String,
        /// Parser error.
        source: tracing_subscriber::filter::ParseError,
    },

    /// The log file path does not name a file.
    #[error("log file path has no file name: {0}")]
    InvalidPath(String),

    /// The log file could not be opened.
    #[error("failed to open log file: {0}")]
    File(#[from] tracing_appender::rolling::InitError),

    /// A global subscriber is already installed.
    #[error("failed to install log subscriber: {0}")]
    Init(#[from] tracing_subscriber::util::TryInitError),
}

/// Keeps the file writer alive. Dropping it flushes and stops file output,
/// so hold it for the lifetime of the process.
#[derive(Debug)]
pub struct LoggingGuard {
    _file_guard: Option<WorkerGuard>,
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig) -> Result<LoggingGuard, LoggingError> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => {
            EnvFilter::try_new(&config.level).map_err(|source| LoggingError::InvalidLevel {
                level: config.level.clone(),
                source,
            })?
        }
    };

    let (file_layer, file_guard) = match &config.file {
        Some(path) => {
            let (dir, name) = split_log_path(path)?;
            let appender = RollingFileAppender::builder()
                .rotation(Rotation::NEVER)
                .filename_prefix(name)
                .build(dir)?;
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true)
                .with_level(true);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    let console_layer = config
        .console
        .then(|| fmt::layer().with_target(false).with_level(true).compact());

    tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init()?;

    tracing::debug!(
        level = %config.level,
        file = ?config.file,
        console = config.console,
        "Logging initialized"
    );

    Ok(LoggingGuard {
        _file_guard: file_guard,
    })
}

/// Split a log file path into its directory (`.` when bare) and file name.
fn split_log_path(path: &Path) -> Result<(PathBuf, String), LoggingError> {
    let name = path
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| LoggingError::InvalidPath(path.display().to_string()))?;

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    Ok((dir, name.to_string()))
}
