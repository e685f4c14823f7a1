//! File logging
//!
//! The terminal belongs to the game, so logs go to a daily-rolling file.
//! `RUST_LOG` overrides the configured level.

use crate::settings::project_dirs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{InitError, RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::{EnvFilter, fmt};

pub use tracing::level_filters::LevelFilter;

const LOG_FILE_PREFIX: &str = "word_splash";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

/// Errors that can occur during logger initialization.
#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("failed to create log directory {path}: {source}")]
    CreateDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Failure when configuring the rolling file appender.
    #[error("rolling file appender error: {0}")]
    Appender(#[from] InitError),

    /// A global tracing subscriber was already installed in this process.
    #[error("tracing subscriber error: {0}")]
    Subscriber(#[from] TryInitError),
}

/// Where and how much to log
#[derive(Debug, Clone)]
pub struct LogConfig {
    pub dir: PathBuf,
    pub level: LevelFilter,
}

impl LogConfig {
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>, level: LevelFilter) -> Self {
        Self {
            dir: dir.into(),
            level,
        }
    }
}

/// `<data dir>/logs`, or `./logs` when no home directory is known
#[must_use]
pub fn default_log_dir() -> PathBuf {
    project_dirs().map_or_else(
        || PathBuf::from("logs"),
        |dirs| dirs.data_local_dir().join("logs"),
    )
}

/// Install the global subscriber
///
/// Keep the returned guard alive until exit; dropping it flushes and stops
/// the background writer.
///
/// # Errors
///
/// Returns an error if the log directory or appender cannot be created, or a
/// global subscriber is already set.
pub fn init(config: &LogConfig) -> Result<WorkerGuard, LoggingError> {
    std::fs::create_dir_all(&config.dir).map_err(|source| LoggingError::CreateDir {
        path: config.dir.clone(),
        source,
    })?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&config.dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::builder()
        .with_default_directive(config.level.into())
        .from_env_lossy();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(non_blocking)
                .with_ansi(false)
                .with_target(true),
        )
        .try_init()?;

    Ok(guard)
}
