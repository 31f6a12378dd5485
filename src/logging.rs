//! File-based logging.
//!
//! The TUI owns the terminal, so tracing output goes to
//! `~/.littleyears/logs/littleyears.log`. The filter comes from
//! `PortalConfig::log_filter` (set through `LITTLEYEARS_LOG`).

use std::fs::{self, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const APP_DIR: &str = ".littleyears";
const LOG_DIR: &str = "logs";
const LOG_FILE: &str = "littleyears.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("could not determine home directory")]
    NoHomeDir,
    #[error("could not open log file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid log filter {filter:?}: {message}")]
    InvalidFilter { filter: String, message: String },
    #[error("a global subscriber is already installed")]
    AlreadyInitialized,
}

/// `~/.littleyears/logs/littleyears.log`
pub fn default_log_path() -> Result<PathBuf, LoggingError> {
    let home = dirs::home_dir().ok_or(LoggingError::NoHomeDir)?;
    Ok(home.join(APP_DIR).join(LOG_DIR).join(LOG_FILE))
}

pub fn parse_filter(filter: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(filter).map_err(|e| LoggingError::InvalidFilter {
        filter: filter.to_string(),
        message: e.to_string(),
    })
}

/// Install the global subscriber writing to `path`, creating parent
/// directories as needed. Returns the path written to.
pub fn init_logging_at(path: &Path, filter: &str) -> Result<PathBuf, LoggingError> {
    let filter = parse_filter(filter)?;

    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).map_err(|source| LoggingError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|source| LoggingError::Io {
            path: path.to_path_buf(),
            source,
        })?;

    let fmt_layer = fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInitialized)?;

    tracing::info!(
        path = %path.display(),
        version = env!("CARGO_PKG_VERSION"),
        "logging initialized"
    );
    Ok(path.to_path_buf())
}

pub fn init_logging(filter: &str) -> Result<PathBuf, LoggingError> {
    let path = default_log_path()?;
    init_logging_at(&path, filter)
}
