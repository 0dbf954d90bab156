//! Structured logging infrastructure for Econvery.
//!
//! Logging is built on `tracing`. Console output goes to stderr so that
//! machine-readable results written to stdout stay clean. An optional log
//! file is written through a non-blocking appender; its worker guard lives
//! for the rest of the process unless [`shutdown`] is called.
//!
//! `RUST_LOG` overrides the configured level when set.

mod formatters;
#[cfg(test)]
mod tests;

pub use formatters::DevelopmentFormatter;

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use lazy_static::lazy_static;
use std::io::IsTerminal;
use std::path::Path;
use std::sync::Mutex;
use tracing::Level;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, MakeWriterExt};

lazy_static! {
    static ref FILE_GUARD: Mutex<Option<WorkerGuard>> = Mutex::new(None);
}

/// Error type for logging operations
#[derive(Debug)]
pub enum LogError {
    /// IO error occurred
    IoError(std::io::Error),

    /// Error parsing log level
    InvalidLogLevel(String),

    /// Error in subscriber setup
    SubscriberError(Box<dyn std::error::Error + Send + Sync>),

    /// General error
    Other(String),
}

impl From<std::io::Error> for LogError {
    fn from(err: std::io::Error) -> Self {
        LogError::IoError(err)
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for LogError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        LogError::SubscriberError(err)
    }
}

impl std::fmt::Display for LogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogError::IoError(e) => write!(f, "IO error: {}", e),
            LogError::SubscriberError(e) => write!(f, "Subscriber error: {}", e),
            LogError::InvalidLogLevel(s) => write!(f, "Invalid log level: {}", s),
            LogError::Other(s) => write!(f, "{}", s),
        }
    }
}

impl std::error::Error for LogError {}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the global logging subscriber.
///
/// Returns `Ok(())` without changes if a global subscriber is already
/// installed, and installs nothing when both console and file output are off.
pub fn init(config: &LoggingConfig) -> Result<()> {
    if tracing::dispatcher::has_been_set() {
        return Ok(());
    }

    let Some(writer) = make_writer(config)? else {
        return Ok(());
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.level.to_string()));
    let ansi = config.console && config.file.is_none() && std::io::stderr().is_terminal();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_target(true);

    match config.format {
        LogFormat::Default => builder
            .event_format(DevelopmentFormatter::new(ansi))
            .try_init()?,
        LogFormat::Json => builder
            .json()
            .with_current_span(true)
            .with_line_number(true)
            .with_thread_ids(true)
            .try_init()?,
        LogFormat::Compact => builder.compact().with_ansi(ansi).try_init()?,
        LogFormat::Pretty => builder
            .pretty()
            .with_ansi(ansi)
            .with_line_number(true)
            .with_thread_ids(true)
            .try_init()?,
    }

    tracing::debug!(level = %config.level, format = %config.format, "Logging initialized");
    Ok(())
}

/// Flush and close the log file, if one is open.
pub fn shutdown() {
    if let Ok(mut guard) = FILE_GUARD.lock() {
        guard.take();
    }
}

fn make_writer(config: &LoggingConfig) -> Result<Option<BoxMakeWriter>> {
    let writer = match (&config.file, config.console) {
        (Some(path), console) => {
            let (file, guard) = create_non_blocking_file(path)?;
            FILE_GUARD
                .lock()
                .map_err(|_| LogError::Other("log file guard lock poisoned".to_string()))?
                .replace(guard);
            if console {
                BoxMakeWriter::new(file.and(std::io::stderr))
            } else {
                BoxMakeWriter::new(file)
            }
        }
        (None, true) => BoxMakeWriter::new(std::io::stderr),
        (None, false) => return Ok(None),
    };
    Ok(Some(writer))
}

/// Create a non-blocking file writer, creating parent directories as needed.
fn create_non_blocking_file(path: impl AsRef<Path>) -> Result<(NonBlocking, WorkerGuard)> {
    let path = path.as_ref();

    let file_name = path
        .file_name()
        .ok_or_else(|| LogError::Other(format!("Not a file path: {}", path.display())))?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    if !directory.exists() {
        std::fs::create_dir_all(directory)?;
    }

    let file_appender = tracing_appender::rolling::never(directory, file_name);
    Ok(tracing_appender::non_blocking(file_appender))
}

/// Parse a log level string into a LogLevel enum.
pub fn parse_log_level(level: &str) -> Result<LogLevel> {
    level
        .parse()
        .map_err(|_| LogError::InvalidLogLevel(level.to_string()))
}

/// Convert a tracing::Level to a LogLevel enum.
pub fn level_to_log_level(level: Level) -> LogLevel {
    match level {
        Level::TRACE => LogLevel::Trace,
        Level::DEBUG => LogLevel::Debug,
        Level::INFO => LogLevel::Info,
        Level::WARN => LogLevel::Warn,
        Level::ERROR => LogLevel::Error,
    }
}

/// Convert a LogLevel to the corresponding tracing::Level.
pub fn log_level_to_level(level: LogLevel) -> Level {
    match level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    }
}
