//! Structured logging infrastructure for the screening engine.
//!
//! This module provides a configurable logging system based on the tracing
//! crate, supporting different output formats and log levels. In regulated
//! deployments the JSON format feeds the audit pipeline; the compact and
//! pretty formats are for interactive use.

use crate::config::{LogFormat, LogLevel, LoggingConfig};
use std::path::Path;
use tracing::Level;

/// Error type for logging operations
#[derive(Debug, thiserror::Error)]
pub enum LogError {
    /// IO error occurred
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Error in subscriber setup
    #[error("Subscriber error: {0}")]
    SubscriberError(String),
}

/// Result type for logging operations
pub type Result<T> = std::result::Result<T, LogError>;

/// Initialize the logging system with the given configuration.
pub fn init(config: &LoggingConfig) -> Result<()> {
    let level = match config.level {
        LogLevel::Trace => Level::TRACE,
        LogLevel::Debug => Level::DEBUG,
        LogLevel::Info => Level::INFO,
        LogLevel::Warn => Level::WARN,
        LogLevel::Error => Level::ERROR,
    };

    let result = match config.format {
        LogFormat::Json => init_json_logging(level, config),
        LogFormat::Compact => init_compact_logging(level, config),
        LogFormat::Pretty => init_pretty_logging(level, config),
    };

    // If the subscriber is already set, treat init as a no-op
    if let Err(LogError::SubscriberError(ref e)) = result
        && e.contains("has already been set")
    {
        return Ok(());
    }

    result
}

/// Initialize logging with JSON formatting
fn init_json_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .json()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else {
        Ok(())
    }
}

/// Initialize logging with compact formatting
fn init_compact_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .compact()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else {
        Ok(())
    }
}

/// Initialize logging with pretty formatting
fn init_pretty_logging(level: Level, config: &LoggingConfig) -> Result<()> {
    let subscriber = tracing_subscriber::fmt()
        .pretty()
        .with_max_level(level)
        .with_level(true)
        .with_target(true);

    if let Some(file_path) = &config.file {
        let writer = create_non_blocking_file(file_path)?;
        subscriber
            .with_writer(writer)
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else if config.stdout {
        subscriber
            .try_init()
            .map_err(|e| LogError::SubscriberError(e.to_string()))
    } else {
        Ok(())
    }
}

/// Create a non-blocking file writer for the given path.
///
/// The flush guard is deliberately forgotten: logging lives for the whole
/// process and the writer must outlive every subscriber handle.
fn create_non_blocking_file(path: &Path) -> Result<tracing_appender::non_blocking::NonBlocking> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)?;

    let (writer, guard) = tracing_appender::non_blocking(file);
    std::mem::forget(guard);
    Ok(writer)
}
