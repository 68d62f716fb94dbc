//! Process-wide default `EventLogger` and the convenience wrappers around it.
//!
//! The instance is created once: either explicitly through `init_default_logger`
//! early in `main`, or lazily with `LoggerConfig::default()` on first use.
//! `shutdown_default_logger` is the teardown hook for orderly exit.

use super::event_logger::EventLogger;
use crate::common::{LoggerError, LoggerResult};
use crate::config::LoggerConfig;
use crate::domains::logger::DomainLogger;
use once_cell::sync::OnceCell;

static DEFAULT_LOGGER: OnceCell<EventLogger> = OnceCell::new();

/// Install the default logger with `config`. Fails if it was already created.
pub fn init_default_logger(config: &LoggerConfig) -> LoggerResult<&'static EventLogger> {
    let mut created = false;
    let logger = DEFAULT_LOGGER.get_or_try_init(|| {
        created = true;
        EventLogger::new(config)
    })?;
    if !created {
        return Err(LoggerError::AlreadyInitialized);
    }
    Ok(logger)
}

/// The default logger, created with default settings on first access.
pub fn default_logger() -> LoggerResult<&'static EventLogger> {
    DEFAULT_LOGGER.get_or_try_init(|| EventLogger::new(&LoggerConfig::default()))
}

pub fn is_default_logger_initialized() -> bool {
    DEFAULT_LOGGER.get().is_some()
}

/// Flush and close the default logger. No-op when it was never created.
pub fn shutdown_default_logger() -> LoggerResult<()> {
    match DEFAULT_LOGGER.get() {
        Some(logger) => logger.close(),
        None => Ok(()),
    }
}

pub fn log_info(message: &str) -> LoggerResult<()> {
    default_logger()?.info(message)
}

pub fn log_error(message: &str) -> LoggerResult<()> {
    default_logger()?.error(message)
}

pub fn log_game_event(
    event_type: &str,
    player_id: Option<&str>,
    details: Option<&str>,
) -> LoggerResult<()> {
    default_logger()?.log_game_event(event_type, player_id, details)
}
