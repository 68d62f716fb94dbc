use super::game_event::format_game_event;
use super::level::LogLevel;
use crate::common::LoggerResult;
use std::sync::Arc;

/// Destination for fully rendered log lines (Hexagonal port).
///
/// Every line passed in already carries its trailing newline; implementations
/// must write it in one piece so concurrent callers never interleave records.
pub trait LogSink: Send + Sync + 'static {
    fn write_line(&self, line: &str) -> LoggerResult<()>;

    fn flush(&self) -> LoggerResult<()> {
        Ok(())
    }

    /// Release the underlying resource. Writes after close must fail.
    fn close(&self) -> LoggerResult<()> {
        self.flush()
    }
}

/// Domain-level logging port.
///
/// Only `log` is required; the leveled helpers and game events are built on it.
/// Unlike a fire-and-forget logger, emission is fallible: a lost write is surfaced.
pub trait DomainLogger: Send + Sync + 'static {
    fn log(&self, level: LogLevel, msg: &str) -> LoggerResult<()>;

    fn debug(&self, msg: &str) -> LoggerResult<()> {
        self.log(LogLevel::Debug, msg)
    }

    fn info(&self, msg: &str) -> LoggerResult<()> {
        self.log(LogLevel::Info, msg)
    }

    fn warning(&self, msg: &str) -> LoggerResult<()> {
        self.log(LogLevel::Warning, msg)
    }

    fn error(&self, msg: &str) -> LoggerResult<()> {
        self.log(LogLevel::Error, msg)
    }

    /// Emit a game event at INFO. An empty `event_type` is rejected before anything is written.
    fn log_game_event(
        &self,
        event_type: &str,
        player_id: Option<&str>,
        details: Option<&str>,
    ) -> LoggerResult<()> {
        let msg = format_game_event(event_type, player_id, details)?;
        self.info(&msg)
    }
}

pub type DynLogger = Arc<dyn DomainLogger>;
