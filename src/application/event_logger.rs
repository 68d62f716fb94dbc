use super::registry::{global_registry, SinkRegistry};
use crate::adapters::outbound::{init_console_sink, ConsoleSink, MultiSink};
use crate::common::LoggerResult;
use crate::config::LoggerConfig;
use crate::domains::logger::{DomainLogger, LogSink};
use crate::domains::{LogLevel, LogRecord, LogStats};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Leveled logger writing every record to a log file and the console.
///
/// Loggers constructed with the same identity share one set of sinks, so each
/// emission produces exactly one file line and one console line no matter how
/// many instances exist. The minimum level is per instance.
pub struct EventLogger {
    identity: String,
    sink_path: PathBuf,
    minimum_level: LogLevel,
    sinks: Arc<MultiSink>,
    registry: &'static SinkRegistry,
}

impl EventLogger {
    /// Attach to the process-wide registry with a stderr console sink.
    pub fn new(config: &LoggerConfig) -> LoggerResult<Self> {
        Self::with_console(config, global_registry(), init_console_sink())
    }

    /// Construct against an explicit registry and console sink.
    ///
    /// `console` is dropped unused when the identity is already configured.
    pub fn with_console(
        config: &LoggerConfig,
        registry: &'static SinkRegistry,
        console: ConsoleSink,
    ) -> LoggerResult<Self> {
        let sinks = registry.attach(&config.identity, &config.sink_path, console)?;
        Ok(Self {
            identity: config.identity.clone(),
            sink_path: config.sink_path.clone(),
            minimum_level: config.minimum_level,
            sinks,
            registry,
        })
    }

    pub fn identity(&self) -> &str {
        &self.identity
    }

    pub fn sink_path(&self) -> &Path {
        &self.sink_path
    }

    pub fn minimum_level(&self) -> LogLevel {
        self.minimum_level
    }

    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.minimum_level
    }

    /// Snapshot of the sink file, read at call time.
    pub fn stats(&self) -> LoggerResult<LogStats> {
        LogStats::collect(&self.sink_path)
    }

    pub fn flush(&self) -> LoggerResult<()> {
        self.sinks.flush()
    }

    /// Flush and release the sinks, and forget the identity.
    ///
    /// Every logger sharing this identity is affected: later writes fail with
    /// `LoggerError::Closed`. A new logger with the same identity reopens the file.
    pub fn close(&self) -> LoggerResult<()> {
        self.registry.detach_sinks(&self.identity, &self.sinks);
        self.sinks.close()?;
        tracing::info!(identity = %self.identity, "event logger closed");
        Ok(())
    }
}

impl DomainLogger for EventLogger {
    fn log(&self, level: LogLevel, msg: &str) -> LoggerResult<()> {
        if !self.is_enabled(level) {
            return Ok(());
        }
        let record = LogRecord::new(&self.identity, level, msg);
        self.sinks.write_line(&record.to_line())
    }
}

impl std::fmt::Debug for EventLogger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventLogger")
            .field("identity", &self.identity)
            .field("sink_path", &self.sink_path)
            .field("minimum_level", &self.minimum_level)
            .finish()
    }
}
