use crate::common::{LoggerError, LoggerResult};
use crate::domains::logger::LogSink;
use std::io::{self, Write};
use std::sync::Mutex;

/// Live console sink. Writes to stderr unless another writer is injected.
pub struct ConsoleSink {
    writer: Mutex<Box<dyn Write + Send>>,
}

impl ConsoleSink {
    pub fn stderr() -> Self {
        Self::from_writer(io::stderr())
    }

    /// Route console output somewhere else, e.g. a capture buffer in tests.
    pub fn from_writer<W: Write + Send + 'static>(writer: W) -> Self {
        Self {
            writer: Mutex::new(Box::new(writer)),
        }
    }
}

impl LogSink for ConsoleSink {
    fn write_line(&self, line: &str) -> LoggerResult<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|p| p.into_inner());
        writer
            .write_all(line.as_bytes())
            .map_err(LoggerError::Console)
    }

    fn flush(&self) -> LoggerResult<()> {
        let mut writer = self.writer.lock().unwrap_or_else(|p| p.into_inner());
        writer.flush().map_err(LoggerError::Console)
    }
}

/// Initialize a stderr-backed console sink.
pub fn init_console_sink() -> ConsoleSink {
    ConsoleSink::stderr()
}
