use super::file_logger::FileSink;
use crate::common::LoggerResult;
use crate::domains::logger::LogSink;
use std::path::Path;

/// Fans each line out to the persistent file sink and an optional live sink.
///
/// The file is written first; a file failure aborts the call before the
/// console sees the line, so the console never shows a record the file lost.
pub struct MultiSink {
    primary: FileSink,
    secondary: Option<Box<dyn LogSink>>,
}

impl MultiSink {
    pub fn new(primary: FileSink, secondary: Option<Box<dyn LogSink>>) -> Self {
        Self { primary, secondary }
    }

    pub fn path(&self) -> &Path {
        self.primary.path()
    }

    pub fn is_closed(&self) -> bool {
        self.primary.is_closed()
    }
}

impl LogSink for MultiSink {
    fn write_line(&self, line: &str) -> LoggerResult<()> {
        self.primary.write_line(line)?;
        if let Some(sec) = &self.secondary {
            sec.write_line(line)?;
        }
        Ok(())
    }

    fn flush(&self) -> LoggerResult<()> {
        self.primary.flush()?;
        if let Some(sec) = &self.secondary {
            sec.flush()?;
        }
        Ok(())
    }

    fn close(&self) -> LoggerResult<()> {
        if let Some(sec) = &self.secondary {
            sec.close()?;
        }
        self.primary.close()
    }
}
