use crate::common::{LoggerError, LoggerResult};
use crate::domains::logger::LogSink;
use std::fs::{File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Append-only file sink.
///
/// The handle is opened once at construction and reused for every write until
/// `close` releases it. Writes go straight to the file without buffering.
pub struct FileSink {
    path: PathBuf,
    file: Mutex<Option<File>>,
}

impl FileSink {
    /// Open (or create) `path` in append mode. Fails if the path is not writable.
    pub fn open<P: Into<PathBuf>>(path: P) -> LoggerResult<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::Open {
                path: path.clone(),
                source: e,
            })?;

        tracing::debug!(path = %path.display(), "opened log file sink");
        Ok(Self {
            path,
            file: Mutex::new(Some(file)),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn is_closed(&self) -> bool {
        self.file.lock().unwrap_or_else(|p| p.into_inner()).is_none()
    }

    fn closed_error(&self) -> LoggerError {
        LoggerError::Closed {
            sink: self.path.display().to_string(),
        }
    }

    fn write_error(&self, source: std::io::Error) -> LoggerError {
        LoggerError::Write {
            path: self.path.clone(),
            source,
        }
    }
}

impl LogSink for FileSink {
    fn write_line(&self, line: &str) -> LoggerResult<()> {
        // poisoning leaves the handle usable
        let mut guard = self.file.lock().unwrap_or_else(|p| p.into_inner());
        let file = guard.as_mut().ok_or_else(|| self.closed_error())?;
        file.write_all(line.as_bytes())
            .map_err(|e| self.write_error(e))
    }

    fn flush(&self) -> LoggerResult<()> {
        let mut guard = self.file.lock().unwrap_or_else(|p| p.into_inner());
        match guard.as_mut() {
            Some(file) => file.flush().map_err(|e| self.write_error(e)),
            None => Ok(()),
        }
    }

    fn close(&self) -> LoggerResult<()> {
        let mut guard = self.file.lock().unwrap_or_else(|p| p.into_inner());
        if let Some(file) = guard.take() {
            file.sync_all().map_err(|e| self.write_error(e))?;
            tracing::debug!(path = %self.path.display(), "closed log file sink");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_file_sink_appends_to_existing_content() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("append.log");
        std::fs::write(&path, "existing\n").unwrap();

        let sink = FileSink::open(&path).unwrap();
        sink.write_line("next\n").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "existing\nnext\n");
    }

    #[test]
    fn test_file_sink_open_fails_for_missing_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("missing").join("x.log");

        assert!(matches!(FileSink::open(&path), Err(LoggerError::Open { .. })));
    }

    #[test]
    fn test_file_sink_rejects_writes_after_close() {
        let dir = tempdir().unwrap();
        let sink = FileSink::open(dir.path().join("closed.log")).unwrap();
        sink.close().unwrap();

        assert!(sink.is_closed());
        assert!(matches!(sink.write_line("late\n"), Err(LoggerError::Closed { .. })));
        // closing twice is harmless
        sink.close().unwrap();
    }

    #[test]
    fn test_file_sink_survives_poisoned_lock() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("poisoned.log");
        let sink = std::sync::Arc::new(FileSink::open(&path).unwrap());

        let holder = sink.clone();
        let _ = std::thread::spawn(move || {
            let _guard = holder.file.lock().unwrap();
            panic!("writer died holding the lock");
        })
        .join();

        assert!(sink.file.is_poisoned());
        assert!(!sink.is_closed());
        sink.write_line("still open\n").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "still open\n");
    }
}
