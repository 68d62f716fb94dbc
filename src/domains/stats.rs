use crate::common::{LoggerError, LoggerResult};
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

/// Point-in-time snapshot of a log file. Computed on every call, never cached.
///
/// Size, line count and modification time are read in separate steps, so a
/// concurrent writer may make them disagree slightly.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LogStats {
    pub file_size_bytes: u64,
    pub line_count: u64,
    pub last_modified: Option<DateTime<Local>>,
}

impl LogStats {
    /// Inspect `path`. A missing file yields zeroed stats; any other I/O error propagates.
    pub fn collect(path: &Path) -> LoggerResult<Self> {
        let metadata = match std::fs::metadata(path) {
            Ok(m) => m,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => return Err(stats_error(path, e)),
        };

        let file = File::open(path).map_err(|e| stats_error(path, e))?;
        let line_count = count_lines(BufReader::new(file)).map_err(|e| stats_error(path, e))?;
        let modified = metadata.modified().map_err(|e| stats_error(path, e))?;

        Ok(Self {
            file_size_bytes: metadata.len(),
            line_count,
            last_modified: Some(DateTime::<Local>::from(modified)),
        })
    }

    pub fn exists(&self) -> bool {
        self.last_modified.is_some()
    }
}

fn stats_error(path: &Path, source: io::Error) -> LoggerError {
    LoggerError::Stats {
        path: path.to_path_buf(),
        source,
    }
}

/// Counts newline-separated segments, including a trailing unterminated one.
/// Works on raw bytes so non-UTF-8 content does not fail the scan.
fn count_lines<R: BufRead>(reader: R) -> io::Result<u64> {
    let mut count = 0;
    for segment in reader.split(b'\n') {
        segment?;
        count += 1;
    }
    Ok(count)
}
