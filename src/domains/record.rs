use super::level::LogLevel;
use chrono::{DateTime, Local};
use std::fmt;

/// Timestamp layout used in every rendered record, e.g. `2024-05-01 12:30:45,123`.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// One emission, rendered as `timestamp - identity - LEVEL - message`.
///
/// Records are built per call and dropped once both sinks have the line.
#[derive(Debug, Clone)]
pub struct LogRecord<'a> {
    pub timestamp: DateTime<Local>,
    pub identity: &'a str,
    pub level: LogLevel,
    pub message: &'a str,
}

impl<'a> LogRecord<'a> {
    pub fn new(identity: &'a str, level: LogLevel, message: &'a str) -> Self {
        Self {
            timestamp: Local::now(),
            identity,
            level,
            message,
        }
    }

    /// Full line including the trailing newline, ready for a single write.
    pub fn to_line(&self) -> String {
        format!("{}\n", self)
    }
}

impl fmt::Display for LogRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {} - {} - {}",
            self.timestamp.format(TIMESTAMP_FORMAT),
            self.identity,
            self.level,
            self.message
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_record_renders_fixed_layout() {
        let timestamp = Local.with_ymd_and_hms(2024, 5, 1, 12, 30, 45).unwrap();
        let record = LogRecord {
            timestamp,
            identity: "NeuroGames",
            level: LogLevel::Warning,
            message: "low health",
        };

        assert_eq!(
            record.to_line(),
            "2024-05-01 12:30:45,000 - NeuroGames - WARNING - low health\n"
        );
    }

    // embedded newlines are not escaped
    #[test]
    fn test_record_keeps_message_verbatim() {
        let record = LogRecord::new("id", LogLevel::Info, "a\nb");
        assert!(record.to_line().ends_with(" - id - INFO - a\nb\n"));
    }
}
