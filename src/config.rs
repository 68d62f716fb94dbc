use crate::common::{LoggerError, LoggerResult};
use crate::domains::LogLevel;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_IDENTITY: &str = "NeuroGames";
pub const DEFAULT_SINK_PATH: &str = "neurogames.log";

/// Sink configuration for an `EventLogger`.
///
/// Every field is optional in TOML:
///
/// ```toml
/// identity = "NeuroGames"
/// sink_path = "neurogames.log"
/// minimum_level = "INFO"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggerConfig {
    pub identity: String,
    pub sink_path: PathBuf,
    pub minimum_level: LogLevel,
}

impl LoggerConfig {
    pub async fn from_file<P: AsRef<Path>>(path: P) -> LoggerResult<Self> {
        let path = path.as_ref();
        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| LoggerError::Config(format!("Failed to read {}: {}", path.display(), e)))?;
        Self::from_toml_str(&content)
    }

    /// Like `from_file`, but a missing file yields the defaults.
    pub async fn load_or_default<P: AsRef<Path>>(path: P) -> LoggerResult<Self> {
        let path = path.as_ref();
        match tokio::fs::try_exists(path).await {
            Ok(true) => Self::from_file(path).await,
            Ok(false) => Ok(Self::default()),
            Err(e) => Err(LoggerError::Config(format!(
                "Failed to probe {}: {}",
                path.display(),
                e
            ))),
        }
    }

    pub fn from_toml_str(content: &str) -> LoggerResult<Self> {
        toml::from_str(content).map_err(|e| LoggerError::Config(e.to_string()))
    }

    pub fn with_identity(mut self, identity: impl Into<String>) -> Self {
        self.identity = identity.into();
        self
    }

    pub fn with_sink_path(mut self, sink_path: impl Into<PathBuf>) -> Self {
        self.sink_path = sink_path.into();
        self
    }

    pub fn with_minimum_level(mut self, level: LogLevel) -> Self {
        self.minimum_level = level;
        self
    }
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            identity: DEFAULT_IDENTITY.to_string(),
            sink_path: PathBuf::from(DEFAULT_SINK_PATH),
            minimum_level: LogLevel::Info,
        }
    }
}
