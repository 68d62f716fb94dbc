use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoggerError {
    #[error("Failed to open log sink {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write log sink {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Failed to write console sink: {0}")]
    Console(#[source] io::Error),

    #[error("Failed to read log statistics from {}: {source}", path.display())]
    Stats {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Game event type must not be empty")]
    EmptyEventType,

    #[error(
        "Logger '{identity}' already writes to {}, not {}",
        existing.display(),
        requested.display()
    )]
    IdentityConflict {
        identity: String,
        existing: PathBuf,
        requested: PathBuf,
    },

    #[error("Log sink '{sink}' has been closed")]
    Closed { sink: String },

    #[error("Default logger is already initialized")]
    AlreadyInitialized,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid log level: {0}")]
    InvalidLevel(String),
}

pub type LoggerResult<T> = Result<T, LoggerError>;
