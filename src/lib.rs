pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use config::LoggerConfig;

// Re-export common types
pub use common::*;

// Re-export the logging surface
pub use application::*;
pub use domains::*;
