pub mod default_logger;
pub mod event_logger;
pub mod registry;

pub use default_logger::*;
pub use event_logger::*;
pub use registry::*;
