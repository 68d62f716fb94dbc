pub mod console_logger;
pub mod file_logger;
pub mod multi_logger;

pub use console_logger::*;
pub use file_logger::*;
pub use multi_logger::*;
