pub mod game_event;
pub mod level;
pub mod logger;
pub mod record;
pub mod stats;

pub use game_event::*;
pub use level::*;
pub use logger::*;
pub use record::*;
pub use stats::*;
