pub mod error;
pub mod event;
pub mod mode;
mod util;

pub use error::{Error, Result};
pub use event::*;
pub use mode::AgentMode;
pub use util::*;
