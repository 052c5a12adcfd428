pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod result;

pub use config::AppConfig;
pub use error::TodoError;
pub use input::InputState;
pub use logging::{LogEntry, Loggable};
pub use result::TodoResult;
