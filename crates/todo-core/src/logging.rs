use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One line of the activity log: what was applied, and when.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub timestamp: DateTime<Utc>,
    pub message: String,
}

impl LogEntry {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            timestamp: Utc::now(),
            message: message.into(),
        }
    }
}

/// Anything that keeps an append-only activity log.
pub trait Loggable {
    fn add_log(&mut self, message: String);
    fn get_logs(&self) -> &[LogEntry];

    fn latest_log(&self) -> Option<&LogEntry> {
        self.get_logs().last()
    }
}
