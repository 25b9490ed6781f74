//! Log entry structure

use super::log_level::LogLevel;
use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// One event emitted on a channel.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogEntry {
    pub level: LogLevel,
    pub channel: String,
    pub message: String,
    pub timestamp: DateTime<Local>,
}

impl LogEntry {
    pub fn new(level: LogLevel, channel: impl Into<String>, message: impl Into<String>) -> Self {
        Self::at(Local::now(), level, channel, message)
    }

    /// Build an entry with an explicit timestamp.
    pub fn at(
        timestamp: DateTime<Local>,
        level: LogLevel,
        channel: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            level,
            channel: channel.into(),
            message: message.into(),
            timestamp,
        }
    }
}
