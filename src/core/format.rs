//! Line layout shared by every sink
//!
//! Each event renders as a single line:
//!
//! ```text
//! 2025-01-08 10:30:45 - app_20250108 - INFO - Request processed
//! ```

use super::error::{LoggerError, Result};
use super::log_entry::LogEntry;
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Local};

/// strftime pattern for the leading timestamp.
pub const DEFAULT_DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// `timestamp - channel - LEVEL - message` formatter.
///
/// # Examples
///
/// ```
/// use timed_logger::core::{LineFormat, LogEntry, LogLevel};
///
/// let entry = LogEntry::new(LogLevel::Warning, "jobs_20250108", "disk almost full");
/// let line = LineFormat::default().format(&entry);
/// assert!(line.ends_with(" - jobs_20250108 - WARNING - disk almost full"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LineFormat {
    date_format: String,
}

impl Default for LineFormat {
    fn default() -> Self {
        Self {
            date_format: DEFAULT_DATE_FORMAT.to_string(),
        }
    }
}

impl LineFormat {
    /// Layout with a custom timestamp pattern; rejects patterns chrono
    /// cannot render.
    pub fn new(date_format: impl Into<String>) -> Result<Self> {
        let date_format = date_format.into();
        if StrftimeItems::new(&date_format).any(|item| matches!(item, Item::Error)) {
            return Err(LoggerError::config(
                "date_format",
                format!("'{}' is not a strftime pattern", date_format),
            ));
        }
        Ok(Self { date_format })
    }

    pub fn date_format(&self) -> &str {
        &self.date_format
    }

    #[must_use]
    pub fn timestamp(&self, datetime: &DateTime<Local>) -> String {
        datetime.format(&self.date_format).to_string()
    }

    #[must_use]
    pub fn format(&self, entry: &LogEntry) -> String {
        self.format_with_level(entry, entry.level.to_str())
    }

    /// Same layout with a caller-rendered level token (used for colored output).
    #[must_use]
    pub fn format_with_level(&self, entry: &LogEntry, level: &str) -> String {
        format!(
            "{} - {} - {} - {}",
            self.timestamp(&entry.timestamp),
            entry.channel,
            level,
            entry.message
        )
    }
}
