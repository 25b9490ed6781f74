//! Logger configuration
//!
//! Supplied by the embedding application; the logger never reads the
//! environment or configuration files on its own.

use super::error::Result;
use super::format::{LineFormat, DEFAULT_DATE_FORMAT};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

pub const DEFAULT_LOG_LEVEL: &str = "all";
pub const DEFAULT_LOG_DIR: &str = "logs";

fn default_log_level() -> String {
    DEFAULT_LOG_LEVEL.to_string()
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(DEFAULT_LOG_DIR)
}

fn default_date_format() -> String {
    DEFAULT_DATE_FORMAT.to_string()
}

/// Settings for one [`Logger`](crate::Logger).
///
/// # Examples
///
/// ```
/// use timed_logger::LoggerConfig;
///
/// let config = LoggerConfig::new("billing")
///     .with_level("warning")
///     .with_log_dir("/var/log/billing");
/// assert_eq!(config.log_level, "warning");
///
/// let from_json = LoggerConfig::from_json(r#"{"log_filename": "billing"}"#).unwrap();
/// assert_eq!(from_json.log_level, "all");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    /// Base name of the log file, without date or extension
    pub log_filename: String,
    /// debug, info, warning, error, critical or all (case-insensitive)
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
    /// strftime pattern for the timestamp at the start of each line
    #[serde(default = "default_date_format")]
    pub date_format: String,
    #[serde(default)]
    pub console_colors: bool,
}

impl LoggerConfig {
    pub fn new(log_filename: impl Into<String>) -> Self {
        Self {
            log_filename: log_filename.into(),
            log_level: default_log_level(),
            log_dir: default_log_dir(),
            date_format: default_date_format(),
            console_colors: false,
        }
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[must_use]
    pub fn with_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    #[must_use]
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.log_dir = dir.into();
        self
    }

    #[must_use]
    pub fn with_date_format(mut self, format: impl Into<String>) -> Self {
        self.date_format = format.into();
        self
    }

    #[must_use]
    pub fn with_console_colors(mut self, enabled: bool) -> Self {
        self.console_colors = enabled;
        self
    }

    /// Reject date formats chrono cannot render.
    pub fn validate(&self) -> Result<()> {
        LineFormat::new(self.date_format.as_str()).map(|_| ())
    }

    /// `<log_dir>/<log_filename>_<YYYY-MM-DD>.log`
    pub fn file_path_for(&self, date: NaiveDate) -> PathBuf {
        self.log_dir.join(format!(
            "{}_{}.log",
            self.log_filename,
            date.format("%Y-%m-%d")
        ))
    }

    /// `<log_filename>_<YYYYMMDD>`
    pub fn channel_name_for(&self, date: NaiveDate) -> String {
        format!("{}_{}", self.log_filename, date.format("%Y%m%d"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 8).expect("valid date")
    }

    #[test]
    fn test_defaults() {
        let config = LoggerConfig::new("app");
        assert_eq!(config.log_level, "all");
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
        assert!(!config.console_colors);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LoggerConfig::new("app")
            .with_level("ERROR")
            .with_log_dir("/tmp/app-logs")
            .with_date_format("%H:%M:%S")
            .with_console_colors(true);

        assert_eq!(config.log_level, "ERROR");
        assert_eq!(config.log_dir, PathBuf::from("/tmp/app-logs"));
        assert_eq!(config.date_format, "%H:%M:%S");
        assert!(config.console_colors);
    }

    #[test]
    fn test_paths() {
        let config = LoggerConfig::new("app").with_log_dir("out");
        assert_eq!(
            config.file_path_for(date()),
            PathBuf::from("out").join("app_2025-01-08.log")
        );
        assert_eq!(config.channel_name_for(date()), "app_20250108");
    }

    #[test]
    fn test_from_json() {
        let config = LoggerConfig::from_json(
            r#"{"log_filename": "worker", "log_level": "debug", "log_dir": "var"}"#,
        )
        .expect("valid config");

        assert_eq!(config.log_filename, "worker");
        assert_eq!(config.log_level, "debug");
        assert_eq!(config.log_dir, PathBuf::from("var"));
        assert_eq!(config.date_format, DEFAULT_DATE_FORMAT);
    }

    #[test]
    fn test_from_json_missing_filename() {
        let err = LoggerConfig::from_json(r#"{"log_level": "debug"}"#).unwrap_err();
        assert!(matches!(err, LoggerError::JsonError(_)));
    }

    #[test]
    fn test_validate_date_format() {
        assert!(LoggerConfig::new("app").validate().is_ok());

        let err = LoggerConfig::new("app")
            .with_date_format("%Y-%Q")
            .validate()
            .unwrap_err();
        assert!(matches!(err, LoggerError::InvalidConfiguration { .. }));
    }
}
