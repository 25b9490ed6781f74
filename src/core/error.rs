//! Errors raised while setting up a logger or writing to its sinks

use std::io;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// A filesystem step of logger setup failed
    #[error("{operation} '{path}' failed: {source}")]
    IoOperation {
        operation: String,
        path: String,
        #[source]
        source: io::Error,
    },

    #[error("log write failed: {0}")]
    IoError(#[from] io::Error),

    /// Configuration document could not be parsed
    #[error("malformed logger configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("invalid {setting}: {message}")]
    InvalidConfiguration { setting: String, message: String },

    #[error("cannot open log file '{path}': {message}")]
    FileAppenderError { path: String, message: String },
}

impl LoggerError {
    pub fn io_operation(
        operation: impl Into<String>,
        path: impl Into<String>,
        source: io::Error,
    ) -> Self {
        LoggerError::IoOperation {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    pub fn config(setting: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::InvalidConfiguration {
            setting: setting.into(),
            message: message.into(),
        }
    }

    pub fn file_appender(path: impl Into<String>, message: impl Into<String>) -> Self {
        LoggerError::FileAppenderError {
            path: path.into(),
            message: message.into(),
        }
    }
}
