//! # Timed Logger
//!
//! A dual-sink logger that writes every line to a dated file and to the
//! console, plus two timing helpers built on it.
//!
//! ## Features
//!
//! - **Daily files**: `<dir>/<name>_<YYYY-MM-DD>.log`, one line per event
//! - **Execution timing**: wrap a call to log its start, duration and outcome
//! - **Timed HTTP calls**: log method, URL, status, duration and body size
//! - **Transparent errors**: wrapped errors and panics always reach the caller

pub mod api;
pub mod appenders;
pub mod core;
pub mod macros;

pub mod prelude {
    pub use crate::api::{ApiCallResult, ApiRequest, HttpClient, HttpResponse};
    pub use crate::core::{
        CallArgs, ChannelRegistry, FunctionId, LevelSelector, LogLevel, Logger, LoggerBuilder,
        LoggerConfig, LoggerError, Result, TimeLogger, TimingConfig,
    };
    pub use crate::function_id;
}

pub use appenders::{ConsoleAppender, FileAppender};
pub use core::{
    Appender, CallArgs, ChannelMetrics, ChannelRegistry, FunctionId, LevelSelector, LineFormat,
    LogEntry, LogLevel, Logger, LoggerBuilder, LoggerConfig, LoggerError, Result, TimeLogger,
    TimedCall, TimingConfig,
};
