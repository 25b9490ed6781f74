//! Core logger types and traits

pub mod appender;
pub mod channel;
pub mod config;
pub mod error;
pub mod format;
pub mod log_entry;
pub mod log_level;
pub mod logger;
pub mod metrics;
pub mod registry;
pub mod timing;

pub use appender::Appender;
pub use channel::{Channel, Sink};
pub use config::{LoggerConfig, DEFAULT_LOG_DIR, DEFAULT_LOG_LEVEL};
pub use error::{LoggerError, Result};
pub use format::{LineFormat, DEFAULT_DATE_FORMAT};
pub use log_entry::LogEntry;
pub use log_level::{LevelSelector, LogLevel};
pub use logger::{Logger, LoggerBuilder};
pub use metrics::ChannelMetrics;
pub use registry::ChannelRegistry;
pub use timing::{
    completion_level, format_elapsed, format_elapsed_short, CallArgs, FunctionId, TimeLogger,
    TimedCall, TimingConfig, MODERATE_CALL, SLOW_CALL,
};
