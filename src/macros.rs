//! Logging macros for ergonomic log message formatting.
//!
//! These macros provide a convenient interface for logging with automatic
//! string formatting, similar to `println!` and `format!`.
//!
//! # Examples
//!
//! ```
//! use timed_logger::prelude::*;
//! use timed_logger::info;
//!
//! # let dir = tempfile::tempdir().unwrap();
//! let logger = Logger::builder("server").log_dir(dir.path()).build()?;
//!
//! info!(logger, "Server started");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! # Ok::<(), LoggerError>(())
//! ```

/// Log a message at a [`LogLevel`](crate::LogLevel) with automatic formatting.
///
/// # Examples
///
/// ```
/// # use timed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let logger = Logger::builder("doc").log_dir(dir.path()).build().unwrap();
/// use timed_logger::log;
/// log!(logger, LogLevel::Info, "Simple message");
/// log!(logger, LogLevel::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $level:expr, $($arg:tt)+) => {
        $logger.log_at($level, format!($($arg)+))
    };
}

/// Log a debug-level message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message.
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Info, $($arg)+)
    };
}

/// Log a warning-level message.
///
/// # Examples
///
/// ```
/// # use timed_logger::prelude::*;
/// # let dir = tempfile::tempdir().unwrap();
/// # let logger = Logger::builder("doc").log_dir(dir.path()).build().unwrap();
/// use timed_logger::warning;
/// warning!(logger, "Retry attempt {} of {}", 3, 5);
/// ```
#[macro_export]
macro_rules! warning {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Warning, $($arg)+)
    };
}

/// Log an error-level message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Error, $($arg)+)
    };
}

/// Log a critical-level message.
#[macro_export]
macro_rules! critical {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::LogLevel::Critical, $($arg)+)
    };
}

/// Build a [`FunctionId`](crate::FunctionId) for a function in the calling module.
///
/// # Examples
///
/// ```
/// use timed_logger::function_id;
///
/// let id = function_id!(rebuild_index);
/// assert_eq!(id.name(), "rebuild_index");
///
/// let id = function_id!("Worker::poll");
/// assert_eq!(id.name(), "Worker::poll");
/// ```
#[macro_export]
macro_rules! function_id {
    ($name:ident) => {
        $crate::FunctionId::new(module_path!(), stringify!($name))
    };
    ($name:expr) => {
        $crate::FunctionId::new(module_path!(), $name)
    };
}
