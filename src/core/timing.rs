//! Execution timing
//!
//! [`TimeLogger`] wraps a callable, logs a debug line when it starts and a
//! completion line with its duration when it returns, fails or panics. The
//! wrapped outcome is handed back untouched: values are returned, errors are
//! returned as the same value, panics resume with the original payload.
//!
//! ```no_run
//! use timed_logger::{function_id, CallArgs, Logger, LoggerConfig, TimingConfig};
//! use std::time::Duration;
//!
//! let logger = Logger::new(LoggerConfig::new("jobs"))?;
//! let timed = logger.time_logger(TimingConfig::new().with_threshold(Duration::from_millis(50)));
//!
//! let total: Result<u64, std::num::ParseIntError> =
//!     timed.call(&function_id!(parse_total), &CallArgs::none(), || "42".parse());
//! assert_eq!(total.unwrap(), 42);
//! # Ok::<(), timed_logger::LoggerError>(())
//! ```

use super::{channel::panic_message, log_level::LogLevel, logger::Logger};
use chrono::{DateTime, Local};
use std::convert::Infallible;
use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

/// Completions slower than this are logged as WARNING.
pub const SLOW_CALL: Duration = Duration::from_secs(10);

/// Completions slower than this (and not slow) are logged as INFO.
pub const MODERATE_CALL: Duration = Duration::from_secs(5);

const SUCCESS_MARKER: &str = "✅ SUCCESS";
const FAILURE_MARKER: &str = "❌ FAILED";

/// `500.00ms`, `2.500s` or `2m 5.500s`
pub fn format_elapsed(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
    } else if elapsed < Duration::from_secs(60) {
        format!("{:.3}s", elapsed.as_secs_f64())
    } else {
        let minutes = elapsed.as_secs() / 60;
        let rest = elapsed - Duration::from_secs(minutes * 60);
        format!("{}m {:.3}s", minutes, rest.as_secs_f64())
    }
}

/// Two-bucket variant used for HTTP timings: `500.00ms` or `125.500s`
pub fn format_elapsed_short(elapsed: Duration) -> String {
    if elapsed < Duration::from_secs(1) {
        format!("{:.2}ms", elapsed.as_secs_f64() * 1000.0)
    } else {
        format!("{:.3}s", elapsed.as_secs_f64())
    }
}

/// Severity of a completion line.
///
/// Failures are ERROR; slow calls are promoted to WARNING or INFO; anything
/// else uses `default`.
pub fn completion_level(elapsed: Duration, success: bool, default: LogLevel) -> LogLevel {
    if !success {
        LogLevel::Error
    } else if elapsed > SLOW_CALL {
        LogLevel::Warning
    } else if elapsed > MODERATE_CALL {
        LogLevel::Info
    } else {
        default
    }
}

/// Per-wrapper settings, fixed when the wrapper is created.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TimingConfig {
    include_args: bool,
    threshold: Option<Duration>,
}

impl TimingConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Render call arguments in the start line
    #[must_use]
    pub fn with_args(mut self, include: bool) -> Self {
        self.include_args = include;
        self
    }

    /// Suppress completion lines for calls faster than `threshold`
    #[must_use]
    pub fn with_threshold(mut self, threshold: Duration) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn include_args(&self) -> bool {
        self.include_args
    }

    pub fn threshold(&self) -> Option<Duration> {
        self.threshold
    }

    /// Whether a call that took `elapsed` gets a completion line
    pub fn should_report(&self, elapsed: Duration) -> bool {
        self.threshold.map_or(true, |threshold| elapsed >= threshold)
    }
}

/// Name a timed function is reported under.
///
/// Functions of the crate-root module are reported by bare name, all others
/// as `module::path::name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FunctionId {
    module: Option<String>,
    name: String,
}

impl FunctionId {
    /// Build from a `module_path!()` value; see [`function_id!`](crate::function_id).
    pub fn new(module_path: &str, name: impl Into<String>) -> Self {
        if module_path.contains("::") {
            Self::qualified(module_path, name)
        } else {
            Self::bare(name)
        }
    }

    pub fn qualified(module: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            module: Some(module.into()),
            name: name.into(),
        }
    }

    pub fn bare(name: impl Into<String>) -> Self {
        Self {
            module: None,
            name: name.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }
}

impl fmt::Display for FunctionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.module {
            Some(module) => write!(f, "{}::{}", module, self.name),
            None => f.write_str(&self.name),
        }
    }
}

/// Arguments of a timed call, rendered for the start line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CallArgs {
    positional: String,
    keyword: Vec<(String, String)>,
}

impl CallArgs {
    pub fn none() -> Self {
        Self {
            positional: "()".to_string(),
            keyword: Vec::new(),
        }
    }

    /// Positional arguments from a value's `Debug` output (a tuple renders as `(1, "a")`)
    pub fn positional<A: fmt::Debug + ?Sized>(args: &A) -> Self {
        Self {
            positional: format!("{:?}", args),
            keyword: Vec::new(),
        }
    }

    #[must_use]
    pub fn kwarg<V: fmt::Debug + ?Sized>(mut self, name: impl Into<String>, value: &V) -> Self {
        self.keyword.push((name.into(), format!("{:?}", value)));
        self
    }
}

impl Default for CallArgs {
    fn default() -> Self {
        Self::none()
    }
}

impl fmt::Display for CallArgs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Args: {} | Kwargs: {{", self.positional)?;
        for (idx, (name, value)) in self.keyword.iter().enumerate() {
            if idx > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}: {}", name, value)?;
        }
        f.write_str("}")
    }
}

/// Outcome of one timed call.
#[derive(Debug, Clone, PartialEq)]
pub struct TimedCall {
    pub function: String,
    pub started_at: DateTime<Local>,
    pub elapsed: Duration,
    pub success: bool,
    pub error: Option<String>,
}

impl TimedCall {
    pub fn succeeded(
        function: impl Into<String>,
        started_at: DateTime<Local>,
        elapsed: Duration,
    ) -> Self {
        Self {
            function: function.into(),
            started_at,
            elapsed,
            success: true,
            error: None,
        }
    }

    pub fn failed(
        function: impl Into<String>,
        started_at: DateTime<Local>,
        elapsed: Duration,
        error: impl Into<String>,
    ) -> Self {
        Self {
            function: function.into(),
            started_at,
            elapsed,
            success: false,
            error: Some(error.into()),
        }
    }

    pub fn message(&self) -> String {
        let status = if self.success {
            SUCCESS_MARKER
        } else {
            FAILURE_MARKER
        };
        let mut message = format!(
            "{} | Function: {} | Execution Time: {} | Started: {}",
            status,
            self.function,
            format_elapsed(self.elapsed),
            self.started_at.format("%H:%M:%S")
        );

        if let Some(error) = self.error.as_deref().filter(|e| !e.is_empty()) {
            message.push_str(" | Error: ");
            message.push_str(error);
        }
        message
    }

    pub fn level(&self, default: LogLevel) -> LogLevel {
        completion_level(self.elapsed, self.success, default)
    }
}

/// Timing wrapper bound to a logger and an immutable [`TimingConfig`].
///
/// Created by [`Logger::time_logger`]. Fast completions log at the
/// logger's own level (DEBUG for `all`, INFO when the level string was
/// invalid).
#[derive(Clone)]
pub struct TimeLogger {
    logger: Logger,
    config: TimingConfig,
}

impl TimeLogger {
    pub(crate) fn new(logger: Logger, config: TimingConfig) -> Self {
        Self { logger, config }
    }

    pub fn config(&self) -> TimingConfig {
        self.config
    }

    /// Time a fallible call. The closure's `Err` is returned as-is.
    pub fn call<T, E, F>(&self, function: &FunctionId, args: &CallArgs, f: F) -> Result<T, E>
    where
        E: fmt::Display,
        F: FnOnce() -> Result<T, E>,
    {
        let started_at = self.begin(function, args);
        let started = Instant::now();

        match panic::catch_unwind(AssertUnwindSafe(f)) {
            Ok(Ok(value)) => {
                self.complete(TimedCall::succeeded(
                    function.to_string(),
                    started_at,
                    started.elapsed(),
                ));
                Ok(value)
            }
            Ok(Err(e)) => {
                self.complete(TimedCall::failed(
                    function.to_string(),
                    started_at,
                    started.elapsed(),
                    e.to_string(),
                ));
                Err(e)
            }
            Err(payload) => {
                self.complete(TimedCall::failed(
                    function.to_string(),
                    started_at,
                    started.elapsed(),
                    panic_message(payload.as_ref()),
                ));
                panic::resume_unwind(payload)
            }
        }
    }

    /// Time an infallible call; a panic is logged and then resumed.
    pub fn run<T, F>(&self, function: &FunctionId, args: &CallArgs, f: F) -> T
    where
        F: FnOnce() -> T,
    {
        self.call(function, args, || Ok::<T, Infallible>(f()))
            .unwrap_or_else(|never| match never {})
    }

    /// Wrap `f` into a callable that is timed on every invocation.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use timed_logger::{function_id, Logger, LoggerConfig, TimingConfig};
    ///
    /// let logger = Logger::new(LoggerConfig::new("jobs"))?;
    /// let divide = logger
    ///     .time_logger(TimingConfig::new().with_args(true))
    ///     .wrap(function_id!(divide), |(a, b): (i32, i32)| {
    ///         a.checked_div(b).ok_or("division by zero")
    ///     });
    ///
    /// assert_eq!(divide((10, 2)), Ok(5));
    /// assert_eq!(divide((1, 0)), Err("division by zero"));
    /// # Ok::<(), timed_logger::LoggerError>(())
    /// ```
    pub fn wrap<A, T, E, F>(&self, function: FunctionId, f: F) -> impl Fn(A) -> Result<T, E>
    where
        A: fmt::Debug,
        E: fmt::Display,
        F: Fn(A) -> Result<T, E>,
    {
        let timer = self.clone();
        move |arg: A| {
            let args = if timer.config.include_args {
                CallArgs::positional(&arg)
            } else {
                CallArgs::none()
            };
            timer.call(&function, &args, || f(arg))
        }
    }

    fn begin(&self, function: &FunctionId, args: &CallArgs) -> DateTime<Local> {
        let mut message = format!("🚀 Starting execution: {}", function);
        if self.config.include_args {
            message.push_str(" | ");
            message.push_str(&args.to_string());
        }
        self.logger.debug(message);
        Local::now()
    }

    fn complete(&self, record: TimedCall) {
        if !self.config.should_report(record.elapsed) {
            return;
        }
        let level = record.level(self.logger.threshold());
        self.logger.log_at(level, record.message());
    }
}
