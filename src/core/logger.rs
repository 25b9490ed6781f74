//! Main logger implementation

use super::{
    channel::{Channel, Sink},
    config::LoggerConfig,
    error::{LoggerError, Result},
    format::LineFormat,
    log_level::{LevelSelector, LogLevel},
    metrics::ChannelMetrics,
    registry::ChannelRegistry,
    timing::{TimeLogger, TimingConfig},
};
use crate::appenders::{ConsoleAppender, FileAppender};
use chrono::Local;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Dual-sink logger writing to a dated file and to the console.
///
/// Cloning is cheap and every clone writes to the same channel. Sinks and
/// level are fixed at construction.
///
/// # Example
///
/// ```no_run
/// use timed_logger::{Logger, LoggerConfig};
///
/// let logger = Logger::new(LoggerConfig::new("app").with_level("info"))?;
/// logger.info("Service started");
/// logger.log("warning", "Cache is cold");
/// # Ok::<(), timed_logger::LoggerError>(())
/// ```
#[derive(Clone)]
pub struct Logger {
    inner: Arc<LoggerInner>,
}

struct LoggerInner {
    config: LoggerConfig,
    /// Upper-cased level string as supplied, e.g. "ALL" or "VERBOSE"
    level_name: String,
    selector: Option<LevelSelector>,
    threshold: LogLevel,
    log_path: PathBuf,
    channel: Arc<Channel>,
    registry: Arc<ChannelRegistry>,
}

impl Logger {
    /// Create a logger with its own channel registry.
    pub fn new(config: LoggerConfig) -> Result<Self> {
        Self::with_registry(config, ChannelRegistry::shared())
    }

    /// Create a logger that publishes its channel in `registry`.
    ///
    /// A channel already registered under the same name is replaced.
    pub fn with_registry(config: LoggerConfig, registry: Arc<ChannelRegistry>) -> Result<Self> {
        config.validate()?;
        create_log_directory(&config.log_dir)?;

        let today = Local::now().date_naive();
        let log_path = config.file_path_for(today);
        let channel_name = config.channel_name_for(today);

        let level_name = config.log_level.to_uppercase();
        let selector = level_name.parse::<LevelSelector>().ok();
        let threshold = selector.map_or(LogLevel::Info, |s| s.threshold());

        let format = LineFormat::new(config.date_format.clone())?;
        let file = FileAppender::new(&log_path)?.with_format(format.clone());
        let console = ConsoleAppender::with_colors(config.console_colors).with_format(format);

        let channel = Arc::new(Channel::new(
            channel_name,
            vec![Sink::new(threshold, file), Sink::new(threshold, console)],
        ));
        registry.register(Arc::clone(&channel));

        let logger = Self {
            inner: Arc::new(LoggerInner {
                config,
                level_name,
                selector,
                threshold,
                log_path,
                channel,
                registry,
            }),
        };

        if logger.inner.selector.is_none() {
            logger.warning(format!(
                "Invalid log level '{}'. Using INFO level.",
                logger.inner.level_name
            ));
        }
        logger.info(format!(
            "Logger initialized with level: {}",
            logger.inner.level_name
        ));
        logger.info(format!("Log file: {}", logger.inner.log_path.display()));

        Ok(logger)
    }

    /// Create a builder for Logger
    ///
    /// # Example
    /// ```no_run
    /// use timed_logger::Logger;
    ///
    /// let logger = Logger::builder("worker")
    ///     .level("debug")
    ///     .log_dir("var/log")
    ///     .build()?;
    /// # Ok::<(), timed_logger::LoggerError>(())
    /// ```
    #[must_use]
    pub fn builder(log_filename: impl Into<String>) -> LoggerBuilder {
        LoggerBuilder::new(log_filename)
    }

    pub fn log_at(&self, level: LogLevel, message: impl Into<String>) {
        self.inner.channel.emit(level, message);
    }

    /// Log at a level given by name (case-insensitive).
    ///
    /// Unknown names never fail: the message is logged as a warning that
    /// names the rejected level.
    pub fn log(&self, level: &str, message: impl Into<String>) {
        let level = level.to_uppercase();
        match level.parse::<LogLevel>() {
            Ok(parsed) => self.log_at(parsed, message),
            Err(_) => self.warning(format!(
                "Invalid log level '{}'. Message: {}",
                level,
                message.into()
            )),
        }
    }

    #[inline]
    pub fn debug(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Debug, message);
    }

    #[inline]
    pub fn info(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Info, message);
    }

    #[inline]
    pub fn warning(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Warning, message);
    }

    #[inline]
    pub fn error(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Error, message);
    }

    #[inline]
    pub fn critical(&self, message: impl Into<String>) {
        self.log_at(LogLevel::Critical, message);
    }

    /// Whether a line at `level` would reach any sink
    pub fn is_enabled(&self, level: LogLevel) -> bool {
        level >= self.inner.threshold
    }

    /// Start a timing wrapper bound to this logger.
    ///
    /// The returned [`TimeLogger`] captures `config` by value; later calls
    /// with other settings do not affect it.
    pub fn time_logger(&self, config: TimingConfig) -> TimeLogger {
        TimeLogger::new(self.clone(), config)
    }

    pub fn flush(&self) -> Result<()> {
        self.inner.channel.flush()
    }

    /// Flush and withdraw this logger's channel from its registry.
    ///
    /// The channel is only withdrawn if a newer logger has not replaced it.
    /// The logger itself stays usable.
    pub fn close(&self) -> Result<()> {
        self.flush()?;
        self.inner.registry.dispose_if_current(&self.inner.channel);
        Ok(())
    }

    pub fn config(&self) -> &LoggerConfig {
        &self.inner.config
    }

    /// Upper-cased level string as configured (e.g. `"ALL"`)
    pub fn level_name(&self) -> &str {
        &self.inner.level_name
    }

    /// Parsed level selector, `None` if the configured string was invalid
    pub fn level_selector(&self) -> Option<LevelSelector> {
        self.inner.selector
    }

    /// Effective minimum level of both sinks
    pub fn threshold(&self) -> LogLevel {
        self.inner.threshold
    }

    pub fn channel_name(&self) -> &str {
        self.inner.channel.name()
    }

    pub fn log_file_path(&self) -> &Path {
        &self.inner.log_path
    }

    pub fn sink_thresholds(&self) -> Vec<(String, LogLevel)> {
        self.inner.channel.thresholds()
    }

    pub fn metrics(&self) -> &ChannelMetrics {
        self.inner.channel.metrics()
    }

    pub fn registry(&self) -> &Arc<ChannelRegistry> {
        &self.inner.registry
    }
}

#[cfg(test)]
impl Logger {
    /// Logger over a hand-built channel with a private registry
    pub(crate) fn from_channel(channel: Channel, threshold: LogLevel) -> Self {
        let config = LoggerConfig::new(channel.name()).with_level(threshold.to_str());
        Self {
            inner: Arc::new(LoggerInner {
                level_name: threshold.to_str().to_string(),
                selector: Some(LevelSelector::Level(threshold)),
                threshold,
                log_path: PathBuf::new(),
                channel: Arc::new(channel),
                registry: ChannelRegistry::shared(),
                config,
            }),
        }
    }
}

impl Drop for LoggerInner {
    fn drop(&mut self) {
        if let Err(e) = self.channel.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush during shutdown: {}", e);
        }
    }
}

fn create_log_directory(dir: &Path) -> Result<()> {
    fs::create_dir_all(dir).map_err(|e| {
        LoggerError::io_operation("creating log directory", dir.display().to_string(), e)
    })
}

/// Builder for constructing Logger with a fluent API
///
/// # Example
/// ```no_run
/// use timed_logger::prelude::*;
///
/// let registry = ChannelRegistry::shared();
/// let logger = Logger::builder("api")
///     .level("warning")
///     .log_dir("logs/api")
///     .registry(registry.clone())
///     .build()?;
/// assert!(registry.contains(logger.channel_name()));
/// # Ok::<(), LoggerError>(())
/// ```
pub struct LoggerBuilder {
    config: LoggerConfig,
    registry: Option<Arc<ChannelRegistry>>,
}

impl LoggerBuilder {
    pub fn new(log_filename: impl Into<String>) -> Self {
        Self {
            config: LoggerConfig::new(log_filename),
            registry: None,
        }
    }

    /// Start from an existing configuration
    pub fn from_config(config: LoggerConfig) -> Self {
        Self {
            config,
            registry: None,
        }
    }

    #[must_use = "builder methods return a new value"]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.config = self.config.with_level(level);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config = self.config.with_log_dir(dir);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn date_format(mut self, format: impl Into<String>) -> Self {
        self.config = self.config.with_date_format(format);
        self
    }

    #[must_use = "builder methods return a new value"]
    pub fn console_colors(mut self, enabled: bool) -> Self {
        self.config = self.config.with_console_colors(enabled);
        self
    }

    /// Publish the channel in a shared registry instead of a private one
    #[must_use = "builder methods return a new value"]
    pub fn registry(mut self, registry: Arc<ChannelRegistry>) -> Self {
        self.registry = Some(registry);
        self
    }

    pub fn build(self) -> Result<Logger> {
        let registry = self.registry.unwrap_or_else(ChannelRegistry::shared);
        Logger::with_registry(self.config, registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn logger_in(dir: &TempDir, level: &str) -> Logger {
        Logger::builder("unit")
            .level(level)
            .log_dir(dir.path())
            .build()
            .expect("Failed to create logger")
    }

    fn read_log(logger: &Logger) -> String {
        logger.flush().unwrap();
        fs::read_to_string(logger.log_file_path()).expect("Failed to read log file")
    }

    #[test]
    fn test_file_name_and_channel_are_dated() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "all");

        let today = Local::now().date_naive();
        assert_eq!(
            logger.log_file_path(),
            temp_dir
                .path()
                .join(format!("unit_{}.log", today.format("%Y-%m-%d")))
        );
        assert_eq!(
            logger.channel_name(),
            format!("unit_{}", today.format("%Y%m%d"))
        );
    }

    #[test]
    fn test_all_maps_to_debug() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "all");

        assert_eq!(logger.level_name(), "ALL");
        assert_eq!(logger.level_selector(), Some(LevelSelector::All));
        assert_eq!(logger.threshold(), LogLevel::Debug);
        assert!(logger
            .sink_thresholds()
            .iter()
            .all(|(_, level)| *level == LogLevel::Debug));
    }

    #[test]
    fn test_invalid_level_defaults_to_info() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "verbose");

        assert_eq!(logger.level_selector(), None);
        assert_eq!(logger.threshold(), LogLevel::Info);

        let content = read_log(&logger);
        assert!(content.contains("WARNING - Invalid log level 'VERBOSE'. Using INFO level."));
    }

    #[test]
    fn test_initialization_lines() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "info");

        let content = read_log(&logger);
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("INFO - Logger initialized with level: INFO"));
        assert!(lines[1].contains(&format!(
            "INFO - Log file: {}",
            logger.log_file_path().display()
        )));
    }

    #[test]
    fn test_padded_level_is_invalid() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, " debug ");

        assert_eq!(logger.level_selector(), None);
        assert_eq!(logger.threshold(), LogLevel::Info);

        logger.log(" error", "padded name");

        let content = read_log(&logger);
        assert!(content.contains("WARNING - Invalid log level ' DEBUG '. Using INFO level."));
        assert!(content.contains("WARNING - Invalid log level ' ERROR'. Message: padded name"));
    }

    #[test]
    fn test_dispatch_by_name() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "debug");

        logger.log("Error", "explicit error");
        logger.log("trace", "unknown level");

        let content = read_log(&logger);
        assert!(content.contains("ERROR - explicit error"));
        assert!(content.contains("WARNING - Invalid log level 'TRACE'. Message: unknown level"));
    }

    #[test]
    fn test_clones_share_channel() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "info");
        let clone = logger.clone();

        clone.info("from clone");

        assert!(read_log(&logger).contains("from clone"));
    }

    #[test]
    fn test_is_enabled() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "warning");

        assert!(!logger.is_enabled(LogLevel::Info));
        assert!(logger.is_enabled(LogLevel::Warning));
        assert!(logger.is_enabled(LogLevel::Critical));
    }

    #[test]
    fn test_close_withdraws_channel() {
        let temp_dir = TempDir::new().unwrap();
        let logger = logger_in(&temp_dir, "info");
        let name = logger.channel_name().to_string();

        assert!(logger.registry().contains(&name));
        logger.close().unwrap();
        assert!(!logger.registry().contains(&name));

        logger.info("still writable");
        assert!(read_log(&logger).contains("still writable"));
    }

    #[test]
    fn test_invalid_date_format_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let result = Logger::builder("unit")
            .log_dir(temp_dir.path())
            .date_format("%Y-%Q")
            .build();

        assert!(matches!(
            result,
            Err(LoggerError::InvalidConfiguration { .. })
        ));
    }

    #[test]
    fn test_directory_is_created() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");

        let logger = Logger::builder("unit").log_dir(&nested).build().unwrap();

        assert!(nested.is_dir());
        assert!(logger.log_file_path().starts_with(&nested));
    }
}
