//! Named log channel with a fixed set of sinks

use super::{
    appender::Appender, error::Result, log_entry::LogEntry, log_level::LogLevel,
    metrics::ChannelMetrics,
};
use parking_lot::RwLock;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};

/// An appender paired with the minimum level it accepts.
pub struct Sink {
    threshold: LogLevel,
    appender: Box<dyn Appender>,
}

impl Sink {
    pub fn new<A: Appender + 'static>(threshold: LogLevel, appender: A) -> Self {
        Self::boxed(threshold, Box::new(appender))
    }

    pub fn boxed(threshold: LogLevel, appender: Box<dyn Appender>) -> Self {
        Self {
            threshold,
            appender,
        }
    }

    #[inline]
    pub fn threshold(&self) -> LogLevel {
        self.threshold
    }

    #[inline]
    pub fn accepts(&self, level: LogLevel) -> bool {
        level >= self.threshold
    }

    pub fn name(&self) -> &str {
        self.appender.name()
    }
}

/// A named destination fanning each event out to its sinks.
///
/// The sink list is set when the channel is built and never changes.
/// One failing or panicking sink does not keep the others from receiving
/// the event.
pub struct Channel {
    name: String,
    sinks: RwLock<Vec<Sink>>,
    metrics: ChannelMetrics,
}

impl Channel {
    pub fn new(name: impl Into<String>, sinks: Vec<Sink>) -> Self {
        Self {
            name: name.into(),
            sinks: RwLock::new(sinks),
            metrics: ChannelMetrics::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn metrics(&self) -> &ChannelMetrics {
        &self.metrics
    }

    /// Sink names and thresholds, in attachment order
    pub fn thresholds(&self) -> Vec<(String, LogLevel)> {
        self.sinks
            .read()
            .iter()
            .map(|sink| (sink.name().to_string(), sink.threshold()))
            .collect()
    }

    /// Whether any sink would write a line at `level`
    pub fn enabled(&self, level: LogLevel) -> bool {
        self.sinks.read().iter().any(|sink| sink.accepts(level))
    }

    pub fn emit(&self, level: LogLevel, message: impl Into<String>) {
        let mut sinks = self.sinks.write();
        if !sinks.iter().any(|sink| sink.accepts(level)) {
            self.metrics.record_filtered();
            return;
        }

        let entry = LogEntry::new(level, self.name.as_str(), message);
        let mut has_error = false;

        for (idx, sink) in sinks.iter_mut().enumerate() {
            if !sink.accepts(level) {
                continue;
            }

            let append_result =
                panic::catch_unwind(AssertUnwindSafe(|| sink.appender.append(&entry)));

            match append_result {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    eprintln!(
                        "[LOGGER ERROR] {} sink #{} ({}) failed: {}",
                        self.name,
                        idx,
                        sink.name(),
                        e
                    );
                    has_error = true;
                }
                Err(payload) => {
                    eprintln!(
                        "[LOGGER CRITICAL] {} sink #{} ({}) panicked: {}. \
                         Other sinks continue to function.",
                        self.name,
                        idx,
                        sink.name(),
                        panic_message(payload.as_ref())
                    );
                    has_error = true;
                }
            }
        }

        if has_error {
            self.metrics.record_failed();
        } else {
            self.metrics.record_written();
        }
    }

    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.write();
        for sink in sinks.iter_mut() {
            sink.appender.flush()?;
        }
        Ok(())
    }
}

impl Drop for Channel {
    fn drop(&mut self) {
        if let Err(e) = self.flush() {
            eprintln!("[LOGGER ERROR] Failed to flush {} on drop: {}", self.name, e);
        }
    }
}

/// Human-readable text of a panic payload.
pub(crate) fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "Unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LoggerError;
    use parking_lot::Mutex;
    use std::sync::Arc;

    struct RecordingAppender {
        lines: Arc<Mutex<Vec<String>>>,
    }

    impl Appender for RecordingAppender {
        fn append(&mut self, entry: &LogEntry) -> Result<()> {
            self.lines
                .lock()
                .push(format!("{} {}", entry.level, entry.message));
            Ok(())
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "recording"
        }
    }

    struct FailingAppender;

    impl Appender for FailingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            Err(LoggerError::IoError(std::io::Error::new(
                std::io::ErrorKind::Other,
                "simulated failure",
            )))
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    struct PanickingAppender;

    impl Appender for PanickingAppender {
        fn append(&mut self, _entry: &LogEntry) -> Result<()> {
            panic!("sink exploded");
        }

        fn flush(&mut self) -> Result<()> {
            Ok(())
        }

        fn name(&self) -> &str {
            "panicking"
        }
    }

    fn recording(threshold: LogLevel) -> (Sink, Arc<Mutex<Vec<String>>>) {
        let lines = Arc::new(Mutex::new(Vec::new()));
        let sink = Sink::new(
            threshold,
            RecordingAppender {
                lines: Arc::clone(&lines),
            },
        );
        (sink, lines)
    }

    #[test]
    fn test_threshold_filtering() {
        let (sink, lines) = recording(LogLevel::Warning);
        let channel = Channel::new("app", vec![sink]);

        channel.emit(LogLevel::Info, "dropped");
        channel.emit(LogLevel::Warning, "kept");
        channel.emit(LogLevel::Critical, "also kept");

        assert_eq!(
            *lines.lock(),
            vec!["WARNING kept".to_string(), "CRITICAL also kept".to_string()]
        );
        assert_eq!(channel.metrics().filtered(), 1);
        assert_eq!(channel.metrics().lines_written(), 2);
    }

    #[test]
    fn test_failing_sink_does_not_block_others() {
        let (sink, lines) = recording(LogLevel::Debug);
        let channel = Channel::new(
            "app",
            vec![Sink::new(LogLevel::Debug, FailingAppender), sink],
        );

        channel.emit(LogLevel::Info, "still delivered");

        assert_eq!(lines.lock().len(), 1);
        assert_eq!(channel.metrics().failed_writes(), 1);
    }

    #[test]
    fn test_panicking_sink_is_isolated() {
        let (sink, lines) = recording(LogLevel::Debug);
        let channel = Channel::new(
            "app",
            vec![Sink::new(LogLevel::Debug, PanickingAppender), sink],
        );

        channel.emit(LogLevel::Error, "survives");

        assert_eq!(*lines.lock(), vec!["ERROR survives".to_string()]);
        assert_eq!(channel.metrics().failed_writes(), 1);
    }

    #[test]
    fn test_thresholds_listing() {
        let (first, _) = recording(LogLevel::Info);
        let (second, _) = recording(LogLevel::Info);
        let channel = Channel::new("app", vec![first, second]);

        let thresholds = channel.thresholds();
        assert_eq!(thresholds.len(), 2);
        assert!(thresholds.iter().all(|(_, level)| *level == LogLevel::Info));
        assert!(channel.enabled(LogLevel::Info));
        assert!(!channel.enabled(LogLevel::Debug));
    }

    #[test]
    fn test_panic_message() {
        let payload: Box<dyn Any + Send> = Box::new("static str");
        assert_eq!(panic_message(payload.as_ref()), "static str");

        let payload: Box<dyn Any + Send> = Box::new(String::from("owned"));
        assert_eq!(panic_message(payload.as_ref()), "owned");

        let payload: Box<dyn Any + Send> = Box::new(42u8);
        assert_eq!(panic_message(payload.as_ref()), "Unknown panic");
    }
}
