//! Console appender implementation

use crate::core::{Appender, LineFormat, LogEntry, Result};
use colored::Colorize;

/// Mirrors formatted lines to the terminal.
///
/// ERROR and CRITICAL lines go to stderr, everything else to stdout.
pub struct ConsoleAppender {
    use_colors: bool,
    format: LineFormat,
}

impl ConsoleAppender {
    pub fn new() -> Self {
        Self {
            use_colors: false,
            format: LineFormat::default(),
        }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            format: LineFormat::default(),
        }
    }

    /// Set the line layout for this appender
    ///
    /// # Example
    ///
    /// ```
    /// use timed_logger::appenders::ConsoleAppender;
    /// use timed_logger::core::LineFormat;
    ///
    /// let appender = ConsoleAppender::new().with_format(LineFormat::new("%H:%M:%S")?);
    /// # Ok::<(), timed_logger::LoggerError>(())
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    fn render(&self, entry: &LogEntry) -> String {
        if self.use_colors {
            let level = entry
                .level
                .to_str()
                .color(entry.level.color_code())
                .to_string();
            self.format.format_with_level(entry, &level)
        } else {
            self.format.format(entry)
        }
    }
}

impl Default for ConsoleAppender {
    fn default() -> Self {
        Self::new()
    }
}

impl Appender for ConsoleAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let output = self.render(entry);

        if entry.level.is_error() {
            eprintln!("{}", output);
        } else {
            println!("{}", output);
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::LogLevel;

    #[test]
    fn test_plain_render_matches_line_format() {
        let appender = ConsoleAppender::new();
        let entry = LogEntry::new(LogLevel::Warning, "app", "careful");
        assert_eq!(appender.render(&entry), LineFormat::default().format(&entry));
    }

    #[test]
    fn test_colored_render_keeps_message() {
        colored::control::set_override(true);
        let appender = ConsoleAppender::with_colors(true);
        let entry = LogEntry::new(LogLevel::Error, "app", "boom");
        let rendered = appender.render(&entry);
        colored::control::unset_override();

        assert!(rendered.contains("ERROR"));
        assert!(rendered.ends_with(" - boom"));
        assert!(rendered.contains('\u{1b}'));
    }

    #[test]
    fn test_append_and_flush() {
        let mut appender = ConsoleAppender::new();
        appender
            .append(&LogEntry::new(LogLevel::Info, "app", "to stdout"))
            .unwrap();
        appender
            .append(&LogEntry::new(LogLevel::Critical, "app", "to stderr"))
            .unwrap();
        appender.flush().unwrap();
        assert_eq!(appender.name(), "console");
    }
}
