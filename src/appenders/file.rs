//! File appender implementation

use crate::core::{Appender, LineFormat, LogEntry, LoggerError, Result};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Appends one formatted line per event to a file.
///
/// The file is opened once, in append mode, and every line is flushed as it
/// is written so the file can be tailed while the process runs.
pub struct FileAppender {
    path: PathBuf,
    writer: BufWriter<File>,
    format: LineFormat,
}

impl FileAppender {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LoggerError::file_appender(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: BufWriter::new(file),
            format: LineFormat::default(),
        })
    }

    /// Set the line layout for this appender
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use timed_logger::appenders::FileAppender;
    /// use timed_logger::core::LineFormat;
    ///
    /// let appender = FileAppender::new("logs/app_2025-01-08.log")?
    ///     .with_format(LineFormat::new("%H:%M:%S")?);
    /// # Ok::<(), timed_logger::LoggerError>(())
    /// ```
    #[must_use]
    pub fn with_format(mut self, format: LineFormat) -> Self {
        self.format = format;
        self
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Appender for FileAppender {
    fn append(&mut self, entry: &LogEntry) -> Result<()> {
        let mut output = self.format.format(entry);
        output.push('\n');

        self.writer.write_all(output.as_bytes())?;
        self.writer.flush()?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        self.writer.flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileAppender {
    fn drop(&mut self) {
        let _ = self.flush();
    }
}
