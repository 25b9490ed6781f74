//! Sink trait

use super::{error::Result, log_entry::LogEntry};

/// Destination a [`Channel`](super::Channel) writes formatted lines to.
///
/// Implementations are called with the channel's write lock held, so one
/// `append` never interleaves with another on the same channel.
pub trait Appender: Send + Sync {
    fn append(&mut self, entry: &LogEntry) -> Result<()>;
    fn flush(&mut self) -> Result<()>;

    /// Short sink name, e.g. `"file"`
    fn name(&self) -> &str;
}
