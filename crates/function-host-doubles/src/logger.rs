//! Logging sinks for inspecting what code under test logged.

use function_host::{LogError, Logger};
use parking_lot::Mutex;
use tracing::Level;

/// One record captured by a [`RecordingLogger`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogRecord {
    /// Level the record was written at.
    pub level: Level,
    /// The message text.
    pub message: String,
}

/// A [`Logger`] that keeps every record in memory.
///
/// # Examples
///
/// ```
/// use function_host_doubles::{Logger, RecordingLogger};
/// use tracing::Level;
///
/// let logger = RecordingLogger::new();
/// logger.log(Level::WARN, "disk almost full").unwrap();
///
/// assert_eq!(logger.messages_at(Level::WARN), vec!["disk almost full"]);
/// ```
#[derive(Debug, Default)]
pub struct RecordingLogger {
    records: Mutex<Vec<LogRecord>>,
}

impl RecordingLogger {
    /// Creates an empty recording logger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns a snapshot of all captured records, oldest first.
    pub fn records(&self) -> Vec<LogRecord> {
        self.records.lock().clone()
    }

    /// Returns the messages captured at exactly `level`.
    pub fn messages_at(&self, level: Level) -> Vec<String> {
        self.records
            .lock()
            .iter()
            .filter(|record| record.level == level)
            .map(|record| record.message.clone())
            .collect()
    }

    /// Returns the number of captured records.
    pub fn len(&self) -> usize {
        self.records.lock().len()
    }

    /// Returns true if nothing has been captured.
    pub fn is_empty(&self) -> bool {
        self.records.lock().is_empty()
    }

    /// Discards all captured records.
    pub fn clear(&self) {
        self.records.lock().clear();
    }
}

impl Logger for RecordingLogger {
    fn log(&self, level: Level, message: &str) -> Result<(), LogError> {
        self.records.lock().push(LogRecord {
            level,
            message: message.to_string(),
        });
        Ok(())
    }
}

/// A [`Logger`] that rejects every record.
///
/// Useful for checking that code under test survives a broken sink.
#[derive(Debug, Clone, Default)]
pub struct FailingLogger {
    reason: Option<String>,
}

impl FailingLogger {
    /// Creates a logger that reports itself unavailable.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a logger that rejects records with the given reason.
    pub fn rejecting(reason: impl Into<String>) -> Self {
        Self {
            reason: Some(reason.into()),
        }
    }
}

impl Logger for FailingLogger {
    fn log(&self, _level: Level, _message: &str) -> Result<(), LogError> {
        match &self.reason {
            Some(reason) => Err(LogError::Rejected(reason.clone())),
            None => Err(LogError::Unavailable),
        }
    }
}
