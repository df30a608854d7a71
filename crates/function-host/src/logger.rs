//! The logging sink a function host hands to each invocation.

use thiserror::Error;
use tracing::Level;

/// Errors a logging sink may report.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum LogError {
    /// The sink refused the record.
    #[error("log record rejected: {0}")]
    Rejected(String),

    /// The sink can no longer accept records.
    #[error("logger unavailable")]
    Unavailable,
}

/// A logging sink attached to an invocation.
///
/// Sinks are shared between the host and handler code, so they take `&self`
/// and must be thread-safe.
pub trait Logger: Send + Sync {
    /// Writes one record at the given level.
    ///
    /// # Errors
    ///
    /// Returns a [`LogError`] when the sink cannot accept the record.
    fn log(&self, level: Level, message: &str) -> Result<(), LogError>;
}

/// A [`Logger`] that forwards every record to the `tracing` facade.
///
/// Records are emitted under the `function_host` target with the logger's
/// name attached as a field.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    name: String,
}

impl TracingLogger {
    /// Creates a logger reporting under the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the logger name.
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new("function-host")
    }
}

impl Logger for TracingLogger {
    fn log(&self, level: Level, message: &str) -> Result<(), LogError> {
        let logger = self.name.as_str();
        match level {
            Level::ERROR => tracing::error!(target: "function_host", logger, "{}", message),
            Level::WARN => tracing::warn!(target: "function_host", logger, "{}", message),
            Level::INFO => tracing::info!(target: "function_host", logger, "{}", message),
            Level::DEBUG => tracing::debug!(target: "function_host", logger, "{}", message),
            Level::TRACE => tracing::trace!(target: "function_host", logger, "{}", message),
        }
        Ok(())
    }
}
