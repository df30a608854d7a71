//! Logging through the invocation's host logger.
//!
//! Hosts accept only a subset of levels, so every record is mapped to a
//! host-compatible level before it reaches the sink. A failing or panicking
//! sink is reported as an error and never unwinds into handler code.

use crate::error::{HandlerError, Result};
use function_host::ExecutionContext;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::panic::{self, AssertUnwindSafe};

/// Severity requested by handler code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    /// Fine-grained diagnostics.
    Trace,
    /// Debugging diagnostics.
    Debug,
    /// Routine information.
    Info,
    /// Something unexpected that was recovered from.
    Warn,
    /// A failure.
    Error,
}

impl Level {
    /// Maps this level onto one the host logger accepts.
    ///
    /// Hosts only distinguish information, warnings and errors, so trace and
    /// debug records are raised to information.
    pub fn host_compatible(self) -> tracing::Level {
        match self {
            Level::Trace | Level::Debug | Level::Info => tracing::Level::INFO,
            Level::Warn => tracing::Level::WARN,
            Level::Error => tracing::Level::ERROR,
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Level::Trace => "trace",
            Level::Debug => "debug",
            Level::Info => "info",
            Level::Warn => "warn",
            Level::Error => "error",
        };
        f.write_str(name)
    }
}

/// Writes a record to the context's logger.
///
/// # Errors
///
/// Returns [`HandlerError::Log`] if the sink rejects the record, or
/// [`HandlerError::Panic`] if the sink panics.
pub fn log<C>(context: &C, level: Level, message: &str) -> Result<()>
where
    C: ExecutionContext + ?Sized,
{
    let trace_id = context
        .trace_context()
        .parsed_trace_parent()
        .map(|parent| parent.trace_id);

    tracing::debug!(
        invocation_id = context.invocation_id(),
        function_name = context.function_name(),
        trace_id = trace_id.as_deref(),
        %level,
        "forwarding record to host logger"
    );

    let host_level = level.host_compatible();
    match panic::catch_unwind(AssertUnwindSafe(|| {
        context.logger().log(host_level, message)
    })) {
        Ok(result) => result.map_err(HandlerError::from),
        Err(payload) => Err(HandlerError::from_panic(payload)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use function_host::{LogError, Logger};
    use function_host_doubles::{
        ExecutionContextDouble, FailingLogger, RecordingLogger, TraceContextDouble,
    };
    use std::collections::HashMap;
    use std::sync::Arc;

    struct PanickingLogger;

    impl Logger for PanickingLogger {
        fn log(&self, _level: tracing::Level, _message: &str) -> std::result::Result<(), LogError> {
            panic!("sink exploded")
        }
    }

    fn context_with(logger: Arc<dyn Logger>) -> ExecutionContextDouble {
        ExecutionContextDouble::new(
            "invocation-1",
            TraceContextDouble::new(
                "00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01",
                "",
                HashMap::new(),
            ),
            logger,
            "orders",
        )
    }

    #[test]
    fn test_levels_are_made_host_compatible() {
        assert_eq!(Level::Trace.host_compatible(), tracing::Level::INFO);
        assert_eq!(Level::Debug.host_compatible(), tracing::Level::INFO);
        assert_eq!(Level::Info.host_compatible(), tracing::Level::INFO);
        assert_eq!(Level::Warn.host_compatible(), tracing::Level::WARN);
        assert_eq!(Level::Error.host_compatible(), tracing::Level::ERROR);
    }

    #[test]
    fn test_log_forwards_to_context_logger() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context_with(recorder.clone());

        log(&context, Level::Debug, "loading order").unwrap();
        log(&context, Level::Warn, "stock low").unwrap();

        assert_eq!(
            recorder.messages_at(tracing::Level::INFO),
            vec!["loading order".to_string()]
        );
        assert_eq!(
            recorder.messages_at(tracing::Level::WARN),
            vec!["stock low".to_string()]
        );
    }

    #[test]
    fn test_log_reports_sink_error() {
        let context = context_with(Arc::new(FailingLogger::rejecting("quota exceeded")));

        let err = log(&context, Level::Error, "lost").unwrap_err();

        assert!(matches!(
            err,
            HandlerError::Log(LogError::Rejected(ref r)) if r == "quota exceeded"
        ));
    }

    #[test]
    fn test_log_captures_sink_panic() {
        let context = context_with(Arc::new(PanickingLogger));

        let err = log(&context, Level::Info, "lost").unwrap_err();

        assert!(matches!(err, HandlerError::Panic(ref m) if m == "sink exploded"));
    }

    #[test]
    fn test_level_serde_names() {
        assert_eq!(serde_json::to_string(&Level::Warn).unwrap(), "\"warn\"");
        assert_eq!(
            serde_json::from_str::<Level>("\"trace\"").unwrap(),
            Level::Trace
        );
        assert_eq!(Level::Error.to_string(), "error");
    }
}
