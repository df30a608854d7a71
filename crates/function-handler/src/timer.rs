//! Handling of timer-triggered invocations.
//!
//! Timer functions have nobody to answer, so outcomes end up in the
//! invocation's log. The failure chain matches [`handle_http`](crate::handle_http):
//! a failing callback falls back to the default failure log, and only a
//! failure of that log is returned.

use crate::config::HandlerConfig;
use crate::error::{HandlerError, Result};
use crate::handler::{block_on, run_safely, settle};
use crate::log::{Level, log};
use function_host::ExecutionContext;
use std::fmt;
use std::future::Future;
use tracing::Instrument;

/// Per-outcome callbacks for [`handle_timer`].
///
/// Callbacks receive the raw timer payload supplied by the host.
#[must_use = "a TimerHandler does nothing until passed to handle_timer"]
pub struct TimerHandler<'a, C, E>
where
    C: ?Sized,
{
    config: HandlerConfig,
    on_success: Box<dyn FnOnce(&str, &C) -> Result<()> + 'a>,
    on_domain_error: Box<dyn FnOnce(&str, &C, E) -> Result<()> + 'a>,
    on_failure: Box<dyn FnOnce(&str, &C, HandlerError) -> Result<()> + 'a>,
}

impl<'a, C, E> TimerHandler<'a, C, E>
where
    C: ExecutionContext + ?Sized + 'a,
    E: fmt::Display + 'a,
{
    /// Creates a handler using the default callbacks and configuration.
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    /// Creates a handler using the default callbacks.
    ///
    /// Success is silent, a domain error is logged as a warning and a
    /// system failure as an error.
    pub fn with_config(config: HandlerConfig) -> Self {
        let domain_error_config = config.clone();
        let failure_config = config.clone();

        Self {
            config,
            on_success: Box::new(|_timer_info: &str, _context: &C| -> Result<()> { Ok(()) }),
            on_domain_error: Box::new(
                move |_timer_info: &str, context: &C, error: E| -> Result<()> {
                    let message = domain_error_config.domain_error_message(&error);
                    log(context, Level::Warn, &message)
                },
            ),
            on_failure: Box::new(
                move |_timer_info: &str, context: &C, failure: HandlerError| -> Result<()> {
                    log(context, Level::Error, &failure_config.failure_message(&failure))
                },
            ),
        }
    }
}

impl<'a, C, E> Default for TimerHandler<'a, C, E>
where
    C: ExecutionContext + ?Sized + 'a,
    E: fmt::Display + 'a,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, C, E> TimerHandler<'a, C, E>
where
    C: ?Sized,
{
    /// Replaces the callback run after the domain logic succeeded.
    pub fn on_success<S>(mut self, callback: S) -> Self
    where
        S: FnOnce(&str, &C) -> Result<()> + 'a,
    {
        self.on_success = Box::new(callback);
        self
    }

    /// Replaces the callback run for a domain error.
    pub fn on_domain_error<D>(mut self, callback: D) -> Self
    where
        D: FnOnce(&str, &C, E) -> Result<()> + 'a,
    {
        self.on_domain_error = Box::new(callback);
        self
    }

    /// Replaces the callback run for a panic of the domain logic.
    ///
    /// Failures of the other callbacks, and of this one, are logged by the
    /// default failure callback.
    pub fn on_failure<T>(mut self, callback: T) -> Self
    where
        T: FnOnce(&str, &C, HandlerError) -> Result<()> + 'a,
    {
        self.on_failure = Box::new(callback);
        self
    }

    /// Returns the configuration of the default callbacks.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }
}

impl<C, E> fmt::Debug for TimerHandler<'_, C, E>
where
    C: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TimerHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Runs a timer-triggered invocation.
///
/// # Errors
///
/// Returns the system failure only when neither the configured failure
/// callback nor the default one could handle it.
pub async fn handle_timer<C, E, F>(
    timer_info: &str,
    context: &C,
    domain_logic: F,
    handler: TimerHandler<'_, C, E>,
) -> Result<()>
where
    C: ExecutionContext + ?Sized,
    F: Future<Output = std::result::Result<(), E>>,
{
    let span = tracing::info_span!(
        "handle_timer",
        invocation_id = context.invocation_id(),
        function_name = context.function_name(),
    );

    async move {
        let TimerHandler {
            config,
            on_success,
            on_domain_error,
            on_failure,
        } = handler;

        let outcome = settle(
            domain_logic,
            |()| on_success(timer_info, context),
            |error| on_domain_error(timer_info, context, error),
            |failure| on_failure(timer_info, context, failure),
        )
        .await;

        let failure = match outcome {
            Ok(()) => return Ok(()),
            Err(failure) => failure,
        };

        tracing::warn!(error = %failure, "callback failed, using default failure log");
        let message = config.failure_message(&failure);
        match run_safely(|| log(context, Level::Error, &message)) {
            Ok(()) => Ok(()),
            Err(err) => {
                tracing::error!(error = %failure, log_error = %err, "unrecoverable timer failure");
                Err(failure)
            }
        }
    }
    .instrument(span)
    .await
}

/// Runs [`handle_timer`] to completion on a transient current-thread runtime.
///
/// Must not be called from within an async runtime.
///
/// # Errors
///
/// As [`handle_timer`], plus [`HandlerError::Runtime`] if the runtime cannot
/// start.
pub fn handle_timer_blocking<C, E, F>(
    timer_info: &str,
    context: &C,
    domain_logic: F,
    handler: TimerHandler<'_, C, E>,
) -> Result<()>
where
    C: ExecutionContext + ?Sized,
    F: Future<Output = std::result::Result<(), E>>,
{
    block_on(handle_timer(timer_info, context, domain_logic, handler))
}

#[cfg(test)]
mod tests {
    use super::*;
    use function_host::Logger;
    use function_host_doubles::{
        ExecutionContextDouble, FailingLogger, RecordingLogger, TraceContextDouble,
    };
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::sync::Arc;

    const TIMER_INFO: &str = r#"{"schedule":{"adjustForDST":true},"isPastDue":false}"#;

    fn context(logger: Arc<dyn Logger>) -> ExecutionContextDouble {
        ExecutionContextDouble::new(
            "invocation-9",
            TraceContextDouble::new("", "", HashMap::new()),
            logger,
            "nightly-cleanup",
        )
    }

    #[tokio::test]
    async fn test_success_is_silent() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());

        handle_timer(
            TIMER_INFO,
            &context,
            async { Ok::<(), String>(()) },
            TimerHandler::new(),
        )
        .await
        .unwrap();

        assert!(recorder.is_empty());
    }

    #[tokio::test]
    async fn test_domain_error_logged_as_warning() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());

        handle_timer(
            TIMER_INFO,
            &context,
            async { Err::<(), _>("nothing to clean") },
            TimerHandler::new(),
        )
        .await
        .unwrap();

        assert_eq!(
            recorder.messages_at(tracing::Level::WARN),
            vec!["An error has occurred. The error is: nothing to clean".to_string()]
        );
    }

    #[tokio::test]
    async fn test_panic_logged_as_error() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());

        async fn explode() -> std::result::Result<(), String> {
            panic!("disk full")
        }

        handle_timer(TIMER_INFO, &context, explode(), TimerHandler::new())
            .await
            .unwrap();

        assert_eq!(
            recorder.messages_at(tracing::Level::ERROR),
            vec!["A system failure occurred. The failure is: panicked: disk full".to_string()]
        );
    }

    #[tokio::test]
    async fn test_custom_success_receives_timer_info() {
        let context = context(Arc::new(RecordingLogger::new()));
        let seen = Cell::new(false);

        handle_timer(
            TIMER_INFO,
            &context,
            async { Ok::<(), String>(()) },
            TimerHandler::new().on_success(|timer_info: &str, _: &ExecutionContextDouble| {
                seen.set(timer_info == TIMER_INFO);
                Ok(())
            }),
        )
        .await
        .unwrap();

        assert!(seen.get());
    }

    #[tokio::test]
    async fn test_failing_custom_domain_error_bypasses_custom_failure() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());
        let custom_failure_ran = Cell::new(false);

        let handler = TimerHandler::new()
            .on_domain_error(|_: &str, _: &ExecutionContextDouble, _: String| {
                Err(HandlerError::failed("alerting down"))
            })
            .on_failure(|_: &str, _: &ExecutionContextDouble, _: HandlerError| {
                custom_failure_ran.set(true);
                Ok(())
            });

        handle_timer(
            TIMER_INFO,
            &context,
            async { Err::<(), _>("late".to_string()) },
            handler,
        )
        .await
        .unwrap();

        assert!(!custom_failure_ran.get());
        assert_eq!(
            recorder.messages_at(tracing::Level::ERROR),
            vec!["A system failure occurred. The failure is: alerting down".to_string()]
        );
    }

    #[tokio::test]
    async fn test_failing_custom_failure_falls_back_to_default() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());

        async fn explode() -> std::result::Result<(), String> {
            panic!("disk full")
        }

        let handler = TimerHandler::new().on_failure(
            |_: &str, _: &ExecutionContextDouble, failure: HandlerError| {
                Err(HandlerError::failed(format!("cannot report {}", failure)))
            },
        );

        handle_timer(TIMER_INFO, &context, explode(), handler)
            .await
            .unwrap();

        assert_eq!(
            recorder.messages_at(tracing::Level::ERROR),
            vec![
                "A system failure occurred. The failure is: cannot report panicked: disk full"
                    .to_string()
            ]
        );
    }

    #[tokio::test]
    async fn test_failing_logger_returns_failure() {
        let context = context(Arc::new(FailingLogger::new()));

        let result = handle_timer(
            TIMER_INFO,
            &context,
            async { Err::<(), _>("late") },
            TimerHandler::new(),
        )
        .await;

        assert!(matches!(result, Err(HandlerError::Log(_))));
    }

    #[test]
    fn test_handle_timer_blocking() {
        let recorder = Arc::new(RecordingLogger::new());
        let context = context(recorder.clone());

        handle_timer_blocking(
            TIMER_INFO,
            &context,
            async { Err::<(), _>("skipped") },
            TimerHandler::new(),
        )
        .unwrap();

        assert_eq!(recorder.len(), 1);
    }
}
