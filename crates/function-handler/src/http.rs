//! Handling of HTTP-triggered invocations.
//!
//! [`handle_http`] routes the outcome of domain logic to the callbacks of an
//! [`HttpHandler`] and always answers with a response built from the
//! request's own builder. Callbacks left unset fall back to JSON defaults:
//!
//! | Outcome | Status | Body |
//! |---------|--------|------|
//! | `Ok(value)` | 200 | `value` |
//! | `Err(error)` | configured (500) | [`ErrorResponse`] with the domain error prefix |
//! | system failure | 500 | [`ErrorResponse`] with the failure prefix |
//!
//! If a callback fails, the default failure response is produced instead.
//! The custom failure callback only answers panics of the domain logic. Only
//! when the default also fails is the failure returned as an error.

use crate::config::HandlerConfig;
use crate::error::{HandlerError, Result};
use crate::handler::{block_on, run_safely, settle};
use crate::log::{Level, log};
use function_host::{
    ExecutionContext, HttpRequestMessage, HttpResponseMessageBuilder, HttpStatus, HttpStatusType,
    ResponseOf,
};
use ::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use std::future::Future;
use tracing::Instrument;

/// Name of the content type header set on default responses.
pub const CONTENT_TYPE: &str = "Content-Type";

/// Body of the default domain error and failure responses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// Human readable description of what went wrong.
    pub error_message: String,
}

impl ErrorResponse {
    /// Creates an error body with the given message.
    pub fn new(error_message: impl Into<String>) -> Self {
        Self {
            error_message: error_message.into(),
        }
    }
}

/// Per-outcome callbacks for [`handle_http`].
///
/// `R` is the request type, `C` the execution context, `A` the value and `E`
/// the domain error produced by the domain logic.
#[must_use = "an HttpHandler does nothing until passed to handle_http"]
pub struct HttpHandler<'a, R, C, A, E>
where
    R: HttpRequestMessage,
    C: ?Sized,
{
    config: HandlerConfig,
    on_success: Box<dyn FnOnce(&R, &C, A) -> Result<ResponseOf<R>> + 'a>,
    on_domain_error: Box<dyn FnOnce(&R, &C, E) -> Result<ResponseOf<R>> + 'a>,
    on_failure: Box<dyn FnOnce(&R, &C, HandlerError) -> Result<ResponseOf<R>> + 'a>,
}

impl<'a, R, C, A, E> HttpHandler<'a, R, C, A, E>
where
    R: HttpRequestMessage + 'a,
    C: ExecutionContext + ?Sized + 'a,
    A: Any + Send + Sync,
    E: fmt::Display + 'a,
{
    /// Creates a handler using the default callbacks and configuration.
    pub fn new() -> Self {
        Self::with_config(HandlerConfig::default())
    }

    /// Creates a handler using the default callbacks.
    pub fn with_config(config: HandlerConfig) -> Self {
        let success_config = config.clone();
        let domain_error_config = config.clone();
        let failure_config = config.clone();

        Self {
            config,
            on_success: Box::new(
                move |request: &R, _context: &C, value: A| -> Result<ResponseOf<R>> {
                    Ok(default_success_response(&success_config, request, value))
                },
            ),
            on_domain_error: Box::new(
                move |request: &R, _context: &C, error: E| -> Result<ResponseOf<R>> {
                    Ok(default_domain_error_response(
                        &domain_error_config,
                        request,
                        &error,
                    ))
                },
            ),
            on_failure: Box::new(
                move |request: &R, context: &C, failure: HandlerError| -> Result<ResponseOf<R>> {
                    default_failure_response(&failure_config, request, context, &failure)
                },
            ),
        }
    }
}

impl<'a, R, C, A, E> Default for HttpHandler<'a, R, C, A, E>
where
    R: HttpRequestMessage + 'a,
    C: ExecutionContext + ?Sized + 'a,
    A: Any + Send + Sync,
    E: fmt::Display + 'a,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, R, C, A, E> HttpHandler<'a, R, C, A, E>
where
    R: HttpRequestMessage,
    C: ?Sized,
{
    /// Replaces the callback answering a successful value.
    pub fn on_success<S>(mut self, callback: S) -> Self
    where
        S: FnOnce(&R, &C, A) -> Result<ResponseOf<R>> + 'a,
    {
        self.on_success = Box::new(callback);
        self
    }

    /// Replaces the callback answering a domain error.
    pub fn on_domain_error<D>(mut self, callback: D) -> Self
    where
        D: FnOnce(&R, &C, E) -> Result<ResponseOf<R>> + 'a,
    {
        self.on_domain_error = Box::new(callback);
        self
    }

    /// Replaces the callback answering a panic of the domain logic.
    ///
    /// Failures of the other callbacks, and of this one, are answered by
    /// [`default_failure_response`].
    pub fn on_failure<T>(mut self, callback: T) -> Self
    where
        T: FnOnce(&R, &C, HandlerError) -> Result<ResponseOf<R>> + 'a,
    {
        self.on_failure = Box::new(callback);
        self
    }

    /// Returns the configuration of the default callbacks.
    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }
}

impl<R, C, A, E> fmt::Debug for HttpHandler<'_, R, C, A, E>
where
    R: HttpRequestMessage,
    C: ?Sized,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpHandler")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

/// Answers an HTTP-triggered invocation.
///
/// # Errors
///
/// Returns the system failure only when neither the configured failure
/// callback nor the default failure response could handle it. The failure
/// has been logged through the context's logger by then, if the logger
/// allowed it.
///
/// # Examples
///
/// ```
/// use function_handler::{HttpHandler, handle_http};
/// use function_host_doubles::{
///     ExecutionContextDouble, HttpRequestDouble, HttpResponseMessage, Method, RecordingLogger,
///     TraceContextDouble, Uri,
/// };
/// use std::collections::HashMap;
/// use std::sync::Arc;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let context = ExecutionContextDouble::new(
///     "invocation-1",
///     TraceContextDouble::default(),
///     Arc::new(RecordingLogger::new()),
///     "greet",
/// );
/// let request = HttpRequestDouble::new(
///     Uri::from_static("https://localhost/api/greet"),
///     Method::GET,
///     HashMap::new(),
///     HashMap::new(),
///     (),
/// );
///
/// let response = handle_http(
///     &request,
///     &context,
///     async { Ok::<_, String>("hello".to_string()) },
///     HttpHandler::new(),
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(response.status_code(), 200);
/// assert_eq!(response.get_header("Content-Type"), Some("application/json"));
/// # });
/// ```
pub async fn handle_http<R, C, A, E, F>(
    request: &R,
    context: &C,
    domain_logic: F,
    handler: HttpHandler<'_, R, C, A, E>,
) -> Result<ResponseOf<R>>
where
    R: HttpRequestMessage,
    C: ExecutionContext + ?Sized,
    F: Future<Output = std::result::Result<A, E>>,
{
    let span = tracing::info_span!(
        "handle_http",
        invocation_id = context.invocation_id(),
        function_name = context.function_name(),
        method = %request.method(),
        uri = %request.uri(),
    );

    async move {
        let HttpHandler {
            config,
            on_success,
            on_domain_error,
            on_failure,
        } = handler;

        let outcome = settle(
            domain_logic,
            |value| on_success(request, context, value),
            |error| on_domain_error(request, context, error),
            |failure| on_failure(request, context, failure),
        )
        .await;

        let failure = match outcome {
            Ok(response) => return Ok(response),
            Err(failure) => failure,
        };

        tracing::warn!(error = %failure, "callback failed, using default failure response");
        let failure = match run_safely(|| {
            default_failure_response(&config, request, context, &failure)
        }) {
            Ok(response) => return Ok(response),
            Err(failure) => failure,
        };

        tracing::error!(error = %failure, "unrecoverable failure answering request");
        if let Err(err) = log(context, Level::Error, &config.failure_message(&failure)) {
            tracing::warn!(error = %err, "failed to log unrecoverable failure");
        }
        Err(failure)
    }
    .instrument(span)
    .await
}

/// Runs [`handle_http`] to completion on a transient current-thread runtime.
///
/// Must not be called from within an async runtime.
///
/// # Errors
///
/// As [`handle_http`], plus [`HandlerError::Runtime`] if the runtime cannot
/// start.
pub fn handle_http_blocking<R, C, A, E, F>(
    request: &R,
    context: &C,
    domain_logic: F,
    handler: HttpHandler<'_, R, C, A, E>,
) -> Result<ResponseOf<R>>
where
    R: HttpRequestMessage,
    C: ExecutionContext + ?Sized,
    F: Future<Output = std::result::Result<A, E>>,
{
    block_on(handle_http(request, context, domain_logic, handler))
}

/// Builds the default answer for a successful value: 200 with the value as a
/// JSON body.
pub fn default_success_response<R, A>(
    config: &HandlerConfig,
    request: &R,
    value: A,
) -> ResponseOf<R>
where
    R: HttpRequestMessage,
    A: Any + Send + Sync,
{
    request
        .create_response_builder(HttpStatus::Ok)
        .header(CONTENT_TYPE, config.content_type.as_str())
        .body(value)
        .build()
}

/// Builds the default answer for a domain error.
///
/// The status is the configured domain error status, reported through the
/// enumerated representation when it names one.
pub fn default_domain_error_response<R, E>(
    config: &HandlerConfig,
    request: &R,
    error: &E,
) -> ResponseOf<R>
where
    R: HttpRequestMessage,
    E: fmt::Display + ?Sized,
{
    let code = config.domain_error_status;
    let builder = match StatusCode::from_u16(code)
        .ok()
        .and_then(HttpStatus::from_status_code)
    {
        Some(status) => request.create_response_builder(status),
        None => request.create_response_builder_with_type(HttpStatusType::custom(code)),
    };

    builder
        .header(CONTENT_TYPE, config.content_type.as_str())
        .body(ErrorResponse::new(config.domain_error_message(error)))
        .build()
}

/// Logs a system failure through the context's logger and builds a 500
/// answer describing it.
///
/// # Errors
///
/// Returns an error if the failure cannot be logged.
pub fn default_failure_response<R, C>(
    config: &HandlerConfig,
    request: &R,
    context: &C,
    failure: &HandlerError,
) -> Result<ResponseOf<R>>
where
    R: HttpRequestMessage,
    C: ExecutionContext + ?Sized,
{
    let message = config.failure_message(failure);
    log(context, Level::Error, &message)?;

    Ok(request
        .create_response_builder(HttpStatus::InternalServerError)
        .header(CONTENT_TYPE, config.content_type.as_str())
        .body(ErrorResponse::new(message))
        .build())
}
