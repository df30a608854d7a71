//! # Function Handler
//!
//! Outcome-driven handlers for HTTP-triggered and timer-triggered serverless
//! functions.
//!
//! ## Overview
//!
//! Domain logic is written as a future yielding `Result<A, E>`, where `E` is
//! an expected, typed domain error. The handlers in this crate route each of
//! the three possible outcomes to its own callback:
//!
//! - **Success**: `Ok(value)`
//! - **Domain error**: `Err(error)`
//! - **System failure**: a panic, or a callback that itself failed
//!
//! Panics never unwind into the host. A failing callback is handed to a
//! failure callback, and only a failure that nothing could handle is
//! returned as a [`HandlerError`].
//!
//! ## Quick Start
//!
//! ```
//! use function_handler::{HttpHandler, handle_http_blocking};
//! use function_host_doubles::{
//!     ExecutionContextDouble, HttpRequestDouble, HttpResponseMessage, Method, RecordingLogger,
//!     TraceContextDouble, Uri,
//! };
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let context = ExecutionContextDouble::new(
//!     "invocation-1",
//!     TraceContextDouble::default(),
//!     Arc::new(RecordingLogger::new()),
//!     "orders",
//! );
//! let request = HttpRequestDouble::new(
//!     Uri::from_static("https://localhost/api/orders/7"),
//!     Method::GET,
//!     HashMap::new(),
//!     HashMap::new(),
//!     (),
//! );
//!
//! let response = handle_http_blocking(
//!     &request,
//!     &context,
//!     async { Err::<u32, _>("order 7 not found") },
//!     HttpHandler::new(),
//! )
//! .unwrap();
//!
//! assert_eq!(response.status_code(), 500);
//! ```
//!
//! ## Configuration
//!
//! The default callbacks read a [`HandlerConfig`]. [`HttpHandler::new`] and
//! [`TimerHandler::new`] use [`HandlerConfig::default`]. To honour an optional
//! `function-handler.toml` and `FUNCTION_HANDLER_*` environment variables,
//! load the configuration and hand it to `with_config`:
//!
//! ```no_run
//! use function_handler::{HandlerConfig, HttpHandler};
//! use function_host_doubles::{ExecutionContextDouble, HttpRequestDouble};
//!
//! # fn main() -> Result<(), function_handler::ConfigError> {
//! let handler: HttpHandler<'_, HttpRequestDouble<()>, ExecutionContextDouble, String, String> =
//!     HttpHandler::with_config(HandlerConfig::load()?);
//! # Ok(())
//! # }
//! ```
//!
//! See the [`config`] module.
//!
//! ## Modules
//!
//! - [`handler`]: generic outcome routing
//! - [`http`](crate::http): HTTP-triggered invocations
//! - [`timer`]: timer-triggered invocations
//! - [`log`]: logging through the invocation's host logger

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod handler;
pub mod http;
pub mod log;
pub mod timer;

pub use config::{APPLICATION_JSON, HandlerConfig, HandlerConfigBuilder};
pub use error::{BoxError, ConfigError, HandlerError, Result};
pub use handler::{handle, handle_blocking};
pub use crate::http::{
    CONTENT_TYPE, ErrorResponse, HttpHandler, default_domain_error_response,
    default_failure_response, default_success_response, handle_http, handle_http_blocking,
};
pub use log::{Level, log};
pub use timer::{TimerHandler, handle_timer, handle_timer_blocking};
