//! # Function Host Doubles
//!
//! Test doubles for the invocation context of an HTTP-triggered serverless
//! function, so handler code can be unit tested without a running host.
//!
//! ## Overview
//!
//! | Double | Contract |
//! |--------|----------|
//! | [`ExecutionContextDouble`] | [`ExecutionContext`] |
//! | [`TraceContextDouble`] | [`TraceContext`] |
//! | [`HttpRequestDouble`] | [`HttpRequestMessage`] |
//! | [`HttpResponseDouble`] | [`HttpResponseMessage`] and [`HttpResponseMessageBuilder`] |
//! | [`RecordingLogger`], [`FailingLogger`] | [`Logger`] |
//!
//! Every double stores exactly what it was constructed with and validates
//! nothing. None of them performs I/O.
//!
//! ## Quick Start
//!
//! ```
//! use function_host_doubles::{
//!     ExecutionContext, ExecutionContextDouble, HttpRequestDouble, HttpRequestMessage,
//!     HttpResponseMessage, HttpResponseMessageBuilder, HttpStatus, Method, RecordingLogger,
//!     TraceContextDouble, Uri,
//! };
//! use std::collections::HashMap;
//! use std::sync::Arc;
//!
//! let logger = Arc::new(RecordingLogger::new());
//! let context = ExecutionContextDouble::new(
//!     "invocation-1",
//!     TraceContextDouble::new("00-abc", "", HashMap::new()),
//!     logger.clone(),
//!     "greet",
//! );
//! let request = HttpRequestDouble::new(
//!     Uri::from_static("https://localhost/api/greet"),
//!     Method::GET,
//!     HashMap::new(),
//!     HashMap::new(),
//!     (),
//! );
//!
//! // The code under test answers through the request's builder.
//! let response = request
//!     .create_response_builder(HttpStatus::Ok)
//!     .header("Content-Type", "text/plain")
//!     .body(format!("hello from {}", context.function_name()))
//!     .build();
//!
//! assert_eq!(response.status_code(), 200);
//! assert_eq!(
//!     response.body_as::<String>().map(String::as_str),
//!     Some("hello from greet")
//! );
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod logger;
pub mod request;
pub mod response;

pub use context::{ExecutionContextDouble, TraceContextDouble};
pub use logger::{FailingLogger, LogRecord, RecordingLogger};
pub use request::HttpRequestDouble;
pub use response::HttpResponseDouble;

pub use function_host::{
    ExecutionContext, HttpRequestMessage, HttpResponseMessage, HttpResponseMessageBuilder,
    HttpStatus, HttpStatusType, LogError, Logger, Method, ResponseStatus, TraceContext,
    TraceParent, Uri,
};
