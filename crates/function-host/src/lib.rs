//! # Function Host
//!
//! The contract a serverless function host offers to HTTP-triggered and
//! timer-triggered function code.
//!
//! ## Overview
//!
//! Every invocation receives an [`ExecutionContext`] carrying the invocation
//! id, the function name, a [`Logger`] and a [`TraceContext`]. HTTP-triggered
//! functions additionally receive an [`HttpRequestMessage`], from which they
//! spawn an [`HttpResponseMessageBuilder`] to assemble their answer.
//!
//! The crate defines only the contract and its vocabulary. Concrete
//! implementations live with the host, or in the `function-host-doubles`
//! crate for tests.
//!
//! ## Status Representations
//!
//! Statuses come in two forms: the enumerated [`HttpStatus`], whose codes
//! are taken from [`http::StatusCode`], and the exact [`HttpStatusType`],
//! which carries any numeric code. A response reports whichever form was
//! last written as a [`ResponseStatus`].
//!
//! ```
//! use function_host::{HttpStatus, HttpStatusType, ResponseStatus};
//!
//! let status = ResponseStatus::from(HttpStatus::Created);
//! assert_eq!(status.code(), 201);
//!
//! let exact = ResponseStatus::from(HttpStatusType::custom(299));
//! assert_eq!(exact.code(), 299);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod context;
pub mod logger;
pub mod message;
pub mod status;
pub mod trace;

pub use context::ExecutionContext;
pub use logger::{LogError, Logger, TracingLogger};
pub use message::{
    HttpRequestMessage, HttpResponseMessage, HttpResponseMessageBuilder, ResponseBody, ResponseOf,
};
pub use status::{HttpStatus, HttpStatusType, ResponseStatus};
pub use trace::{TraceContext, TraceParent};

pub use http::{Method, Uri};
pub use tracing::Level;
