//! Error types for function handlers.

use function_host::LogError;
use std::any::Any;
use thiserror::Error;

/// A boxed error returned by handler callbacks.
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// A specialised Result type for handler operations.
pub type Result<T> = std::result::Result<T, HandlerError>;

/// A system failure raised while handling an invocation.
///
/// Domain errors are not represented here; they are the `E` of the domain
/// logic's `Result<A, E>` and are routed to their own callback.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum HandlerError {
    /// Domain logic or a callback panicked.
    #[error("panicked: {0}")]
    Panic(String),

    /// A callback returned an error.
    #[error(transparent)]
    Failed(BoxError),

    /// Writing to the invocation's logger failed.
    #[error("failed to write log record")]
    Log(#[from] LogError),

    /// The runtime for a blocking handler could not be started.
    #[error("failed to start handler runtime")]
    Runtime(#[source] std::io::Error),
}

impl HandlerError {
    /// Wraps any error as a callback failure.
    pub fn failed(err: impl Into<BoxError>) -> Self {
        HandlerError::Failed(err.into())
    }

    /// Converts a panic payload into a failure, keeping its message if it
    /// has one.
    pub(crate) fn from_panic(payload: Box<dyn Any + Send>) -> Self {
        let message = match payload.downcast::<String>() {
            Ok(message) => *message,
            Err(payload) => match payload.downcast::<&'static str>() {
                Ok(message) => (*message).to_string(),
                Err(_) => "non-string panic payload".to_string(),
            },
        };
        HandlerError::Panic(message)
    }
}

/// Errors raised while loading [`HandlerConfig`](crate::HandlerConfig).
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A configuration source could not be read or parsed.
    #[error("failed to load handler configuration")]
    Load(#[source] Box<figment::Error>),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        ConfigError::Load(Box::new(err))
    }
}
