//! Outcome routing for domain logic.
//!
//! Domain logic yields `Result<A, E>`. Each of the three outcomes (a value, a
//! domain error, a system failure) is handed to its own callback:
//!
//! ```text
//! domain logic ──► Ok(a) ──────► on_success ─────┐
//!      │     └───► Err(e) ─────► on_domain_error ┤
//!      │                                         │ Err or panic
//!      └─ panic ──► on_failure ──────────────────┤
//!                                                ▼
//!                                           on_failure
//!                                                │ Err or panic
//!                                                ▼
//!                                   on_unrecoverable, then Err
//! ```
//!
//! Every callback runs with panic capture, so a panic anywhere in the chain is
//! converted into a [`HandlerError::Panic`] rather than unwinding through the
//! host.

use crate::error::{HandlerError, Result};
use futures::FutureExt;
use std::future::Future;
use std::panic::{self, AssertUnwindSafe};

/// Routes the outcome of `domain_logic` to the matching callback.
///
/// A failure of `on_success` or `on_domain_error` reaches `on_failure` once.
/// A panic of the domain logic reaches `on_failure` first, and again if that
/// first call fails.
///
/// # Errors
///
/// Returns the last system failure when `on_failure` could not recover from
/// it. `on_unrecoverable` has been notified of that failure by then.
///
/// # Examples
///
/// ```
/// use function_handler::handle;
///
/// # tokio::runtime::Builder::new_current_thread().build().unwrap().block_on(async {
/// let answer = handle(
///     async { Ok::<_, String>(21) },
///     |value| Ok(value * 2),
///     |_error| Ok(0),
///     |_failure| Ok(-1),
///     |_failure| Ok(()),
/// )
/// .await
/// .unwrap();
///
/// assert_eq!(answer, 42);
/// # });
/// ```
pub async fn handle<A, E, B, F, S, D, T, U>(
    domain_logic: F,
    on_success: S,
    on_domain_error: D,
    on_failure: T,
    on_unrecoverable: U,
) -> Result<B>
where
    F: Future<Output = std::result::Result<A, E>>,
    S: FnOnce(A) -> Result<B>,
    D: FnOnce(E) -> Result<B>,
    T: Fn(HandlerError) -> Result<B>,
    U: FnOnce(&HandlerError) -> Result<()>,
{
    let outcome = settle(domain_logic, on_success, on_domain_error, |failure| {
        on_failure(failure)
    })
    .await;

    let failure = match outcome {
        Ok(value) => return Ok(value),
        Err(failure) => failure,
    };

    tracing::debug!(error = %failure, "routing failure to failure callback");
    let failure = match run_safely(|| on_failure(failure)) {
        Ok(value) => return Ok(value),
        Err(failure) => failure,
    };

    tracing::error!(error = %failure, "unrecoverable handler failure");
    if let Err(err) = run_safely(|| on_unrecoverable(&failure)) {
        tracing::warn!(error = %err, "unrecoverable-state callback failed");
    }
    Err(failure)
}

/// Runs [`handle`] to completion on a transient current-thread runtime.
///
/// Must not be called from within an async runtime.
///
/// # Errors
///
/// As [`handle`], plus [`HandlerError::Runtime`] if the runtime cannot start.
pub fn handle_blocking<A, E, B, F, S, D, T, U>(
    domain_logic: F,
    on_success: S,
    on_domain_error: D,
    on_failure: T,
    on_unrecoverable: U,
) -> Result<B>
where
    F: Future<Output = std::result::Result<A, E>>,
    S: FnOnce(A) -> Result<B>,
    D: FnOnce(E) -> Result<B>,
    T: Fn(HandlerError) -> Result<B>,
    U: FnOnce(&HandlerError) -> Result<()>,
{
    block_on(handle(
        domain_logic,
        on_success,
        on_domain_error,
        on_failure,
        on_unrecoverable,
    ))
}

/// Awaits the domain logic and runs the callback for its outcome.
///
/// `on_panic` only sees a panic of the domain logic. A failing `on_success`
/// or `on_domain_error` is returned as `Err` for the caller to route.
pub(crate) async fn settle<A, E, B, F, S, D, T>(
    domain_logic: F,
    on_success: S,
    on_domain_error: D,
    on_panic: T,
) -> Result<B>
where
    F: Future<Output = std::result::Result<A, E>>,
    S: FnOnce(A) -> Result<B>,
    D: FnOnce(E) -> Result<B>,
    T: FnOnce(HandlerError) -> Result<B>,
{
    match AssertUnwindSafe(domain_logic).catch_unwind().await {
        Ok(Ok(value)) => run_safely(|| on_success(value)),
        Ok(Err(error)) => run_safely(|| on_domain_error(error)),
        Err(payload) => {
            let failure = HandlerError::from_panic(payload);
            tracing::debug!(error = %failure, "domain logic panicked");
            run_safely(|| on_panic(failure))
        }
    }
}

/// Runs a callback, converting a panic into [`HandlerError::Panic`].
pub(crate) fn run_safely<B>(callback: impl FnOnce() -> Result<B>) -> Result<B> {
    match panic::catch_unwind(AssertUnwindSafe(callback)) {
        Ok(result) => result,
        Err(payload) => Err(HandlerError::from_panic(payload)),
    }
}

pub(crate) fn block_on<O>(future: impl Future<Output = Result<O>>) -> Result<O> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .build()
        .map_err(HandlerError::Runtime)?;
    runtime.block_on(future)
}
