//! Function Host Workspace - integration tests for function handlers running
//! against host doubles.
//!
//! This is a virtual package that provides workspace-level integration tests.
//! The actual functionality is provided by the workspace member crates:
//!
//! - `function-host`: The host contract (execution context, HTTP messages, statuses)
//! - `function-host-doubles`: In-memory doubles of the host contract for tests
//! - `function-handler`: Outcome-driven handlers for HTTP and timer triggers
