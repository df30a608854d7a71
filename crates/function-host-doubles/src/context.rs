//! Execution and trace context doubles.

use function_host::{ExecutionContext, Logger, TraceContext};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// A [`TraceContext`] holding exactly the values it was built with.
///
/// Nothing is validated; an empty or malformed `traceparent` is kept as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TraceContextDouble {
    trace_parent: String,
    trace_state: String,
    attributes: HashMap<String, String>,
}

impl TraceContextDouble {
    /// Creates a trace context from literal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_host_doubles::{TraceContext, TraceContextDouble};
    /// use std::collections::HashMap;
    ///
    /// let trace = TraceContextDouble::new(
    ///     "00-abc",
    ///     "",
    ///     HashMap::from([("k".to_string(), "v".to_string())]),
    /// );
    /// assert_eq!(trace.attributes().get("k").map(String::as_str), Some("v"));
    /// assert!(trace.attributes().get("missing").is_none());
    /// ```
    pub fn new(
        trace_parent: impl Into<String>,
        trace_state: impl Into<String>,
        attributes: HashMap<String, String>,
    ) -> Self {
        Self {
            trace_parent: trace_parent.into(),
            trace_state: trace_state.into(),
            attributes,
        }
    }
}

impl TraceContext for TraceContextDouble {
    fn trace_parent(&self) -> &str {
        &self.trace_parent
    }

    fn trace_state(&self) -> &str {
        &self.trace_state
    }

    fn attributes(&self) -> &HashMap<String, String> {
        &self.attributes
    }
}

/// An [`ExecutionContext`] holding exactly the values it was built with.
///
/// The logger is shared with the caller, who typically keeps its own handle
/// to inspect what the code under test logged.
#[derive(Clone)]
pub struct ExecutionContextDouble {
    invocation_id: String,
    trace_context: TraceContextDouble,
    logger: Arc<dyn Logger>,
    function_name: String,
}

impl ExecutionContextDouble {
    /// Creates an execution context from literal values.
    ///
    /// All four values are required; none is defaulted or validated.
    pub fn new(
        invocation_id: impl Into<String>,
        trace_context: TraceContextDouble,
        logger: Arc<dyn Logger>,
        function_name: impl Into<String>,
    ) -> Self {
        Self {
            invocation_id: invocation_id.into(),
            trace_context,
            logger,
            function_name: function_name.into(),
        }
    }

    /// Returns the shared handle to the logger.
    pub fn shared_logger(&self) -> &Arc<dyn Logger> {
        &self.logger
    }
}

impl ExecutionContext for ExecutionContextDouble {
    fn invocation_id(&self) -> &str {
        &self.invocation_id
    }

    fn logger(&self) -> &dyn Logger {
        self.logger.as_ref()
    }

    fn trace_context(&self) -> &dyn TraceContext {
        &self.trace_context
    }

    fn function_name(&self) -> &str {
        &self.function_name
    }
}

impl fmt::Debug for ExecutionContextDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExecutionContextDouble")
            .field("invocation_id", &self.invocation_id)
            .field("trace_context", &self.trace_context)
            .field("function_name", &self.function_name)
            .finish_non_exhaustive()
    }
}
