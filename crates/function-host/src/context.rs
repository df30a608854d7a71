//! The per-invocation execution context.

use crate::logger::Logger;
use crate::trace::TraceContext;

/// Metadata the host supplies with every invocation.
pub trait ExecutionContext {
    /// Unique identifier of this invocation.
    fn invocation_id(&self) -> &str;

    /// Logging sink for this invocation.
    fn logger(&self) -> &dyn Logger;

    /// Trace correlation data for this invocation.
    fn trace_context(&self) -> &dyn TraceContext;

    /// Name of the function being invoked.
    fn function_name(&self) -> &str;
}
