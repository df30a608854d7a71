//! Distributed tracing data attached to an invocation.
//!
//! The host passes the raw W3C `traceparent` and `tracestate` values through
//! unchanged. [`TraceParent`] offers an optional, lenient parse of the former.

use std::collections::HashMap;
use std::fmt;

/// Trace correlation data for one invocation.
pub trait TraceContext {
    /// The raw W3C `traceparent` value.
    fn trace_parent(&self) -> &str;

    /// The raw W3C `tracestate` value.
    fn trace_state(&self) -> &str;

    /// Free-form attributes supplied by the host.
    fn attributes(&self) -> &HashMap<String, String>;

    /// Parses [`trace_parent`](Self::trace_parent) into its components.
    ///
    /// Returns `None` if the value is not a well-formed `traceparent`.
    fn parsed_trace_parent(&self) -> Option<TraceParent> {
        TraceParent::parse(self.trace_parent())
    }
}

/// Components of a W3C `traceparent` header.
///
/// Format: `{version}-{trace-id}-{parent-id}-{trace-flags}`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TraceParent {
    /// 2-character hex version.
    pub version: String,
    /// 32-character hex trace ID (16 bytes).
    pub trace_id: String,
    /// 16-character hex parent span ID (8 bytes).
    pub parent_id: String,
    /// Whether the sampled flag is set.
    pub sampled: bool,
}

impl TraceParent {
    /// Parses a `traceparent` header value.
    ///
    /// The all-zero trace and parent IDs are rejected as invalid, as is the
    /// reserved version `ff`.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_host::TraceParent;
    ///
    /// let parsed =
    ///     TraceParent::parse("00-4bf92f3577b34da6a3ce929d0e0e4736-00f067aa0ba902b7-01").unwrap();
    /// assert_eq!(parsed.trace_id, "4bf92f3577b34da6a3ce929d0e0e4736");
    /// assert!(parsed.sampled);
    /// ```
    pub fn parse(header: &str) -> Option<Self> {
        let parts: Vec<&str> = header.trim().split('-').collect();
        if parts.len() != 4 {
            return None;
        }

        let version = parts[0];
        let trace_id = parts[1];
        let parent_id = parts[2];
        let flags = parts[3];

        if !is_lower_hex(version, 2) || version == "ff" {
            return None;
        }
        if !is_lower_hex(trace_id, 32) || trace_id.bytes().all(|b| b == b'0') {
            return None;
        }
        if !is_lower_hex(parent_id, 16) || parent_id.bytes().all(|b| b == b'0') {
            return None;
        }
        if !is_lower_hex(flags, 2) {
            return None;
        }

        let flags = u8::from_str_radix(flags, 16).ok()?;

        Some(Self {
            version: version.to_string(),
            trace_id: trace_id.to_string(),
            parent_id: parent_id.to_string(),
            sampled: flags & 0x01 == 0x01,
        })
    }

    /// Returns the header string for these components.
    pub fn to_header_string(&self) -> String {
        let flags = if self.sampled { "01" } else { "00" };
        format!(
            "{}-{}-{}-{}",
            self.version, self.trace_id, self.parent_id, flags
        )
    }
}

impl fmt::Display for TraceParent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_header_string())
    }
}

fn is_lower_hex(value: &str, len: usize) -> bool {
    value.len() == len
        && value
            .bytes()
            .all(|b| b.is_ascii_digit() || (b'a'..=b'f').contains(&b))
}
