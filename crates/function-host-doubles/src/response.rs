//! The HTTP response double.
//!
//! [`HttpResponseDouble`] is both the builder and the built message. Every
//! builder call mutates the same value and hands it back, and
//! [`build`](HttpResponseMessageBuilder::build) returns it unchanged. Nothing
//! is frozen after `build`; the double only records what was set.

use function_host::{
    HttpResponseMessage, HttpResponseMessageBuilder, HttpStatus, HttpStatusType, ResponseBody,
    ResponseStatus,
};
use std::any::Any;
use std::collections::HashMap;
use std::fmt;

/// A response builder and response message in one value.
///
/// Starts out as `200 OK` with no headers and no body.
///
/// Header keys are stored and looked up exactly as given. Real HTTP treats
/// header names case-insensitively; this double does not.
///
/// # Examples
///
/// ```
/// use function_host_doubles::{
///     HttpResponseDouble, HttpResponseMessage, HttpResponseMessageBuilder, HttpStatus,
/// };
///
/// let response = HttpResponseDouble::new()
///     .status(HttpStatus::Created)
///     .header("Location", "/orders/7")
///     .body("created")
///     .build();
///
/// assert_eq!(response.status_code(), 201);
/// assert_eq!(response.get_header("Location"), Some("/orders/7"));
/// assert_eq!(response.get_header("location"), None);
/// assert_eq!(response.body_as::<&str>(), Some(&"created"));
/// ```
#[derive(Default)]
pub struct HttpResponseDouble {
    status: ResponseStatus,
    headers: HashMap<String, String>,
    body: Option<Box<ResponseBody>>,
}

impl HttpResponseDouble {
    /// Creates a response in its initial state.
    pub fn new() -> Self {
        Self::default()
    }

    /// All headers set so far.
    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Returns true if a body has been set.
    pub fn has_body(&self) -> bool {
        self.body.is_some()
    }
}

impl HttpResponseMessageBuilder for HttpResponseDouble {
    type Message = Self;

    fn status(mut self, status: HttpStatus) -> Self {
        self.status = ResponseStatus::Status(status);
        self
    }

    fn status_type(mut self, status_type: HttpStatusType) -> Self {
        self.status = ResponseStatus::Type(status_type);
        self
    }

    fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    fn body<B: Any + Send + Sync>(mut self, body: B) -> Self {
        self.body = Some(Box::new(body));
        self
    }

    fn build(self) -> Self {
        self
    }
}

impl HttpResponseMessage for HttpResponseDouble {
    fn get_status(&self) -> ResponseStatus {
        self.status
    }

    fn status_code(&self) -> u16 {
        self.status.code()
    }

    fn get_header(&self, key: &str) -> Option<&str> {
        self.headers.get(key).map(String::as_str)
    }

    fn get_body(&self) -> Option<&ResponseBody> {
        self.body.as_deref()
    }
}

impl fmt::Debug for HttpResponseDouble {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HttpResponseDouble")
            .field("status", &self.status)
            .field("headers", &self.headers)
            .field("has_body", &self.body.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let response = HttpResponseDouble::new();

        assert_eq!(response.get_status(), HttpStatus::Ok);
        assert_eq!(response.status_code(), 200);
        assert!(response.headers().is_empty());
        assert!(response.get_body().is_none());
    }

    #[test]
    fn test_exact_then_coarse_status() {
        let response = HttpResponseDouble::new()
            .status_type(HttpStatusType::custom(201))
            .status(HttpStatus::Ok);

        assert_eq!(response.status_code(), 200);
        assert_eq!(response.get_status(), ResponseStatus::Status(HttpStatus::Ok));
    }

    #[test]
    fn test_coarse_then_exact_status() {
        let response = HttpResponseDouble::new()
            .status(HttpStatus::Ok)
            .status_type(HttpStatusType::custom(201));

        assert_eq!(response.status_code(), 201);
        assert_eq!(
            response.get_status(),
            ResponseStatus::Type(HttpStatusType::custom(201))
        );
    }

    #[test]
    fn test_header_overwrites() {
        let response = HttpResponseDouble::new()
            .header("X-Test", "a")
            .header("X-Test", "b");

        assert_eq!(response.get_header("X-Test"), Some("b"));
        assert_eq!(response.headers().len(), 1);
        assert_eq!(response.get_header("X-Missing"), None);
    }

    #[test]
    fn test_header_lookup_is_case_sensitive() {
        let response = HttpResponseDouble::new().header("X-Test", "a");

        assert_eq!(response.get_header("x-test"), None);
        assert_eq!(response.get_header("X-TEST"), None);
    }

    #[test]
    fn test_body_replaces_and_may_change_type() {
        let response = HttpResponseDouble::new().body(1_u32).body("two".to_string());

        assert!(response.body_as::<u32>().is_none());
        assert_eq!(response.body_as::<String>().map(String::as_str), Some("two"));
    }

    #[test]
    fn test_build_preserves_observable_state() {
        let builder = HttpResponseDouble::new()
            .status(HttpStatus::Accepted)
            .header("Content-Type", "text/plain")
            .body(42_i64);

        let status_before = builder.get_status();
        let code_before = builder.status_code();
        let headers_before = builder.headers().clone();
        let body_before = builder.body_as::<i64>().copied();

        let built = builder.build();

        assert_eq!(built.get_status(), status_before);
        assert_eq!(built.status_code(), code_before);
        assert_eq!(built.headers(), &headers_before);
        assert_eq!(built.body_as::<i64>().copied(), body_before);
    }

    #[test]
    fn test_debug_reports_body_presence() {
        let debug = format!("{:?}", HttpResponseDouble::new().body(()));
        assert!(debug.contains("has_body: true"));
    }
}
