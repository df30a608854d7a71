//! The HTTP request double.

use crate::response::HttpResponseDouble;
use function_host::{HttpRequestMessage, HttpResponseMessageBuilder, HttpStatus, HttpStatusType};
use http::{Method, Uri};
use std::collections::HashMap;

/// An [`HttpRequestMessage`] holding exactly the values it was built with.
///
/// The header and query maps are moved in as given, so the request owns what
/// the caller handed it. Keys keep their original case.
#[derive(Debug, Clone)]
pub struct HttpRequestDouble<T> {
    uri: Uri,
    method: Method,
    headers: HashMap<String, String>,
    query_parameters: HashMap<String, String>,
    body: T,
}

impl<T> HttpRequestDouble<T> {
    /// Creates a request from literal values.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_host_doubles::{
    ///     HttpRequestDouble, HttpRequestMessage, HttpResponseMessage, HttpStatus, Method, Uri,
    /// };
    /// use std::collections::HashMap;
    ///
    /// let request = HttpRequestDouble::new(
    ///     Uri::from_static("https://example.com/api/orders?id=7"),
    ///     Method::GET,
    ///     HashMap::new(),
    ///     HashMap::from([("id".to_string(), "7".to_string())]),
    ///     None::<String>,
    /// );
    ///
    /// let response = request.create_response_builder(HttpStatus::Ok);
    /// assert_eq!(response.status_code(), 200);
    /// ```
    pub fn new(
        uri: Uri,
        method: Method,
        headers: HashMap<String, String>,
        query_parameters: HashMap<String, String>,
        body: T,
    ) -> Self {
        Self {
            uri,
            method,
            headers,
            query_parameters,
            body,
        }
    }

    /// Consumes the request and returns its body.
    pub fn into_body(self) -> T {
        self.body
    }
}

impl<T> HttpRequestMessage for HttpRequestDouble<T> {
    type Body = T;
    type ResponseBuilder = HttpResponseDouble;

    fn uri(&self) -> &Uri {
        &self.uri
    }

    fn method(&self) -> &Method {
        &self.method
    }

    fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    fn query_parameters(&self) -> &HashMap<String, String> {
        &self.query_parameters
    }

    fn body(&self) -> &T {
        &self.body
    }

    fn create_response_builder(&self, status: HttpStatus) -> HttpResponseDouble {
        HttpResponseDouble::new().status(status)
    }

    fn create_response_builder_with_type(
        &self,
        status_type: HttpStatusType,
    ) -> HttpResponseDouble {
        HttpResponseDouble::new().status_type(status_type)
    }
}
