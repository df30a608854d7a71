//! HTTP request and response contracts of an HTTP-triggered function.
//!
//! A request knows how to spawn response builders. A builder accumulates
//! status, headers and body through chained calls and is finalised with
//! [`HttpResponseMessageBuilder::build`].

use crate::status::{HttpStatus, HttpStatusType, ResponseStatus};
use http::{Method, Uri};
use std::any::Any;
use std::collections::HashMap;

/// Opaque response payload.
pub type ResponseBody = dyn Any + Send + Sync;

/// The response message produced by a request's builder.
pub type ResponseOf<R> =
    <<R as HttpRequestMessage>::ResponseBuilder as HttpResponseMessageBuilder>::Message;

/// An inbound HTTP request delivered to a function.
pub trait HttpRequestMessage {
    /// Request payload type.
    type Body;

    /// Builder spawned by [`create_response_builder`](Self::create_response_builder).
    type ResponseBuilder: HttpResponseMessageBuilder;

    /// Request URI.
    fn uri(&self) -> &Uri;

    /// Request method.
    fn method(&self) -> &Method;

    /// Request headers, keyed exactly as supplied.
    fn headers(&self) -> &HashMap<String, String>;

    /// Query string parameters.
    fn query_parameters(&self) -> &HashMap<String, String>;

    /// Request payload.
    fn body(&self) -> &Self::Body;

    /// Creates a fresh response builder preset to an enumerated status.
    fn create_response_builder(&self, status: HttpStatus) -> Self::ResponseBuilder;

    /// Creates a fresh response builder preset to an exact status.
    fn create_response_builder_with_type(
        &self,
        status_type: HttpStatusType,
    ) -> Self::ResponseBuilder;
}

/// A finalised HTTP response, as seen by whoever inspects it.
pub trait HttpResponseMessage {
    /// The status in the representation it was last set with.
    fn get_status(&self) -> ResponseStatus;

    /// The numeric code of [`get_status`](Self::get_status).
    fn status_code(&self) -> u16;

    /// Looks up a header value by its exact key.
    fn get_header(&self, key: &str) -> Option<&str>;

    /// The response payload, if one was set.
    fn get_body(&self) -> Option<&ResponseBody>;

    /// The response payload downcast to a concrete type.
    ///
    /// Returns `None` if no body was set or it has a different type.
    fn body_as<B: Any>(&self) -> Option<&B>
    where
        Self: Sized,
    {
        self.get_body()?.downcast_ref::<B>()
    }
}

/// Fluent construction of an [`HttpResponseMessage`].
pub trait HttpResponseMessageBuilder: Sized {
    /// The message produced by [`build`](Self::build).
    type Message: HttpResponseMessage;

    /// Sets the status from the enumerated representation.
    fn status(self, status: HttpStatus) -> Self;

    /// Sets the status from the exact representation.
    fn status_type(self, status_type: HttpStatusType) -> Self;

    /// Sets one header, replacing any value already stored under `key`.
    fn header(self, key: impl Into<String>, value: impl Into<String>) -> Self;

    /// Sets the response payload.
    fn body<B: Any + Send + Sync>(self, body: B) -> Self;

    /// Finalises the response.
    fn build(self) -> Self::Message;
}
