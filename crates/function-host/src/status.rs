//! HTTP status vocabulary of the function host.
//!
//! The host exposes two status representations:
//!
//! - [`HttpStatus`] - the coarse, enumerated set of well-known statuses
//! - [`HttpStatusType`] - an exact status carrying any numeric code, including
//!   codes the enumeration does not name
//!
//! Numeric codes are never tabulated here; every [`HttpStatus`] variant maps
//! onto the canonical [`http::StatusCode`] constant of the same name.

use http::StatusCode;
use std::fmt;

macro_rules! http_statuses {
    ($($(#[$meta:meta])* $variant:ident => $code:ident,)+) => {
        /// Well-known HTTP statuses understood by the function host.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum HttpStatus {
            $($(#[$meta])* $variant,)+
        }

        impl HttpStatus {
            /// Every enumerated status, in ascending code order.
            pub const ALL: &'static [HttpStatus] = &[$(HttpStatus::$variant,)+];

            /// Returns the canonical status code for this status.
            pub const fn as_status_code(self) -> StatusCode {
                match self {
                    $(HttpStatus::$variant => StatusCode::$code,)+
                }
            }

            /// Looks up the enumerated status for a canonical status code.
            ///
            /// Returns `None` for codes the enumeration does not name.
            pub fn from_status_code(code: StatusCode) -> Option<Self> {
                match code {
                    $(StatusCode::$code => Some(HttpStatus::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

http_statuses! {
    /// 100 Continue
    Continue => CONTINUE,
    /// 101 Switching Protocols
    SwitchingProtocols => SWITCHING_PROTOCOLS,
    /// 102 Processing
    Processing => PROCESSING,
    /// 200 OK
    Ok => OK,
    /// 201 Created
    Created => CREATED,
    /// 202 Accepted
    Accepted => ACCEPTED,
    /// 203 Non-Authoritative Information
    NonAuthoritativeInformation => NON_AUTHORITATIVE_INFORMATION,
    /// 204 No Content
    NoContent => NO_CONTENT,
    /// 205 Reset Content
    ResetContent => RESET_CONTENT,
    /// 206 Partial Content
    PartialContent => PARTIAL_CONTENT,
    /// 207 Multi-Status
    MultiStatus => MULTI_STATUS,
    /// 208 Already Reported
    AlreadyReported => ALREADY_REPORTED,
    /// 226 IM Used
    ImUsed => IM_USED,
    /// 300 Multiple Choices
    MultipleChoices => MULTIPLE_CHOICES,
    /// 301 Moved Permanently
    MovedPermanently => MOVED_PERMANENTLY,
    /// 302 Found
    Found => FOUND,
    /// 303 See Other
    SeeOther => SEE_OTHER,
    /// 304 Not Modified
    NotModified => NOT_MODIFIED,
    /// 305 Use Proxy
    UseProxy => USE_PROXY,
    /// 307 Temporary Redirect
    TemporaryRedirect => TEMPORARY_REDIRECT,
    /// 308 Permanent Redirect
    PermanentRedirect => PERMANENT_REDIRECT,
    /// 400 Bad Request
    BadRequest => BAD_REQUEST,
    /// 401 Unauthorized
    Unauthorized => UNAUTHORIZED,
    /// 402 Payment Required
    PaymentRequired => PAYMENT_REQUIRED,
    /// 403 Forbidden
    Forbidden => FORBIDDEN,
    /// 404 Not Found
    NotFound => NOT_FOUND,
    /// 405 Method Not Allowed
    MethodNotAllowed => METHOD_NOT_ALLOWED,
    /// 406 Not Acceptable
    NotAcceptable => NOT_ACCEPTABLE,
    /// 407 Proxy Authentication Required
    ProxyAuthenticationRequired => PROXY_AUTHENTICATION_REQUIRED,
    /// 408 Request Timeout
    RequestTimeout => REQUEST_TIMEOUT,
    /// 409 Conflict
    Conflict => CONFLICT,
    /// 410 Gone
    Gone => GONE,
    /// 411 Length Required
    LengthRequired => LENGTH_REQUIRED,
    /// 412 Precondition Failed
    PreconditionFailed => PRECONDITION_FAILED,
    /// 413 Payload Too Large
    PayloadTooLarge => PAYLOAD_TOO_LARGE,
    /// 414 URI Too Long
    UriTooLong => URI_TOO_LONG,
    /// 415 Unsupported Media Type
    UnsupportedMediaType => UNSUPPORTED_MEDIA_TYPE,
    /// 416 Range Not Satisfiable
    RangeNotSatisfiable => RANGE_NOT_SATISFIABLE,
    /// 417 Expectation Failed
    ExpectationFailed => EXPECTATION_FAILED,
    /// 421 Misdirected Request
    MisdirectedRequest => MISDIRECTED_REQUEST,
    /// 422 Unprocessable Entity
    UnprocessableEntity => UNPROCESSABLE_ENTITY,
    /// 423 Locked
    Locked => LOCKED,
    /// 424 Failed Dependency
    FailedDependency => FAILED_DEPENDENCY,
    /// 426 Upgrade Required
    UpgradeRequired => UPGRADE_REQUIRED,
    /// 428 Precondition Required
    PreconditionRequired => PRECONDITION_REQUIRED,
    /// 429 Too Many Requests
    TooManyRequests => TOO_MANY_REQUESTS,
    /// 431 Request Header Fields Too Large
    RequestHeaderFieldsTooLarge => REQUEST_HEADER_FIELDS_TOO_LARGE,
    /// 451 Unavailable For Legal Reasons
    UnavailableForLegalReasons => UNAVAILABLE_FOR_LEGAL_REASONS,
    /// 500 Internal Server Error
    InternalServerError => INTERNAL_SERVER_ERROR,
    /// 501 Not Implemented
    NotImplemented => NOT_IMPLEMENTED,
    /// 502 Bad Gateway
    BadGateway => BAD_GATEWAY,
    /// 503 Service Unavailable
    ServiceUnavailable => SERVICE_UNAVAILABLE,
    /// 504 Gateway Timeout
    GatewayTimeout => GATEWAY_TIMEOUT,
    /// 505 HTTP Version Not Supported
    HttpVersionNotSupported => HTTP_VERSION_NOT_SUPPORTED,
    /// 506 Variant Also Negotiates
    VariantAlsoNegotiates => VARIANT_ALSO_NEGOTIATES,
    /// 507 Insufficient Storage
    InsufficientStorage => INSUFFICIENT_STORAGE,
    /// 508 Loop Detected
    LoopDetected => LOOP_DETECTED,
    /// 510 Not Extended
    NotExtended => NOT_EXTENDED,
    /// 511 Network Authentication Required
    NetworkAuthenticationRequired => NETWORK_AUTHENTICATION_REQUIRED,
}

impl HttpStatus {
    /// Returns the numeric code of this status.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_host::HttpStatus;
    ///
    /// assert_eq!(HttpStatus::Ok.value(), 200);
    /// assert_eq!(HttpStatus::InternalServerError.value(), 500);
    /// ```
    pub fn value(self) -> u16 {
        self.as_status_code().as_u16()
    }
}

impl fmt::Display for HttpStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_status_code())
    }
}

impl From<HttpStatus> for StatusCode {
    fn from(status: HttpStatus) -> Self {
        status.as_status_code()
    }
}

/// An exact HTTP status identified only by its numeric code.
///
/// Unlike [`HttpStatus`] this accepts any code, which lets handlers answer
/// with statuses the enumeration does not name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HttpStatusType {
    code: u16,
}

impl HttpStatusType {
    /// Creates a status type for an arbitrary code.
    ///
    /// No range check is applied.
    ///
    /// # Examples
    ///
    /// ```
    /// use function_host::HttpStatusType;
    ///
    /// assert_eq!(HttpStatusType::custom(299).value(), 299);
    /// ```
    pub const fn custom(code: u16) -> Self {
        Self { code }
    }

    /// Returns the numeric code.
    pub const fn value(self) -> u16 {
        self.code
    }

    /// Returns the canonical status code, if the code is in the valid range.
    pub fn as_status_code(self) -> Option<StatusCode> {
        StatusCode::from_u16(self.code).ok()
    }
}

impl From<HttpStatus> for HttpStatusType {
    fn from(status: HttpStatus) -> Self {
        Self::custom(status.value())
    }
}

impl From<StatusCode> for HttpStatusType {
    fn from(code: StatusCode) -> Self {
        Self::custom(code.as_u16())
    }
}

impl fmt::Display for HttpStatusType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_status_code() {
            Some(code) => write!(f, "{}", code),
            None => write!(f, "{}", self.code),
        }
    }
}

/// The status held by a response, in whichever representation was last set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResponseStatus {
    /// Set through the enumerated representation.
    Status(HttpStatus),
    /// Set through the exact representation.
    Type(HttpStatusType),
}

impl ResponseStatus {
    /// Returns the numeric code of the held status.
    pub fn code(self) -> u16 {
        match self {
            ResponseStatus::Status(status) => status.value(),
            ResponseStatus::Type(status_type) => status_type.value(),
        }
    }
}

impl Default for ResponseStatus {
    fn default() -> Self {
        ResponseStatus::Status(HttpStatus::Ok)
    }
}

impl From<HttpStatus> for ResponseStatus {
    fn from(status: HttpStatus) -> Self {
        ResponseStatus::Status(status)
    }
}

impl From<HttpStatusType> for ResponseStatus {
    fn from(status_type: HttpStatusType) -> Self {
        ResponseStatus::Type(status_type)
    }
}

impl PartialEq<HttpStatus> for ResponseStatus {
    fn eq(&self, other: &HttpStatus) -> bool {
        matches!(self, ResponseStatus::Status(status) if status == other)
    }
}

impl PartialEq<HttpStatusType> for ResponseStatus {
    fn eq(&self, other: &HttpStatusType) -> bool {
        matches!(self, ResponseStatus::Type(status_type) if status_type == other)
    }
}

impl fmt::Display for ResponseStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResponseStatus::Status(status) => write!(f, "{}", status),
            ResponseStatus::Type(status_type) => write!(f, "{}", status_type),
        }
    }
}
