//! Transport port for performing HTTP requests.
//!
//! The messaging client depends only on this capability: send one request,
//! receive a status and a normalised body.

use crate::message::error::TransportError;
use async_trait::async_trait;
use serde_json::Value;
use std::collections::BTreeMap;

/// Result type for transport operations.
pub type TransportResult<T> = Result<T, TransportError>;

/// HTTP method of a transport request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// `GET`
    Get,
    /// `POST`
    Post,
    /// `PUT`
    Put,
    /// `DELETE`
    Delete,
}

impl HttpMethod {
    /// Returns the method name.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// The HTTP method.
    pub method: HttpMethod,
    /// Absolute URL.
    pub url: String,
    /// Extra headers. The transport adds `Content-Type` itself.
    pub headers: BTreeMap<String, String>,
    /// JSON body, if any.
    pub body: Option<Value>,
}

impl HttpRequest {
    /// Creates a request without headers or body.
    #[must_use]
    pub fn new(method: HttpMethod, url: impl Into<String>) -> Self {
        Self {
            method,
            url: url.into(),
            headers: BTreeMap::new(),
            body: None,
        }
    }

    /// Adds a header.
    #[must_use]
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// Sets the JSON body.
    #[must_use]
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// Response body, decoded according to the response content type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseData {
    /// Body of a response declaring `application/json`.
    Json(Value),
    /// Raw body of any other response.
    Text(String),
}

impl ResponseData {
    /// Serialises the body as JSON; text bodies become JSON strings.
    #[must_use]
    pub fn to_json_string(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Text(text) => Value::String(text.clone()).to_string(),
        }
    }
}

/// A normalised response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub status: u16,
    /// The decoded body.
    pub data: ResponseData,
}

impl HttpResponse {
    /// Creates a response.
    #[must_use]
    pub const fn new(status: u16, data: ResponseData) -> Self {
        Self { status, data }
    }

    /// Returns `true` for status codes of 400 and above.
    #[must_use]
    pub const fn is_failure(&self) -> bool {
        self.status >= 400
    }
}

/// Port for performing HTTP requests.
///
/// Implementations report every response they receive, whatever its
/// status; only failures to obtain a response are errors. Timeouts and
/// cancellation, if wanted, belong to the implementation.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Performs one request.
    ///
    /// # Errors
    ///
    /// Returns `TransportError` if the request cannot be sent, the response
    /// cannot be read, or a JSON response does not parse.
    async fn request(&self, request: HttpRequest) -> TransportResult<HttpResponse>;
}
