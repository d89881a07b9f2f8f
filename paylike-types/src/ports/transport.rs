//! HTTP transport port.
//!
//! Adapters (reqwest, scripted test doubles) implement this trait. One call
//! performs one HTTP exchange and is never retried.

use crate::error::TransportError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Post,
}

/// Encoded request body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpBody {
    /// `application/json`
    Json(Vec<u8>),
    /// `application/x-www-form-urlencoded`
    Form(String),
}

impl HttpBody {
    /// Value for the `Content-Type` header.
    pub fn content_type(&self) -> &'static str {
        match self {
            HttpBody::Json(_) => "application/json",
            HttpBody::Form(_) => "application/x-www-form-urlencoded",
        }
    }

    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            HttpBody::Json(bytes) => bytes,
            HttpBody::Form(form) => form.into_bytes(),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HttpBody::Json(bytes) => bytes,
            HttpBody::Form(form) => form.as_bytes(),
        }
    }
}

/// A fully built outbound request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: HttpBody,
}

impl HttpRequest {
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Status code and raw body of a completed exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: Vec<u8>,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Performs single HTTP exchanges for the payment flow.
///
/// Implementations must honour their configured per-call timeout and report
/// it as `TransportError::Timeout`.
#[async_trait::async_trait]
pub trait HttpTransport: Send + Sync + 'static {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError>;
}
