//! `reqwest` adapter for the `HttpTransport` port.

use std::time::Duration;

use async_trait::async_trait;
use paylike_types::{HttpMethod, HttpRequest, HttpResponse, HttpTransport, TransportError};
use reqwest::Client;
use reqwest::header::CONTENT_TYPE;
use tracing::trace;

/// Sends flow requests through a pooled `reqwest::Client`.
///
/// Cheap to clone; clones share the connection pool.
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: Client,
}

impl ReqwestTransport {
    /// Builds a client whose every call is bounded by `timeout`.
    pub fn new(timeout: Duration) -> Result<Self, TransportError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(map_error)?;
        Ok(Self { http })
    }

    /// Wraps an existing client. Its own timeout settings apply.
    pub fn from_client(http: Client) -> Self {
        Self { http }
    }
}

fn map_error(err: reqwest::Error) -> TransportError {
    if err.is_timeout() {
        TransportError::Timeout
    } else {
        TransportError::Request(err.to_string())
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let method = match request.method {
            HttpMethod::Post => reqwest::Method::POST,
        };

        let mut builder = self.http.request(method, request.url.as_str());
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        builder = builder
            .header(CONTENT_TYPE, request.body.content_type())
            .body(request.body.into_bytes());

        let response = builder.send().await.map_err(map_error)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(map_error)?;
        trace!(url = %request.url, status, bytes = body.len(), "http exchange");

        Ok(HttpResponse::new(status, body.to_vec()))
    }
}
