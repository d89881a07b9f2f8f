//! Error types for the payment client.

use crate::dto::{CreatePaymentRequest, CreatePaymentResponse};

/// Domain-level errors (invalid values rejected before any network call).
#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Unsafe number: {0}")]
    UnsafeNumber(f64),

    #[error("Invalid expiry date: {month}/{year}")]
    InvalidExpiry { month: u32, year: u32 },
}

/// Transport-level errors (a single HTTP call did not produce a response).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    #[error("Request timed out")]
    Timeout,

    #[error("Transport error: {0}")]
    Request(String),
}

/// Errors surfaced to callers of the payment flow.
///
/// Every variant is terminal for the flow that raised it.
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("Malformed response body (status {status}): {reason}")]
    MalformedResponse { status: u16, reason: String },

    #[error(
        "Paylike server error. StatusCode: {status_code}, Code: {}, Errors: {}, Message: {}",
        .code.as_deref().unwrap_or("-"),
        joined_or_dash(.errors),
        .message.as_deref().unwrap_or("-")
    )]
    Server {
        message: Option<String>,
        code: Option<String>,
        status_code: u16,
        errors: Vec<String>,
    },

    #[error("Unexpected payment flow")]
    UnexpectedFlow {
        request: Box<CreatePaymentRequest>,
        response: Option<Box<CreatePaymentResponse>>,
    },

    #[error("Payment flow did not settle within {limit} requests")]
    TooManyIterations { limit: usize },

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn joined_or_dash(errors: &[String]) -> String {
    if errors.is_empty() {
        "-".to_string()
    } else {
        errors.join(" ")
    }
}

impl ClientError {
    /// Builds an `UnexpectedFlow` error from the last known request and response.
    pub fn unexpected_flow(
        request: &CreatePaymentRequest,
        response: Option<CreatePaymentResponse>,
    ) -> Self {
        ClientError::UnexpectedFlow {
            request: Box::new(request.clone()),
            response: response.map(Box::new),
        }
    }

    /// Returns true when an HTTP call hit the configured timeout.
    pub fn is_timeout(&self) -> bool {
        matches!(self, ClientError::Transport(TransportError::Timeout))
    }
}
