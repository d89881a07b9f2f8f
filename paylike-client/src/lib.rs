//! # Paylike Client SDK
//!
//! A typed Rust client for the Paylike payment flow.
//!
//! ```no_run
//! use paylike_client::{CardExpiry, CreatePaymentRequest, CurrencyCode, PaylikeClient, PaymentAmount};
//!
//! # async fn run() -> Result<(), paylike_client::ClientError> {
//! let client = PaylikeClient::new()?;
//! let card = client
//!     .tokenize_card("4100000000000000", "111", CardExpiry::new(12, 26)?)
//!     .await?;
//! let mut request = CreatePaymentRequest::with_card("integration-key", card)
//!     .amount(PaymentAmount::from_decimal(CurrencyCode::EUR, 12.34)?);
//! let result = client.create_payment(&mut request).await?;
//! println!("{:?}", result.payment_id());
//! # Ok(())
//! # }
//! ```

pub mod blocking;
pub mod identity;
pub mod transport;

use paylike_flow::PaymentFlow;
use tracing::info;

pub use blocking::BlockingClient;
pub use identity::generate_client_id;
pub use transport::ReqwestTransport;

pub use paylike_types::*;

/// Payment flow client backed by `reqwest`.
pub struct PaylikeClient {
    flow: PaymentFlow<ReqwestTransport>,
}

impl PaylikeClient {
    /// Creates a client with default hosts and a freshly generated client id.
    pub fn new() -> Result<Self, ClientError> {
        Self::with_config(ClientConfig::new(generate_client_id()))
    }

    /// Creates a client from an explicit configuration.
    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        let transport = ReqwestTransport::new(config.timeout)?;
        info!(client_id = %config.client_id, api = %config.hosts.api, "paylike client ready");
        Ok(Self::with_transport(transport, config))
    }

    /// Uses a preconfigured transport, e.g. one sharing a `reqwest::Client`.
    pub fn with_transport(transport: ReqwestTransport, config: ClientConfig) -> Self {
        Self {
            flow: PaymentFlow::new(transport, config),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.flow.config()
    }

    pub fn client_id(&self) -> &str {
        &self.flow.config().client_id
    }

    /// Runs a payment flow to completion.
    ///
    /// Hints collected along the way are left in `request.hints`.
    pub async fn create_payment(
        &self,
        request: &mut CreatePaymentRequest,
    ) -> Result<PaylikeClientResponse, ClientError> {
        self.flow.create_payment(request).await
    }

    pub async fn tokenize(&self, data: &TokenizeRequest) -> Result<TokenizeResponse, ClientError> {
        self.flow.tokenize(data).await
    }

    pub async fn tokenize_card_data(
        &self,
        kind: CardDataType,
        value: impl Into<String>,
    ) -> Result<CardToken, ClientError> {
        self.flow.tokenize_card_data(kind, value).await
    }

    pub async fn tokenize_apple_pay(
        &self,
        token: impl Into<String>,
    ) -> Result<ApplePayToken, ClientError> {
        self.flow.tokenize_apple_pay(token).await
    }

    /// Tokenizes number and security code concurrently.
    pub async fn tokenize_card(
        &self,
        number: &str,
        security_code: &str,
        expiry: CardExpiry,
    ) -> Result<PaymentCard, ClientError> {
        self.flow.tokenize_card(number, security_code, expiry).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_client_creation() {
        let client = PaylikeClient::new().unwrap();
        assert!(client.client_id().starts_with("rust-1-"));
        assert_eq!(client.config().hosts, Hosts::default());
    }

    #[test]
    fn test_client_with_config() {
        let config = ClientConfig::new("rust-1-abcdef")
            .with_timeout(Duration::from_secs(3))
            .with_api_url("http://localhost:3000");
        let client = PaylikeClient::with_config(config).unwrap();
        assert_eq!(client.client_id(), "rust-1-abcdef");
        assert_eq!(client.config().timeout, Duration::from_secs(3));
        assert_eq!(client.config().hosts.api, "http://localhost:3000");
    }
}
