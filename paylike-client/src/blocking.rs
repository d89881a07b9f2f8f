//! Blocking facade over [`PaylikeClient`].
//!
//! Every method drives the async operation to completion on a private
//! current-thread runtime. Do not call from inside another tokio runtime.

use std::future::Future;

use paylike_types::{
    ApplePayToken, CardDataType, CardExpiry, CardToken, ClientConfig, ClientError,
    CreatePaymentRequest, PaylikeClientResponse, PaymentCard, TokenizeRequest, TokenizeResponse,
    TransportError,
};
use tokio::runtime::{Builder, Runtime};

use crate::PaylikeClient;

pub struct BlockingClient {
    inner: PaylikeClient,
    runtime: Runtime,
}

impl BlockingClient {
    pub fn new() -> Result<Self, ClientError> {
        Self::from_async(PaylikeClient::new()?)
    }

    pub fn with_config(config: ClientConfig) -> Result<Self, ClientError> {
        Self::from_async(PaylikeClient::with_config(config)?)
    }

    pub fn from_async(inner: PaylikeClient) -> Result<Self, ClientError> {
        let runtime = Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| TransportError::Request(format!("runtime: {e}")))?;
        Ok(Self { inner, runtime })
    }

    pub fn inner(&self) -> &PaylikeClient {
        &self.inner
    }

    /// Blocks the current thread until `future` completes.
    pub fn run<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }

    pub fn create_payment(
        &self,
        request: &mut CreatePaymentRequest,
    ) -> Result<PaylikeClientResponse, ClientError> {
        self.run(self.inner.create_payment(request))
    }

    pub fn tokenize(&self, data: &TokenizeRequest) -> Result<TokenizeResponse, ClientError> {
        self.run(self.inner.tokenize(data))
    }

    pub fn tokenize_card_data(
        &self,
        kind: CardDataType,
        value: impl Into<String>,
    ) -> Result<CardToken, ClientError> {
        self.run(self.inner.tokenize_card_data(kind, value))
    }

    pub fn tokenize_apple_pay(&self, token: impl Into<String>) -> Result<ApplePayToken, ClientError> {
        self.run(self.inner.tokenize_apple_pay(token))
    }

    pub fn tokenize_card(
        &self,
        number: &str,
        security_code: &str,
        expiry: CardExpiry,
    ) -> Result<PaymentCard, ClientError> {
        self.run(self.inner.tokenize_card(number, security_code, expiry))
    }
}
