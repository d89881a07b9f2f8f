//! Vault tokenization.
//!
//! Card numbers, security codes and Apple Pay tokens are exchanged for
//! opaque tokens before they are attached to a payment.

use paylike_types::{
    ApplePayToken, CardDataType, CardExpiry, CardToken, ClientError, HttpTransport, PaymentCard,
    TokenizeRequest, TokenizeResponse,
};
use tracing::{debug, instrument};

use crate::classify::decode;
use crate::request;
use crate::service::PaymentFlow;

impl<T: HttpTransport> PaymentFlow<T> {
    /// Sends one tokenization request and returns the vault token.
    #[instrument(skip(self, data), fields(kind = data.label()))]
    pub async fn tokenize(&self, data: &TokenizeRequest) -> Result<TokenizeResponse, ClientError> {
        let http = request::tokenize_request(&self.config, data)?;
        let response = self.transport.send(http).await?;
        let token: TokenizeResponse = decode(&response)?;
        debug!("tokenized");
        Ok(token)
    }

    /// Tokenizes a card number (`Pcn`) or security code (`Pcsc`).
    pub async fn tokenize_card_data(
        &self,
        kind: CardDataType,
        value: impl Into<String>,
    ) -> Result<CardToken, ClientError> {
        self.tokenize(&TokenizeRequest::card(kind, value))
            .await
            .map(CardToken::from)
    }

    pub async fn tokenize_apple_pay(
        &self,
        token: impl Into<String>,
    ) -> Result<ApplePayToken, ClientError> {
        self.tokenize(&TokenizeRequest::apple_pay(token))
            .await
            .map(ApplePayToken::from)
    }

    /// Tokenizes number and security code concurrently and assembles the card.
    pub async fn tokenize_card(
        &self,
        number: &str,
        security_code: &str,
        expiry: CardExpiry,
    ) -> Result<PaymentCard, ClientError> {
        let (number, code) = tokio::try_join!(
            self.tokenize_card_data(CardDataType::Pcn, number),
            self.tokenize_card_data(CardDataType::Pcsc, security_code),
        )?;
        Ok(PaymentCard::new(number, code, expiry))
    }
}
