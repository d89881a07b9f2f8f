//! Data Transfer Objects (DTOs) exchanged with the payment API.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::{
    ApplePayToken, CardToken, Hints, PaymentAmount, PaymentCard, PaymentPlan, PaymentTest,
    PaymentUnplanned,
};

// ─────────────────────────────────────────────────────────────────────────────
// Payment creation request
// ─────────────────────────────────────────────────────────────────────────────

/// Merchant public key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentIntegration {
    pub key: String,
}

/// Instrument that funds the payment.
///
/// Serialized into either the `card` or the `applepay` field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum PaymentSource {
    #[serde(rename = "card")]
    Card(PaymentCard),
    #[serde(rename = "applepay")]
    ApplePay(ApplePayToken),
}

/// Request to create a payment.
///
/// `hints` is the only field the payment flow modifies; it grows as the
/// server acknowledges completed challenges.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentRequest {
    pub integration: PaymentIntegration,
    #[serde(flatten)]
    pub source: PaymentSource,
    /// Amount due for immediate reservation
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount: Option<PaymentAmount>,
    /// Sandbox scenario; any value switches the payment to test mode
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test: Option<PaymentTest>,
    /// Statement descriptor, merchant default when absent
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Arbitrary merchant payload
    #[serde(skip_serializing_if = "Option::is_none")]
    pub custom: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub unplanned: Option<PaymentUnplanned>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plan: Option<Vec<PaymentPlan>>,
    #[serde(default)]
    pub hints: Hints,
}

impl CreatePaymentRequest {
    pub fn new(integration_key: impl Into<String>, source: PaymentSource) -> Self {
        Self {
            integration: PaymentIntegration {
                key: integration_key.into(),
            },
            source,
            amount: None,
            test: None,
            text: None,
            custom: None,
            unplanned: None,
            plan: None,
            hints: Hints::new(),
        }
    }

    /// Payment funded by a tokenized card.
    pub fn with_card(integration_key: impl Into<String>, card: PaymentCard) -> Self {
        Self::new(integration_key, PaymentSource::Card(card))
    }

    /// Payment funded by a tokenized Apple Pay token.
    pub fn with_apple_pay(integration_key: impl Into<String>, token: ApplePayToken) -> Self {
        Self::new(integration_key, PaymentSource::ApplePay(token))
    }

    pub fn amount(mut self, amount: PaymentAmount) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn test(mut self, test: PaymentTest) -> Self {
        self.test = Some(test);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn custom(mut self, custom: serde_json::Value) -> Self {
        self.custom = Some(custom);
        self
    }

    pub fn unplanned(mut self, unplanned: PaymentUnplanned) -> Self {
        self.unplanned = Some(unplanned);
        self
    }

    pub fn plan(mut self, plan: Vec<PaymentPlan>) -> Self {
        self.plan = Some(plan);
        self
    }

    /// Seeds the request with hints from an earlier attempt.
    pub fn hints(mut self, hints: impl IntoIterator<Item = String>) -> Self {
        self.hints.merge(hints);
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Payment creation response
// ─────────────────────────────────────────────────────────────────────────────

/// Kind of follow-up request a challenge asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ChallengeType {
    Fetch,
    BackgroundIframe,
    Iframe,
}

/// Server-issued instruction naming the next request of the flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: ChallengeType,
    /// Path relative to the payment API root
    pub path: String,
}

/// One step's response from the payment API.
///
/// Exactly one of `challenges`, `action`/`fields` or the terminal ids
/// drives the flow; `hints` may accompany any of them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub challenges: Option<Vec<Challenge>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hints: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub action: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub method: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fields: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub authorization_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_id: Option<String>,
}

/// Final result of a payment flow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PaylikeClientResponse {
    /// Last response received from the payment API
    pub create_payment_response: CreatePaymentResponse,
    /// Document returned by the form action, when the iframe path was taken
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
}

impl PaylikeClientResponse {
    /// Direct terminal success.
    pub fn new(create_payment_response: CreatePaymentResponse) -> Self {
        Self {
            create_payment_response,
            html_body: None,
        }
    }

    /// Success through the iframe path.
    pub fn with_html(create_payment_response: CreatePaymentResponse, html_body: String) -> Self {
        Self {
            create_payment_response,
            html_body: Some(html_body),
        }
    }

    /// Authorization id, falling back to the transaction id.
    pub fn payment_id(&self) -> Option<&str> {
        self.create_payment_response
            .authorization_id
            .as_deref()
            .or(self.create_payment_response.transaction_id.as_deref())
    }

    /// Hints known at the end of the flow.
    pub fn hints(&self) -> &[String] {
        self.create_payment_response.hints.as_deref().unwrap_or_default()
    }
}

/// Body of a non-2xx response.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<String>>,
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenization
// ─────────────────────────────────────────────────────────────────────────────

/// Which card secret is being tokenized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardDataType {
    /// Payment card number
    Pcn,
    /// Payment card security code
    Pcsc,
}

/// Raw secret to exchange for a vault token.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TokenizeRequest {
    Card {
        #[serde(rename = "type")]
        kind: CardDataType,
        value: String,
    },
    ApplePay {
        token: String,
    },
}

impl TokenizeRequest {
    pub fn card(kind: CardDataType, value: impl Into<String>) -> Self {
        TokenizeRequest::Card {
            kind,
            value: value.into(),
        }
    }

    pub fn apple_pay(token: impl Into<String>) -> Self {
        TokenizeRequest::ApplePay {
            token: token.into(),
        }
    }

    /// Short label used in logs.
    pub fn label(&self) -> &'static str {
        match self {
            TokenizeRequest::Card {
                kind: CardDataType::Pcn,
                ..
            } => "pcn",
            TokenizeRequest::Card {
                kind: CardDataType::Pcsc,
                ..
            } => "pcsc",
            TokenizeRequest::ApplePay { .. } => "applepay",
        }
    }
}

// Secrets stay out of debug output.
impl fmt::Debug for TokenizeRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizeRequest")
            .field("kind", &self.label())
            .finish_non_exhaustive()
    }
}

/// Vault response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizeResponse {
    pub token: String,
}

impl From<TokenizeResponse> for CardToken {
    fn from(response: TokenizeResponse) -> Self {
        CardToken::new(response.token)
    }
}

impl From<TokenizeResponse> for ApplePayToken {
    fn from(response: TokenizeResponse) -> Self {
        ApplePayToken::new(response.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CardExpiry;
    use currency_codes::CurrencyCode;
    use serde_json::json;

    fn card() -> PaymentCard {
        PaymentCard::new(
            CardToken::new("pcn-token"),
            CardToken::new("pcsc-token"),
            CardExpiry::new(11, 23).unwrap(),
        )
    }

    #[test]
    fn test_card_request_wire_shape() {
        let request = CreatePaymentRequest::with_card("merchant-key", card())
            .amount(PaymentAmount::new(CurrencyCode::EUR, 1, 0))
            .test(PaymentTest::default());

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "integration": { "key": "merchant-key" },
                "card": {
                    "number": { "token": "pcn-token" },
                    "code": { "token": "pcsc-token" },
                    "expiry": { "month": 11, "year": 2023 }
                },
                "amount": { "currency": "EUR", "value": 1, "exponent": 0 },
                "test": {},
                "hints": []
            })
        );
    }

    #[test]
    fn test_apple_pay_request_wire_shape() {
        let request = CreatePaymentRequest::with_apple_pay("key", ApplePayToken::new("ap"))
            .hints(vec!["h0".to_string()]);
        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(
            json,
            json!({
                "integration": { "key": "key" },
                "applepay": { "token": "ap" },
                "hints": ["h0"]
            })
        );
    }

    #[test]
    fn test_request_round_trips_through_json() {
        let request = CreatePaymentRequest::with_card("key", card()).text("order 42");
        let json = serde_json::to_string(&request).unwrap();
        let back: CreatePaymentRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back.source, request.source);
        assert_eq!(back.text.as_deref(), Some("order 42"));
    }

    #[test]
    fn test_response_decodes_camel_case_fields() {
        let response: CreatePaymentResponse = serde_json::from_value(json!({
            "challenges": [
                { "name": "tds-fingerprint", "type": "background-iframe", "path": "/p/tds" },
                { "name": "authorize", "type": "fetch", "path": "/p/auth" }
            ],
            "authorizationId": "auth-1"
        }))
        .unwrap();

        let challenges = response.challenges.unwrap();
        assert_eq!(challenges[0].kind, ChallengeType::BackgroundIframe);
        assert_eq!(challenges[1].kind, ChallengeType::Fetch);
        assert_eq!(response.authorization_id.as_deref(), Some("auth-1"));
    }

    #[test]
    fn test_payment_id_prefers_authorization() {
        let mut response = CreatePaymentResponse {
            transaction_id: Some("tx".into()),
            ..Default::default()
        };
        assert_eq!(PaylikeClientResponse::new(response.clone()).payment_id(), Some("tx"));

        response.authorization_id = Some("auth".into());
        assert_eq!(PaylikeClientResponse::new(response).payment_id(), Some("auth"));
    }

    #[test]
    fn test_tokenize_request_wire_shapes() {
        let card = serde_json::to_value(TokenizeRequest::card(CardDataType::Pcn, "4100")).unwrap();
        assert_eq!(card, json!({ "type": "pcn", "value": "4100" }));

        let apple = serde_json::to_value(TokenizeRequest::apple_pay("blob")).unwrap();
        assert_eq!(apple, json!({ "token": "blob" }));
    }

    #[test]
    fn test_tokenize_request_debug_hides_value() {
        let debug = format!("{:?}", TokenizeRequest::card(CardDataType::Pcsc, "123"));
        assert!(debug.contains("pcsc"));
        assert!(!debug.contains("123"));
    }
}
