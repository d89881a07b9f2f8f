//! Sandbox test scenarios.
//!
//! Attaching a `PaymentTest` (even an empty one) to a request runs the
//! payment in test mode; the optional fields select a canned outcome.

use serde::{Deserialize, Serialize};

use super::money::PaymentAmount;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PaymentTest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub card: Option<TestCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<FingerprintOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tds: Option<TestTds>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FingerprintOption {
    Success,
    Timeout,
}

/// Simulated card behaviour.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TestCard {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub balance: Option<PaymentAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<CardCodeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<PaymentAmount>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheme: Option<CardSchemeOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<CardStatusOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardCodeOption {
    Invalid,
    Valid,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardSchemeOption {
    Supported,
    Unknown,
    Unsupported,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardStatusOption {
    Disabled,
    Expired,
    Invalid,
    Lost,
    Valid,
}

/// Simulated 3-D Secure behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestTds {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub challenge: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fingerprint: Option<TdsFingerprintOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TdsStatusOption>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TdsFingerprintOption {
    Success,
    Timeout,
    Unavailable,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TdsStatusOption {
    Authenticated,
    Attempted,
    Rejected,
    Unavailable,
}
