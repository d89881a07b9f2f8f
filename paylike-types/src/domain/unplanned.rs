//! Unplanned subsequent payment flags.

use serde::{Deserialize, Serialize};

/// Declares who may initiate unplanned follow-up charges on the card.
///
/// The API spells the customer flag `costumer`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentUnplanned {
    #[serde(rename = "costumer", skip_serializing_if = "Option::is_none")]
    pub customer: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub merchant: Option<bool>,
}

impl PaymentUnplanned {
    /// Charges initiated by the customer from the merchant's site or app.
    pub fn customer(enabled: bool) -> Self {
        Self {
            customer: Some(enabled),
            merchant: None,
        }
    }

    /// Charges initiated by the merchant or an off-site customer.
    pub fn merchant(enabled: bool) -> Self {
        Self {
            customer: None,
            merchant: Some(enabled),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_customer_flag_uses_api_spelling() {
        let json = serde_json::to_string(&PaymentUnplanned::customer(true)).unwrap();
        assert_eq!(json, r#"{"costumer":true}"#);
    }
}
