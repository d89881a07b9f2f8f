//! Card and wallet data accepted by the payment API.
//!
//! Raw card numbers never appear here: every secret is exchanged for an
//! opaque vault token before it is attached to a payment.

use serde::{Deserialize, Serialize};

use crate::error::DomainError;

/// Vault token for a card number or a card security code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardToken {
    pub token: String,
}

impl CardToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Vault token for an Apple Pay payment token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplePayToken {
    pub token: String,
}

impl ApplePayToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

/// Validated card expiry.
///
/// Two-digit years are normalized into the 2000s.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardExpiry {
    month: u32,
    year: u32,
}

impl CardExpiry {
    /// Accepts months `1..=12` and years `1..=99` or `2001..=2099`.
    pub fn new(month: u32, year: u32) -> Result<Self, DomainError> {
        let month_ok = (1..=12).contains(&month);
        let year_ok = (1..=99).contains(&year) || (2001..=2099).contains(&year);
        if !month_ok || !year_ok {
            return Err(DomainError::InvalidExpiry { month, year });
        }

        Ok(Self {
            month,
            year: if year <= 99 { year + 2000 } else { year },
        })
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    /// Four-digit year.
    pub fn year(&self) -> u32 {
        self.year
    }
}

/// Tokenized card attached to a payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentCard {
    /// Tokenized card number
    pub number: CardToken,
    /// Tokenized security code
    pub code: CardToken,
    pub expiry: CardExpiry,
}

impl PaymentCard {
    pub fn new(number: CardToken, code: CardToken, expiry: CardExpiry) -> Self {
        Self {
            number,
            code,
            expiry,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry_two_digit_year_is_normalized() {
        let expiry = CardExpiry::new(11, 23).unwrap();
        assert_eq!(expiry.month(), 11);
        assert_eq!(expiry.year(), 2023);
    }

    #[test]
    fn test_expiry_four_digit_year_is_kept() {
        let expiry = CardExpiry::new(1, 2099).unwrap();
        assert_eq!(expiry.year(), 2099);
    }

    #[test]
    fn test_expiry_rejects_invalid_month() {
        for month in [0, 13] {
            let result = CardExpiry::new(month, 23);
            assert!(matches!(
                result,
                Err(DomainError::InvalidExpiry { month: m, year: 23 }) if m == month
            ));
        }
    }

    #[test]
    fn test_expiry_rejects_years_outside_window() {
        for year in [0, 100, 2000, 2100] {
            assert!(CardExpiry::new(12, year).is_err(), "year {year} accepted");
        }
    }

    #[test]
    fn test_card_wire_shape() {
        let card = PaymentCard::new(
            CardToken::new("number-token"),
            CardToken::new("code-token"),
            CardExpiry::new(12, 26).unwrap(),
        );
        let json = serde_json::to_value(&card).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "number": { "token": "number-token" },
                "code": { "token": "code-token" },
                "expiry": { "month": 12, "year": 2026 }
            })
        );
    }
}
