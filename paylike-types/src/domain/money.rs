//! Exact-decimal payment amounts.

use currency_codes::CurrencyCode;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::DomainError;

/// Largest integer magnitude representable exactly by an IEEE-754 double.
///
/// Amount values are kept inside this range because downstream systems
/// decode them as doubles.
pub const MAX_SAFE_INTEGER: i64 = 9_007_199_254_740_991;

/// Monetary amount expressed as `value × 10^-exponent` units of `currency`.
///
/// Equality is defined on a common denominator, so `2001e-2 EUR` equals
/// `200100e-4 EUR`. No ordering is defined.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PaymentAmount {
    currency: CurrencyCode,
    value: i64,
    exponent: i32,
}

impl PaymentAmount {
    /// Creates an amount from its integer parts.
    pub fn new(currency: CurrencyCode, value: i64, exponent: i32) -> Self {
        Self {
            currency,
            value,
            exponent,
        }
    }

    /// Converts a floating point amount into its exact decimal parts.
    ///
    /// The shortest round-trip rendering of `amount` is split on the decimal
    /// point, so `20.01` becomes `2001` with exponent `2` and `20.0` becomes
    /// `20` with exponent `0`.
    pub fn from_decimal(currency: CurrencyCode, amount: f64) -> Result<Self, DomainError> {
        if !amount.is_finite() || amount.abs() > MAX_SAFE_INTEGER as f64 {
            return Err(DomainError::UnsafeNumber(amount));
        }

        let rendered = amount.to_string();
        let (wholes, fraction) = match rendered.split_once('.') {
            Some((wholes, "0")) => (wholes, ""),
            Some((wholes, fraction)) => (wholes, fraction),
            None => (rendered.as_str(), ""),
        };

        let value: i64 = format!("{wholes}{fraction}")
            .parse()
            .map_err(|_| DomainError::UnsafeNumber(amount))?;
        if value.abs() > MAX_SAFE_INTEGER {
            return Err(DomainError::UnsafeNumber(amount));
        }

        Ok(Self {
            currency,
            value,
            exponent: fraction.len() as i32,
        })
    }

    /// Returns the currency.
    pub fn currency(&self) -> CurrencyCode {
        self.currency
    }

    /// Returns the unscaled integer value.
    pub fn value(&self) -> i64 {
        self.value
    }

    /// Returns the decimal exponent.
    pub fn exponent(&self) -> i32 {
        self.exponent
    }
}

/// `value × 10^power` widened to `i128`, or `None` when it does not fit.
fn scaled(value: i64, power: u32) -> Option<i128> {
    if value == 0 {
        return Some(0);
    }
    10i128.checked_pow(power)?.checked_mul(value as i128)
}

impl PartialEq for PaymentAmount {
    fn eq(&self, other: &Self) -> bool {
        if self.currency != other.currency {
            return false;
        }
        let shift = self.exponent as i64 - other.exponent as i64;
        let power = u32::try_from(shift.unsigned_abs()).unwrap_or(u32::MAX);
        // Overflowing side cannot equal an i64 on the other side.
        if shift >= 0 {
            scaled(other.value, power) == Some(self.value as i128)
        } else {
            scaled(self.value, power) == Some(other.value as i128)
        }
    }
}

impl Eq for PaymentAmount {}

/// Exponents beyond this magnitude are rendered in scientific notation.
const MAX_PLAIN_EXPONENT: u32 = 18;

impl fmt::Display for PaymentAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.value < 0 { "-" } else { "" };
        let digits = self.value.unsigned_abs().to_string();

        if self.exponent.unsigned_abs() > MAX_PLAIN_EXPONENT {
            let power = -i64::from(self.exponent);
            return write!(f, "{sign}{digits}e{power} {}", self.currency);
        }

        if self.exponent <= 0 {
            let zeros = "0".repeat(self.exponent.unsigned_abs() as usize);
            let digits = if self.value == 0 { "0".to_string() } else { digits + &zeros };
            return write!(f, "{sign}{digits} {}", self.currency);
        }

        let exponent = self.exponent as usize;
        let padded = format!("{digits:0>width$}", width = exponent + 1);
        let (major, minor) = padded.split_at(padded.len() - exponent);
        write!(f, "{sign}{major}.{minor} {}", self.currency)
    }
}
