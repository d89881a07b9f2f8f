//! ISO 4217 currency codes with macro-based generation.
//!
//! Every currency accepted by the payment API is declared once in the
//! `define_currencies!` invocation at the bottom of this file. The macro
//! generates the `CurrencyCode` enum together with its metadata accessors,
//! `Display`/`FromStr` impls and serde support.
//!
//! # Adding a New Currency
//! Add a line to the `define_currencies!` invocation:
//! ```ignore
//! define_currencies! {
//!     // ... existing currencies ...
//!     XOF => ("XOF", 952, 0),
//! }
//! ```
//!
//! # Example
//! ```
//! use currency_codes::CurrencyCode;
//!
//! let eur: CurrencyCode = "eur".parse().unwrap();
//! assert_eq!(eur, CurrencyCode::EUR);
//! assert_eq!(eur.numeric(), 978);
//! assert_eq!(eur.minor_unit_exponent(), 2);
//! ```

// ─────────────────────────────────────────────────────────────────────────────
// THE MACRO: Defines the CurrencyCode enum and its metadata
// ─────────────────────────────────────────────────────────────────────────────

/// Macro to define currencies with auto-generated enum variants and lookups.
///
/// # Syntax
/// ```ignore
/// define_currencies! {
///     NAME => ("CODE", numeric_code, minor_unit_exponent),
/// }
/// ```
#[macro_export]
macro_rules! define_currencies {
    (
        $(
            $name:ident => ($code:literal, $numeric:expr, $exponent:expr)
        ),* $(,)?
    ) => {
        /// ISO 4217 alphabetic currency code.
        ///
        /// Serialized as the upper-case three letter code.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
        #[serde(rename_all = "UPPERCASE")]
        pub enum CurrencyCode {
            $($name),*
        }

        impl CurrencyCode {
            /// Alphabetic code, e.g. `"EUR"`.
            pub fn code(&self) -> &'static str {
                match self {
                    $(CurrencyCode::$name => $code),*
                }
            }

            /// Numeric code, e.g. `978` for EUR.
            pub fn numeric(&self) -> u16 {
                match self {
                    $(CurrencyCode::$name => $numeric),*
                }
            }

            /// Number of digits after the decimal separator in the minor unit.
            pub fn minor_unit_exponent(&self) -> u8 {
                match self {
                    $(CurrencyCode::$name => $exponent),*
                }
            }

            pub fn all() -> &'static [CurrencyCode] {
                &[$(CurrencyCode::$name),*]
            }
        }

        impl std::fmt::Display for CurrencyCode {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.code())
            }
        }

        impl std::str::FromStr for CurrencyCode {
            type Err = String;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.to_uppercase().as_str() {
                    $($code => Ok(CurrencyCode::$name),)*
                    _ => Err(format!("Unknown currency: {}", s)),
                }
            }
        }
    };
}

// ─────────────────────────────────────────────────────────────────────────────
// CURRENCY DEFINITIONS
// ─────────────────────────────────────────────────────────────────────────────

define_currencies! {
    AED => ("AED", 784, 2),
    ARS => ("ARS", 32, 2),
    AUD => ("AUD", 36, 2),
    BGN => ("BGN", 975, 2),
    BHD => ("BHD", 48, 3),
    BRL => ("BRL", 986, 2),
    CAD => ("CAD", 124, 2),
    CHF => ("CHF", 756, 2),
    CLP => ("CLP", 152, 0),
    CNY => ("CNY", 156, 2),
    COP => ("COP", 170, 2),
    CZK => ("CZK", 203, 2),
    DKK => ("DKK", 208, 2),
    EGP => ("EGP", 818, 2),
    EUR => ("EUR", 978, 2),
    GBP => ("GBP", 826, 2),
    HKD => ("HKD", 344, 2),
    HUF => ("HUF", 348, 2),
    IDR => ("IDR", 360, 2),
    ILS => ("ILS", 376, 2),
    INR => ("INR", 356, 2),
    ISK => ("ISK", 352, 0),
    JOD => ("JOD", 400, 3),
    JPY => ("JPY", 392, 0),
    KRW => ("KRW", 410, 0),
    KWD => ("KWD", 414, 3),
    MAD => ("MAD", 504, 2),
    MXN => ("MXN", 484, 2),
    MYR => ("MYR", 458, 2),
    NGN => ("NGN", 566, 2),
    NOK => ("NOK", 578, 2),
    NZD => ("NZD", 554, 2),
    OMR => ("OMR", 512, 3),
    PHP => ("PHP", 608, 2),
    PKR => ("PKR", 586, 2),
    PLN => ("PLN", 985, 2),
    QAR => ("QAR", 634, 2),
    RON => ("RON", 946, 2),
    RSD => ("RSD", 941, 2),
    SAR => ("SAR", 682, 2),
    SEK => ("SEK", 752, 2),
    SGD => ("SGD", 702, 2),
    THB => ("THB", 764, 2),
    TND => ("TND", 788, 3),
    TRY => ("TRY", 949, 2),
    TWD => ("TWD", 901, 2),
    UAH => ("UAH", 980, 2),
    UGX => ("UGX", 800, 0),
    USD => ("USD", 840, 2),
    VND => ("VND", 704, 0),
    XAF => ("XAF", 950, 0),
    XOF => ("XOF", 952, 0),
    ZAR => ("ZAR", 710, 2),
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_currency_code_parse() {
        assert_eq!("EUR".parse::<CurrencyCode>().unwrap(), CurrencyCode::EUR);
        assert_eq!("dkk".parse::<CurrencyCode>().unwrap(), CurrencyCode::DKK);
        assert!("XXX".parse::<CurrencyCode>().is_err());
    }

    #[test]
    fn test_currency_code_display() {
        assert_eq!(CurrencyCode::AED.to_string(), "AED");
    }

    #[test]
    fn test_currency_metadata() {
        assert_eq!(CurrencyCode::USD.numeric(), 840);
        assert_eq!(CurrencyCode::JPY.minor_unit_exponent(), 0);
        assert_eq!(CurrencyCode::KWD.minor_unit_exponent(), 3);
    }

    #[test]
    fn test_serde_uses_alphabetic_code() {
        let json = serde_json::to_string(&CurrencyCode::EUR).unwrap();
        assert_eq!(json, "\"EUR\"");
        let back: CurrencyCode = serde_json::from_str("\"SEK\"").unwrap();
        assert_eq!(back, CurrencyCode::SEK);
    }

    #[test]
    fn test_currency_code_all_round_trips_through_from_str() {
        for code in CurrencyCode::all() {
            assert_eq!(code.code().parse::<CurrencyCode>().unwrap(), *code);
        }
    }
}
