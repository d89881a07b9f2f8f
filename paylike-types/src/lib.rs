//! # Paylike Types
//!
//! Domain types, wire DTOs and port traits for the Paylike payment flow.
//! This crate has ZERO IO dependencies - only data structures,
//! validation rules, and trait definitions.
//!
//! ## Architecture
//!
//! - `domain/` - Value types (PaymentAmount, card data, plans, hints)
//! - `dto` - Wire shapes exchanged with the payment API
//! - `ports/` - The HTTP transport trait adapters must implement
//! - `config` - Immutable client configuration shared by every flow
//! - `error` - Domain, transport and client error types

pub mod config;
pub mod domain;
pub mod dto;
pub mod error;
pub mod ports;

pub use currency_codes::CurrencyCode;

// Re-export commonly used types
pub use config::{ClientConfig, Hosts};
pub use domain::{
    ApplePayToken, CardCodeOption, CardExpiry, CardSchemeOption, CardStatusOption, CardToken,
    FingerprintOption, Hints, MAX_SAFE_INTEGER, PaymentAmount, PaymentCard, PaymentPlan,
    PaymentTest, PaymentUnplanned, PlanRepeat, RepeatInterval, RepeatIntervalUnit,
    TdsFingerprintOption, TdsStatusOption, TestCard, TestTds,
};
pub use dto::*;
pub use error::{ClientError, DomainError, TransportError};
pub use ports::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
