//! # Paylike Flow
//!
//! Resolution engine for the multi-step payment authorization flow.
//!
//! ## Architecture
//!
//! - `request` - Builds outbound HTTP requests (payment, form action, vault)
//! - `classify` - Decodes responses and decides which outcome applies
//! - `service` - The `PaymentFlow` state machine driving the round-trips
//! - `tokenize` - Vault calls that turn card data into tokens
//!
//! `PaymentFlow` is generic over `T: HttpTransport`, so the same engine runs
//! against reqwest in production and a scripted transport in tests.

pub mod classify;
pub mod request;
pub mod service;
pub mod tokenize;


pub use classify::{Classified, Outcome};
pub use service::{PaymentFlow, select_challenge};
