//! Port traits (interfaces for adapters).
//!
//! The payment flow depends on these traits, not on a concrete HTTP stack.

mod transport;

pub use transport::{HttpBody, HttpMethod, HttpRequest, HttpResponse, HttpTransport};
