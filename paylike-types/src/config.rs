//! Immutable client configuration.

use std::time::Duration;

/// Default per-request timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(20);

/// Default upper bound on payment API calls within one flow.
pub const DEFAULT_MAX_ITERATIONS: usize = 32;

/// Endpoint roots of the payment ecosystem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hosts {
    /// Payment API root; flow paths are joined onto it
    pub api: String,
    /// Vault used to tokenize card numbers and security codes
    pub vault: String,
    /// Apple Pay tokenization endpoint
    pub apple_pay: String,
}

impl Default for Hosts {
    fn default() -> Self {
        Self {
            api: "https://b.paylike.io".to_string(),
            vault: "https://vault.paylike.io".to_string(),
            apple_pay: "https://applepay.paylike.io/token".to_string(),
        }
    }
}

/// Configuration shared by every flow started from one client.
///
/// Built once and never mutated afterwards; concurrent flows read it
/// through an `Arc`.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Sent in the `X-Client` header of every request
    pub client_id: String,
    /// Timeout applied to each individual HTTP call
    pub timeout: Duration,
    pub hosts: Hosts,
    /// Maximum payment API calls before the flow gives up
    pub max_iterations: usize,
}

impl ClientConfig {
    /// Creates a configuration with default hosts and limits.
    pub fn new(client_id: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            timeout: DEFAULT_TIMEOUT,
            hosts: Hosts::default(),
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_hosts(mut self, hosts: Hosts) -> Self {
        self.hosts = hosts;
        self
    }

    pub fn with_api_url(mut self, url: impl Into<String>) -> Self {
        self.hosts.api = url.into();
        self
    }

    pub fn with_vault_url(mut self, url: impl Into<String>) -> Self {
        self.hosts.vault = url.into();
        self
    }

    pub fn with_apple_pay_url(mut self, url: impl Into<String>) -> Self {
        self.hosts.apple_pay = url.into();
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }
}
