//! Configuration loading from flags and environment.

use std::time::Duration;

use anyhow::bail;
use clap::Args;
use paylike_client::config::{DEFAULT_MAX_ITERATIONS, DEFAULT_TIMEOUT};
use paylike_client::{ClientConfig, generate_client_id};

/// Connection settings shared by every subcommand.
///
/// Each flag falls back to its `PAYLIKE_*` environment variable.
#[derive(Debug, Args)]
pub struct Config {
    /// Payment API root
    #[arg(long, env = "PAYLIKE_API_URL", global = true)]
    pub api_url: Option<String>,

    /// Card vault endpoint
    #[arg(long, env = "PAYLIKE_VAULT_URL", global = true)]
    pub vault_url: Option<String>,

    /// Apple Pay tokenization endpoint
    #[arg(long, env = "PAYLIKE_APPLE_PAY_URL", global = true)]
    pub apple_pay_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, env = "PAYLIKE_TIMEOUT_SECS", global = true, default_value_t = DEFAULT_TIMEOUT.as_secs())]
    pub timeout_secs: u64,

    /// Maximum payment API calls per flow
    #[arg(long, env = "PAYLIKE_MAX_ITERATIONS", global = true, default_value_t = DEFAULT_MAX_ITERATIONS)]
    pub max_iterations: usize,

    /// Value of the X-Client header (generated when absent)
    #[arg(long, env = "PAYLIKE_CLIENT_ID", global = true)]
    pub client_id: Option<String>,
}

impl Config {
    /// Builds the library configuration.
    pub fn client_config(&self) -> anyhow::Result<ClientConfig> {
        if self.timeout_secs == 0 {
            bail!("timeout must be at least one second");
        }
        if self.max_iterations == 0 {
            bail!("max iterations must be positive");
        }

        let client_id = self.client_id.clone().unwrap_or_else(generate_client_id);
        let mut config = ClientConfig::new(client_id)
            .with_timeout(Duration::from_secs(self.timeout_secs))
            .with_max_iterations(self.max_iterations);

        if let Some(url) = &self.api_url {
            config = config.with_api_url(url);
        }
        if let Some(url) = &self.vault_url {
            config = config.with_vault_url(url);
        }
        if let Some(url) = &self.apple_pay_url {
            config = config.with_apple_pay_url(url);
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use paylike_client::Hosts;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        config: Config,
    }

    fn parse(args: &[&str]) -> Config {
        let argv = std::iter::once("paylike").chain(args.iter().copied());
        Harness::try_parse_from(argv).unwrap().config
    }

    #[test]
    fn test_flags_override_hosts() {
        let config = parse(&[
            "--api-url",
            "http://localhost:8080",
            "--timeout-secs",
            "5",
            "--max-iterations",
            "3",
            "--client-id",
            "rust-1-cli000",
        ])
        .client_config()
        .unwrap();

        assert_eq!(config.hosts.api, "http://localhost:8080");
        assert_eq!(config.hosts.vault, Hosts::default().vault);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.max_iterations, 3);
        assert_eq!(config.client_id, "rust-1-cli000");
    }

    fn config(timeout_secs: u64, max_iterations: usize) -> Config {
        Config {
            api_url: None,
            vault_url: None,
            apple_pay_url: None,
            timeout_secs,
            max_iterations,
            client_id: None,
        }
    }

    #[test]
    fn test_zero_timeout_is_rejected() {
        let err = config(0, 1).client_config().unwrap_err();
        assert!(err.to_string().contains("timeout"));
    }

    #[test]
    fn test_zero_max_iterations_is_rejected() {
        let err = config(20, 0).client_config().unwrap_err();
        assert!(err.to_string().contains("max iterations"));

        assert_eq!(config(20, 1).client_config().unwrap().max_iterations, 1);
    }

    #[test]
    fn test_defaults_without_flags() {
        let config = parse(&[]).client_config().unwrap();
        assert_eq!(config.timeout, DEFAULT_TIMEOUT);
        assert_eq!(config.max_iterations, DEFAULT_MAX_ITERATIONS);
        assert!(config.client_id.starts_with("rust-1-"));
    }
}
