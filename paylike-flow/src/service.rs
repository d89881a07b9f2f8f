//! Payment flow resolution engine.
//!
//! Turns one `create_payment` call into the sequence of round-trips the
//! server asks for. Each iteration sends the current request state,
//! classifies the response and either moves to a new path or finishes.

use std::collections::BTreeMap;
use std::sync::Arc;

use paylike_types::{
    Challenge, ChallengeType, ClientConfig, ClientError, CreatePaymentRequest,
    CreatePaymentResponse, HttpTransport, PaylikeClientResponse,
};
use tracing::{debug, info, instrument, warn};

use crate::classify::{Classified, Outcome, classify};
use crate::request::{self, DEFAULT_PAYMENT_PATH};

/// Name of the 3-D Secure fingerprint challenge preferred over other iframes.
pub const TDS_FINGERPRINT: &str = "tds-fingerprint";

/// Chooses the next challenge to follow.
///
/// Any `fetch` challenge wins (first in list order), then the
/// `background-iframe` named `tds-fingerprint`, then the first challenge.
pub fn select_challenge(challenges: &[Challenge]) -> Option<&Challenge> {
    challenges
        .iter()
        .find(|c| c.kind == ChallengeType::Fetch)
        .or_else(|| {
            challenges
                .iter()
                .find(|c| c.kind == ChallengeType::BackgroundIframe && c.name == TDS_FINGERPRINT)
        })
        .or_else(|| challenges.first())
}

/// Application service driving payment flows.
///
/// Generic over `T: HttpTransport` - the adapter is injected at compile time.
/// The configuration is immutable and shared, so one `PaymentFlow` can run
/// any number of independent flows concurrently.
pub struct PaymentFlow<T: HttpTransport> {
    pub(crate) transport: T,
    pub(crate) config: Arc<ClientConfig>,
}

impl<T: HttpTransport> PaymentFlow<T> {
    /// Creates a new flow engine with the given transport.
    pub fn new(transport: T, config: ClientConfig) -> Self {
        Self::with_shared_config(transport, Arc::new(config))
    }

    pub fn with_shared_config(transport: T, config: Arc<ClientConfig>) -> Self {
        Self { transport, config }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a reference to the underlying transport.
    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Runs the payment flow to completion.
    ///
    /// `request.hints` accumulates every hint the server hands out, so the
    /// caller can inspect or reuse them afterwards. Failed HTTP calls are
    /// never retried here; retrying means calling this again.
    #[instrument(
        skip(self, request),
        fields(integration = %request.integration.key, amount = ?request.amount)
    )]
    pub async fn create_payment(
        &self,
        request: &mut CreatePaymentRequest,
    ) -> Result<PaylikeClientResponse, ClientError> {
        let limit = self.config.max_iterations;
        let mut path = DEFAULT_PAYMENT_PATH.to_string();

        for iteration in 0..limit {
            debug!(iteration, %path, hints = request.hints.len(), "sending payment request");

            let http = request::payment_request(&self.config, request, &path)?;
            let raw = self.transport.send(http).await?;
            let Classified { response, outcome } = classify(&raw, request)?;

            match outcome {
                Outcome::Challenge(challenges) => {
                    let Some(next) = select_challenge(&challenges) else {
                        return Err(ClientError::unexpected_flow(request, Some(response)));
                    };
                    debug!(challenge = %next.name, kind = ?next.kind, "following challenge");
                    path = next.path.clone();
                }
                Outcome::HintUpdate(hints) => {
                    let added = request.hints.merge(hints);
                    debug!(added, total = request.hints.len(), "hints updated, restarting");
                    path = DEFAULT_PAYMENT_PATH.to_string();
                }
                Outcome::FormAction {
                    action,
                    fields,
                    hints,
                } => {
                    return self
                        .submit_form(request, response, &action, &fields, hints)
                        .await;
                }
                Outcome::Terminal => {
                    let result = PaylikeClientResponse::new(response);
                    info!(payment_id = ?result.payment_id(), "payment flow completed");
                    return Ok(result);
                }
            }
        }

        warn!(limit, "payment flow did not settle");
        Err(ClientError::TooManyIterations { limit })
    }

    /// Posts the form-action step and wraps the returned document.
    ///
    /// Any failure here means the flow broke mid-protocol, so it surfaces as
    /// `UnexpectedFlow` with the last request and response attached.
    async fn submit_form(
        &self,
        request: &mut CreatePaymentRequest,
        mut response: CreatePaymentResponse,
        action: &str,
        fields: &BTreeMap<String, String>,
        hints: Vec<String>,
    ) -> Result<PaylikeClientResponse, ClientError> {
        debug!(%action, fields = fields.len(), "submitting form action");

        let form = match request::form_request(&self.config, action, fields) {
            Ok(form) => form,
            Err(e) => {
                warn!(error = %e, "form action rejected");
                return Err(ClientError::unexpected_flow(request, Some(response)));
            }
        };

        let html = match self.transport.send(form).await {
            Ok(reply) if reply.is_success() => String::from_utf8(reply.body).ok(),
            Ok(reply) => {
                warn!(status = reply.status, "form action returned an error status");
                None
            }
            Err(e) => {
                warn!(error = %e, "form action failed");
                None
            }
        };
        let Some(html) = html else {
            return Err(ClientError::unexpected_flow(request, Some(response)));
        };

        request.hints.merge(hints);
        response.hints = Some(request.hints.to_vec());
        info!(hints = request.hints.len(), "payment flow completed with form action");
        Ok(PaylikeClientResponse::with_html(response, html))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge(name: &str, kind: ChallengeType) -> Challenge {
        Challenge {
            name: name.to_string(),
            kind,
            path: format!("/payments/challenges/{name}"),
        }
    }

    #[test]
    fn test_fetch_wins_regardless_of_position() {
        let challenges = vec![
            challenge(TDS_FINGERPRINT, ChallengeType::BackgroundIframe),
            challenge("other", ChallengeType::Fetch),
        ];
        assert_eq!(select_challenge(&challenges).unwrap().name, "other");
    }

    #[test]
    fn test_first_fetch_is_chosen() {
        let challenges = vec![
            challenge("iframe", ChallengeType::Iframe),
            challenge("first-fetch", ChallengeType::Fetch),
            challenge("second-fetch", ChallengeType::Fetch),
        ];
        assert_eq!(select_challenge(&challenges).unwrap().name, "first-fetch");
    }

    #[test]
    fn test_tds_fingerprint_beats_other_iframes() {
        let challenges = vec![
            challenge("fingerprint", ChallengeType::BackgroundIframe),
            challenge(TDS_FINGERPRINT, ChallengeType::BackgroundIframe),
        ];
        assert_eq!(select_challenge(&challenges).unwrap().name, TDS_FINGERPRINT);
    }

    #[test]
    fn test_tds_fingerprint_must_be_background_iframe() {
        let challenges = vec![
            challenge("fingerprint", ChallengeType::BackgroundIframe),
            challenge(TDS_FINGERPRINT, ChallengeType::Iframe),
        ];
        assert_eq!(select_challenge(&challenges).unwrap().name, "fingerprint");
    }

    #[test]
    fn test_falls_back_to_first_challenge() {
        let challenges = vec![
            challenge("challenge", ChallengeType::Iframe),
            challenge("fingerprint", ChallengeType::BackgroundIframe),
        ];
        assert_eq!(select_challenge(&challenges).unwrap().name, "challenge");
        assert!(select_challenge(&[]).is_none());
    }
}
