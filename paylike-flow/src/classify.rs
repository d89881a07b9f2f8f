//! Response decoding and outcome classification.

use std::collections::BTreeMap;

use paylike_types::{
    Challenge, ClientError, CreatePaymentRequest, CreatePaymentResponse, ErrorEnvelope,
    HttpResponse,
};
use serde::de::DeserializeOwned;

/// What the server asked the flow to do next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Follow one of the listed challenges.
    Challenge(Vec<Challenge>),
    /// Submit `fields` to `action` and return the resulting document.
    FormAction {
        action: String,
        fields: BTreeMap<String, String>,
        hints: Vec<String>,
    },
    /// Merge the hints and restart from the default path.
    HintUpdate(Vec<String>),
    /// Authorization or transaction id present.
    Terminal,
}

/// A decoded response together with its outcome.
#[derive(Debug, Clone)]
pub struct Classified {
    pub response: CreatePaymentResponse,
    pub outcome: Outcome,
}

/// Maps a non-2xx response to `ClientError::Server`.
///
/// Bodies that are not an error envelope are forwarded as the message.
pub fn server_error(response: &HttpResponse) -> ClientError {
    match serde_json::from_slice::<ErrorEnvelope>(&response.body) {
        Ok(envelope) => ClientError::Server {
            message: envelope.message,
            code: envelope.code,
            status_code: response.status,
            errors: envelope.errors.unwrap_or_default(),
        },
        Err(_) => {
            let raw = String::from_utf8_lossy(&response.body).trim().to_string();
            ClientError::Server {
                message: (!raw.is_empty()).then_some(raw),
                code: None,
                status_code: response.status,
                errors: Vec::new(),
            }
        }
    }
}

/// Decodes a 2xx body into `T`; any other status becomes a server error.
pub fn decode<T: DeserializeOwned>(response: &HttpResponse) -> Result<T, ClientError> {
    if !response.is_success() {
        return Err(server_error(response));
    }
    serde_json::from_slice(&response.body).map_err(|e| ClientError::MalformedResponse {
        status: response.status,
        reason: e.to_string(),
    })
}

/// Picks the driving outcome of a decoded response.
///
/// Checked in priority order because one body can satisfy several shapes.
pub fn outcome_of(response: &CreatePaymentResponse) -> Option<Outcome> {
    if let Some(challenges) = response.challenges.as_ref().filter(|c| !c.is_empty()) {
        return Some(Outcome::Challenge(challenges.clone()));
    }

    let action = response.action.as_ref().filter(|a| !a.is_empty());
    let fields = response.fields.as_ref().filter(|f| !f.is_empty());
    if let (Some(action), Some(fields)) = (action, fields) {
        return Some(Outcome::FormAction {
            action: action.clone(),
            fields: fields.clone(),
            hints: response.hints.clone().unwrap_or_default(),
        });
    }

    if let Some(hints) = response.hints.as_ref().filter(|h| !h.is_empty()) {
        return Some(Outcome::HintUpdate(hints.clone()));
    }

    if response.authorization_id.is_some() || response.transaction_id.is_some() {
        return Some(Outcome::Terminal);
    }

    None
}

/// Decodes and classifies one payment API response.
///
/// `request` is the state that produced the response; it is attached to
/// `UnexpectedFlow` when no outcome matches.
pub fn classify(
    response: &HttpResponse,
    request: &CreatePaymentRequest,
) -> Result<Classified, ClientError> {
    let response: CreatePaymentResponse = decode(response)?;
    match outcome_of(&response) {
        Some(outcome) => Ok(Classified { response, outcome }),
        None => Err(ClientError::unexpected_flow(request, Some(response))),
    }
}
