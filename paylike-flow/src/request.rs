//! Outbound request construction.
//!
//! Pure functions: they read the configuration and the current request
//! state and never touch the network.

use std::collections::BTreeMap;

use paylike_types::{
    ClientConfig, ClientError, CreatePaymentRequest, HttpBody, HttpMethod, HttpRequest,
    TokenizeRequest,
};
use url::Url;

/// Entry point of every payment flow; hint updates restart here.
pub const DEFAULT_PAYMENT_PATH: &str = "/payments";

/// Header carrying the client identifier.
pub const CLIENT_HEADER: &str = "X-Client";

/// Header selecting the API version.
pub const VERSION_HEADER: &str = "Accept-Version";

pub const API_VERSION: &str = "1";

fn headers(config: &ClientConfig) -> Vec<(String, String)> {
    vec![
        (CLIENT_HEADER.to_string(), config.client_id.clone()),
        (VERSION_HEADER.to_string(), API_VERSION.to_string()),
    ]
}

fn parse_url(raw: &str) -> Result<Url, ClientError> {
    Url::parse(raw).map_err(|e| ClientError::InvalidUrl(format!("{raw}: {e}")))
}

/// Places a challenge or default path on the payment API host.
///
/// `path` replaces whatever path the root carries. Anything other than a
/// host-relative path (`/...`) is rejected, so the payment body never
/// leaves the API host.
pub fn payment_url(config: &ClientConfig, path: &str) -> Result<String, ClientError> {
    if !path.starts_with('/') || path.starts_with("//") {
        return Err(ClientError::InvalidUrl(format!(
            "{path}: not a path on the payment API"
        )));
    }

    let mut url = parse_url(&config.hosts.api)?;
    url.set_path(path);
    url.set_query(None);
    url.set_fragment(None);
    Ok(url.into())
}

/// JSON POST of the current request state to `path` on the payment API.
pub fn payment_request(
    config: &ClientConfig,
    request: &CreatePaymentRequest,
    path: &str,
) -> Result<HttpRequest, ClientError> {
    Ok(HttpRequest {
        url: payment_url(config, path)?,
        method: HttpMethod::Post,
        headers: headers(config),
        body: HttpBody::Json(serde_json::to_vec(request)?),
    })
}

/// Form POST of server-supplied `fields` to the server-supplied `action`.
///
/// The action URL is used as-is; it does not have to live under the API root.
pub fn form_request(
    config: &ClientConfig,
    action: &str,
    fields: &BTreeMap<String, String>,
) -> Result<HttpRequest, ClientError> {
    let url = parse_url(action)?;
    let form = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish();

    Ok(HttpRequest {
        url: url.into(),
        method: HttpMethod::Post,
        headers: headers(config),
        body: HttpBody::Form(form),
    })
}

/// JSON POST of a secret to the vault matching its kind.
pub fn tokenize_request(
    config: &ClientConfig,
    request: &TokenizeRequest,
) -> Result<HttpRequest, ClientError> {
    let endpoint = match request {
        TokenizeRequest::Card { .. } => &config.hosts.vault,
        TokenizeRequest::ApplePay { .. } => &config.hosts.apple_pay,
    };

    Ok(HttpRequest {
        url: parse_url(endpoint)?.into(),
        method: HttpMethod::Post,
        headers: headers(config),
        body: HttpBody::Json(serde_json::to_vec(request)?),
    })
}
