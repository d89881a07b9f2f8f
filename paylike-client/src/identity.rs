//! Client identifiers sent in the `X-Client` header.

use rand::Rng;
use rand::distr::Alphanumeric;

pub const CLIENT_ID_PREFIX: &str = "rust-1-";

const SUFFIX_LEN: usize = 6;

/// Returns `rust-1-` followed by six random alphanumeric characters.
pub fn generate_client_id() -> String {
    let suffix: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(SUFFIX_LEN)
        .map(char::from)
        .collect();
    format!("{CLIENT_ID_PREFIX}{suffix}")
}
