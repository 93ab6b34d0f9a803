//! Core of the API key authentication scheme
//! this crate pulls the caller's key out of the `authorization` header.
//! Validation of the key is left to whoever calls it (see keyauth-api).
pub mod extract;
pub mod headers;

pub use extract::{extract_api_key, parse_authorization};
pub use headers::HeaderSource;

/// Header the key is read from (lowercase, as HTTP runtimes deliver it)
pub const AUTHORIZATION_HEADER: &str = "authorization";

/// Scheme token that must prefix the key, matched case-sensitively
pub const API_KEY_SCHEME: &str = "ApiKey";

/// Build the header value a client should send for `key`
pub fn authorization_value(key: &str) -> String {
    format!("{} {}", API_KEY_SCHEME, key)
}
