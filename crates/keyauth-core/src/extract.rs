// API key extraction from the authorization header

use crate::headers::HeaderSource;
use crate::{API_KEY_SCHEME, AUTHORIZATION_HEADER};

/// Extract the API key from a request's headers.
///
/// Returns `None` when the `authorization` header is missing, empty, or not
/// of the form `ApiKey <key>`. Every malformed case collapses to `None`.
pub fn extract_api_key<H: HeaderSource + ?Sized>(headers: &H) -> Option<String> {
    headers
        .header(AUTHORIZATION_HEADER)
        .and_then(parse_authorization)
        .map(str::to_string)
}

/// Parse a raw authorization value, returning the key slice.
///
/// The key is the token between the first and second space. Anything after
/// a second space is dropped, so `"ApiKey a b"` gives `"a"` and
/// `"ApiKey   a"` gives `""`. The key is not trimmed or decoded.
pub fn parse_authorization(value: &str) -> Option<&str> {
    if value.is_empty() {
        return None;
    }

    // scheme and credential, no space means no credential at all
    let (scheme, rest) = value.split_once(' ')?;
    if scheme != API_KEY_SCHEME {
        return None;
    }

    let key = match rest.split_once(' ') {
        Some((key, _)) => key,
        None => rest,
    };
    Some(key)
}
