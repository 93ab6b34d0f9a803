//! Header map abstraction - lets the extractor read from whatever map the caller has

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

// HeaderSource trait - every header map implements this
//
// Name lookup is exact; maps that need case-insensitive names must
// normalize them themselves (http::HeaderMap already does).
pub trait HeaderSource {
    fn header(&self, name: &str) -> Option<&str>;
}

// Non UTF-8 values count as missing, UTF-8 beyond ASCII is kept
impl HeaderSource for http::HeaderMap {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
    }
}

impl<S: BuildHasher> HeaderSource for HashMap<String, String, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

// header present as a key but with no value
impl<S: BuildHasher> HeaderSource for HashMap<String, Option<String>, S> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(|v| v.as_deref())
    }
}

impl HeaderSource for BTreeMap<String, String> {
    fn header(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<T: HeaderSource + ?Sized> HeaderSource for &T {
    fn header(&self, name: &str) -> Option<&str> {
        (**self).header(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    #[test]
    fn test_http_header_map_is_case_insensitive() {
        let mut headers = http::HeaderMap::new();
        headers.insert("Authorization", HeaderValue::from_static("ApiKey abc"));

        assert_eq!(headers.header("authorization"), Some("ApiKey abc"));
    }

    #[test]
    fn test_http_header_map_opaque_value_is_missing() {
        let mut headers = http::HeaderMap::new();
        let value = HeaderValue::from_bytes(b"ApiKey \xfa\xfb").unwrap();
        headers.insert("authorization", value);

        assert_eq!(headers.header("authorization"), None);
    }

    #[test]
    fn test_http_header_map_keeps_utf8_value() {
        let mut headers = http::HeaderMap::new();
        let value = HeaderValue::from_bytes("ApiKey clé".as_bytes()).unwrap();
        headers.insert("authorization", value);

        assert_eq!(headers.header("authorization"), Some("ApiKey clé"));
    }

    #[test]
    fn test_optional_value_map() {
        let mut headers: HashMap<String, Option<String>> = HashMap::new();
        headers.insert("authorization".to_string(), None);
        assert_eq!(headers.header("authorization"), None);

        headers.insert("authorization".to_string(), Some("ApiKey k".to_string()));
        assert_eq!(headers.header("authorization"), Some("ApiKey k"));
    }

    #[test]
    fn test_plain_maps_are_exact_match() {
        let headers = BTreeMap::from([("Authorization".to_string(), "ApiKey k".to_string())]);

        assert_eq!(headers.header("authorization"), None);
        assert_eq!((&headers).header("Authorization"), Some("ApiKey k"));
    }
}
