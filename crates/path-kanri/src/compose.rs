//! Query string and base URL composition.

use crate::params::QueryParams;

/// Serializes query parameters as `key=value` pairs joined by `&`.
///
/// Keys and values are percent-encoded; pairs keep insertion order.
#[must_use]
pub fn encode_query(query: &QueryParams) -> String {
    query
        .iter()
        .map(|(key, value)| {
            format!(
                "{}={}",
                urlencoding::encode(key),
                urlencoding::encode(value)
            )
        })
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends `/?` and the encoded query to `path`.
///
/// An absent or empty query leaves `path` unchanged.
#[must_use]
pub fn with_query_params(path: String, query: Option<&QueryParams>) -> String {
    match query {
        Some(query) if !query.is_empty() => format!("{path}/?{}", encode_query(query)),
        _ => path,
    }
}

/// Prepends `base_url` to `path` without adding or removing slashes.
#[must_use]
pub fn with_base_url(base_url: &str, path: &str) -> String {
    format!("{base_url}{path}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_query() {
        let query = QueryParams::from([("page", "1"), ("type", "fire")]);
        assert_eq!(encode_query(&query), "page=1&type=fire");
    }

    #[test]
    fn test_encode_reserved_characters() {
        let query = QueryParams::from([("q", "a b&c=d"), ("name/x", "é")]);
        assert_eq!(encode_query(&query), "q=a%20b%26c%3Dd&name%2Fx=%C3%A9");
    }

    #[test]
    fn test_with_query_params() {
        let query = QueryParams::from([("page", 1)]);
        assert_eq!(
            with_query_params("/users".to_string(), Some(&query)),
            "/users/?page=1"
        );
    }

    #[test]
    fn test_empty_or_absent_query() {
        assert_eq!(
            with_query_params("/users".to_string(), Some(&QueryParams::new())),
            "/users"
        );
        assert_eq!(with_query_params("/users".to_string(), None), "/users");
    }

    #[test]
    fn test_with_base_url() {
        assert_eq!(
            with_base_url("http://example.com", "/users/1"),
            "http://example.com/users/1"
        );
        assert_eq!(with_base_url("", "/users/1"), "/users/1");
        // No slash normalization.
        assert_eq!(
            with_base_url("http://example.com/", "/users"),
            "http://example.com//users"
        );
    }
}
