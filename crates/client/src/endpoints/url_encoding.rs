//! URL encoding utilities for constructing safe API paths.
//!
//! Datasource names are user-chosen and end up in URL paths
//! (`/api/datasources/name/{name}`); without percent-encoding a name like
//! `Prometheus / prod` would create a nested path.

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters that must be percent-encoded in URL path segments (RFC 3986 §3.3,
/// plus `/`, `%`, `?` and `#` which would change the meaning of the URL).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for safe use as a URL path segment.
///
/// ```
/// use grafana_client::endpoints::url_encoding::encode_path_segment;
///
/// assert_eq!(encode_path_segment("Prometheus"), "Prometheus");
/// assert_eq!(encode_path_segment("Loki / prod"), "Loki%20%2F%20prod");
/// ```
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_simple() {
        assert_eq!(encode_path_segment("Prometheus"), "Prometheus");
        assert_eq!(encode_path_segment("loki-logs_1.0"), "loki-logs_1.0");
    }

    #[test]
    fn test_encode_slash_and_space() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("two words"), "two%20words");
    }

    #[test]
    fn test_encode_percent_prevents_double_decoding() {
        assert_eq!(encode_path_segment("100%"), "100%25");
        assert_eq!(encode_path_segment("a%20b"), "a%2520b");
    }

    #[test]
    fn test_encode_query_and_fragment() {
        assert_eq!(encode_path_segment("ds?x=1"), "ds%3Fx=1");
        assert_eq!(encode_path_segment("ds#1"), "ds%231");
    }

    #[test]
    fn test_encode_unicode() {
        assert_eq!(encode_path_segment("M\u{00e9}tricas"), "M%C3%A9tricas");
    }
}
