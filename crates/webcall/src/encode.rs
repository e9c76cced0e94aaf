//! Percent-encoding for path segments and query values.
//!
//! Both encoders share the same base transform, the
//! application/x-www-form-urlencoded serializer from the [`url`] crate:
//! alphanumerics and `*-._` pass through, space becomes `+`, and every other
//! byte of the UTF-8 encoding becomes an uppercase `%XX` escape. The path
//! encoder derives from it by one post-processing step rather than carrying
//! a second encoding table.

/// Encode a value for use in a query string.
///
/// Spaces render as `+` and a literal `+` in the input renders as `%2B`.
#[must_use]
pub fn query_encode(value: &str) -> String {
    url::form_urlencoded::byte_serialize(value.as_bytes()).collect()
}

/// Encode a value for use in a path segment.
///
/// Identical to [`query_encode`] except that spaces render as `%20`, the
/// form expected inside a URL path. Rewriting `+` after the fact is safe:
/// any literal `+` in the input has already been encoded as `%2B`, so every
/// `+` remaining in the form-encoded output was originally a space.
#[must_use]
pub fn path_encode(value: &str) -> String {
    query_encode(value).replace('+', "%20")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unreserved_characters_pass_through() {
        assert_eq!(query_encode("abc-XYZ_0.9*"), "abc-XYZ_0.9*");
        assert_eq!(path_encode("abc-XYZ_0.9*"), "abc-XYZ_0.9*");
    }

    #[test]
    fn query_space_becomes_plus() {
        assert_eq!(query_encode("d d d"), "d+d+d");
    }

    #[test]
    fn path_space_becomes_percent_20() {
        assert_eq!(path_encode("b b b"), "b%20b%20b");
    }

    #[test]
    fn literal_plus_is_distinguishable_from_space() {
        assert_eq!(query_encode("a+b c"), "a%2Bb+c");
        assert_eq!(path_encode("a+b c"), "a%2Bb%20c");
    }

    #[test]
    fn reserved_characters_use_uppercase_hex() {
        assert_eq!(query_encode("a/b?c=d&e"), "a%2Fb%3Fc%3Dd%26e");
    }

    #[test]
    fn non_ascii_encodes_utf8_bytes() {
        assert_eq!(query_encode("café"), "caf%C3%A9");
        assert_eq!(query_encode("日"), "%E6%97%A5");
    }

    #[test]
    fn empty_value_stays_empty() {
        assert_eq!(query_encode(""), "");
        assert_eq!(path_encode(""), "");
    }
}
