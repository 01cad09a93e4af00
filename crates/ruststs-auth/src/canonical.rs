//! Canonical query construction for AWS Signature Version 2.
//!
//! The string that gets signed and the query string that goes on the wire are
//! both produced here, from the same sorted parameters with the same encoding:
//!
//! ```text
//! key1=value1&key2=value2&...
//! ```
//!
//! Keys are sorted by byte order. Keys and values are percent-encoded with the
//! RFC 3986 unreserved set, so a space becomes `%20` and never `+`.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Characters that must be percent-encoded in query keys and values.
///
/// Everything except unreserved characters (A-Z, a-z, 0-9, `-`, `_`, `.`, `~`).
const QUERY_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

/// Percent-encode a single query key or value.
///
/// # Examples
///
/// ```
/// use ruststs_auth::canonical::query_encode;
///
/// assert_eq!(query_encode("hello world"), "hello%20world");
/// assert_eq!(query_encode("a+b/c=d"), "a%2Bb%2Fc%3Dd");
/// assert_eq!(query_encode("safe-_.~"), "safe-_.~");
/// ```
#[must_use]
pub fn query_encode(input: &str) -> String {
    utf8_percent_encode(input, QUERY_ENCODE_SET).to_string()
}

/// Decode a percent-encoded query component.
///
/// `+` is kept as a literal plus sign; this encoding never produces it for a space.
#[must_use]
pub fn query_decode(input: &str) -> String {
    percent_decode_str(input).decode_utf8_lossy().into_owned()
}

/// Build the canonical query string from `(key, value)` pairs.
///
/// The pairs are sorted by raw key (then value) in byte order, encoded, and
/// joined with `&`. The input order does not matter.
///
/// # Examples
///
/// ```
/// use ruststs_auth::canonical::build_canonical_query_string;
///
/// let query = build_canonical_query_string([("b", "2"), ("a", "x y")]);
/// assert_eq!(query, "a=x%20y&b=2");
/// ```
#[must_use]
pub fn build_canonical_query_string<'a>(
    pairs: impl IntoIterator<Item = (&'a str, &'a str)>,
) -> String {
    let mut sorted: Vec<(&str, &str)> = pairs.into_iter().collect();
    sorted.sort_unstable();

    sorted
        .iter()
        .map(|(k, v)| format!("{}={}", query_encode(k), query_encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

/// Build the SigV2 string to sign.
///
/// ```text
/// HTTP-Verb + "\n" +
/// lowercase(Host) + "\n" +
/// Path + "\n" +
/// CanonicalQueryString
/// ```
///
/// An empty path is signed as `/`.
#[must_use]
pub fn build_string_to_sign(method: &str, host: &str, path: &str, canonical_query: &str) -> String {
    let host = host.to_ascii_lowercase();
    let path = if path.is_empty() { "/" } else { path };
    format!("{method}\n{host}\n{path}\n{canonical_query}")
}
