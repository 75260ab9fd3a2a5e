//! Lenient URL validation for dirty occurrence-record values.
//!
//! Field values in practice range from clean absolute URLs to free text with
//! a link buried somewhere inside. This validator accepts the former and
//! rejects the rest without ever erroring: a garbage value is `None`.

use url::Url;

/// Schemes accepted for media links. Anything else (javascript:, file:,
/// data:, mailto:) is rejected.
const ACCEPTED_SCHEMES: [&str; 3] = ["http", "https", "ftp"];

/// Characters RFC 3986 forbids anywhere in a URL. The `url` crate follows
/// the lenient WHATWG spec and would percent-encode these instead of
/// rejecting, which would swallow pipe-delimited multi-value strings whole.
const ILLEGAL_CHARS: [char; 9] = ['|', '"', '<', '>', '\\', '^', '`', '{', '}'];

/// Parses a candidate string into a well-formed absolute URL.
///
/// - Leading/trailing whitespace is trimmed; embedded whitespace and
///   RFC 3986 illegal characters are rejected (a space or pipe inside an
///   `associatedMedia` value means the fragment spans two values).
/// - Bare `www.` hosts get an `http://` scheme prepended.
/// - Only http/https/ftp URLs with a host are accepted.
pub fn parse(raw: &str) -> Option<Url> {
    let trimmed = raw.trim();
    if trimmed.is_empty()
        || trimmed
            .chars()
            .any(|c| c.is_whitespace() || ILLEGAL_CHARS.contains(&c))
    {
        return None;
    }

    let url = if trimmed.starts_with("www.") {
        Url::parse(&format!("http://{trimmed}")).ok()?
    } else {
        Url::parse(trimmed).ok()?
    };

    if ACCEPTED_SCHEMES.contains(&url.scheme()) && url.host_str().is_some() {
        Some(url)
    } else {
        tracing::debug!("rejecting URL with scheme {}: {}", url.scheme(), trimmed);
        None
    }
}
