//! Built-in MIME tables: alias canonicalization and the HTML-classified set.

use std::collections::{HashMap, HashSet};

use super::{HTML_TYPE, OCTET_STREAM};

/// Registered aliases seen in real occurrence data, mapped to their
/// canonical names. Keys and values are lowercase; no value is itself a key,
/// which keeps resolution idempotent.
const ALIASES: &[(&str, &str)] = &[
    ("image/jpg", "image/jpeg"),
    ("image/pjpeg", "image/jpeg"),
    ("image/x-png", "image/png"),
    ("image/tif", "image/tiff"),
    ("audio/mp3", "audio/mpeg"),
    ("audio/x-mp3", "audio/mpeg"),
    ("audio/x-mpeg", "audio/mpeg"),
    ("audio/x-wav", "audio/vnd.wave"),
    ("audio/wav", "audio/vnd.wave"),
    ("video/mpg", "video/mpeg"),
    ("video/x-m4v", "video/mp4"),
    ("text/htm", "text/html"),
    ("application/octetstream", "application/octet-stream"),
];

/// Sniffed types that mean "web page, not media file": server-side script
/// content types, the extensionless octet-stream fallback, and HTML itself.
const HTML_TYPES: &[&str] = &[
    "text/x-coldfusion",
    "text/x-php",
    "text/asp",
    "text/aspdotnet",
    "text/x-cgi",
    "text/x-jsp",
    "text/x-perl",
    HTML_TYPE,
    OCTET_STREAM,
];

pub(super) fn default_aliases() -> HashMap<String, String> {
    ALIASES
        .iter()
        .map(|(alias, canonical)| (alias.to_string(), canonical.to_string()))
        .collect()
}

pub(super) fn default_html_types() -> HashSet<String> {
    HTML_TYPES.iter().map(|t| t.to_string()).collect()
}
