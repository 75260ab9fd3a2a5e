//! Extension-based MIME sniffing over URL strings.

use super::OCTET_STREAM;

/// Server-side script extensions and the content types they sniff to.
/// Checked before the generic extension map so that `.php` and friends are
/// recognizable to the HTML-classified rewrite in the resolver.
const SCRIPT_EXTENSIONS: &[(&str, &str)] = &[
    ("asp", "text/asp"),
    ("aspx", "text/aspdotnet"),
    ("cfm", "text/x-coldfusion"),
    ("cgi", "text/x-cgi"),
    ("jsp", "text/x-jsp"),
    ("php", "text/x-php"),
    ("pl", "text/x-perl"),
];

/// Best-effort MIME guess for a URL string.
///
/// The guess is based on the suffix of the last path segment; query,
/// fragment, and the host (whose dots are not an extension) are ignored.
/// Always returns a type: when nothing matches, the octet-stream fallback
/// (which the resolver then classifies as HTML).
pub fn sniff_url(url: &str) -> String {
    let segment = last_path_segment(url);

    if let Some(ext) = extension(segment) {
        if let Some((_, mime)) = SCRIPT_EXTENSIONS.iter().find(|(e, _)| *e == ext) {
            return (*mime).to_string();
        }
    }

    mime_guess::from_path(segment)
        .first_raw()
        .map(str::to_string)
        .unwrap_or_else(|| OCTET_STREAM.to_string())
}

/// Last segment of the URL path, with scheme/host/query/fragment stripped.
fn last_path_segment(url: &str) -> &str {
    let without_query = url.split(['?', '#']).next().unwrap_or(url);
    let after_scheme = without_query
        .split_once("://")
        .map_or(without_query, |(_, rest)| rest);
    match after_scheme.split_once('/') {
        Some((_, path)) => path.rsplit('/').next().unwrap_or(""),
        // No path at all, only a host.
        None => "",
    }
}

/// Lowercased extension of a path segment, if any.
fn extension(segment: &str) -> Option<String> {
    let (stem, ext) = segment.rsplit_once('.')?;
    if stem.is_empty() || ext.is_empty() {
        return None;
    }
    Some(ext.to_ascii_lowercase())
}
