//! Delimiter-disambiguation splitting of multi-value media strings.
//!
//! A dwc:associatedMedia value may hold one URL or many, concatenated with
//! whatever separator the publisher chose. The separator is never declared,
//! so it is inferred: every candidate delimiter is tried and the one
//! producing the most valid URLs wins.

use url::Url;

use crate::url_parse;

/// Candidate separators in priority order. Highest priority first: the rare
/// multi-character sentinel some publishers emit, then pipe, comma,
/// semicolon. Priority is the tie-break when two splits are equally good.
pub const DEFAULT_DELIMITERS: [&str; 4] = ["|#DELIMITER#|", "|", ",", ";"];

/// Splits an associatedMedia value into individual URLs using the default
/// delimiter set.
pub fn split_associated_media(raw: &str) -> Vec<Url> {
    split_with_delimiters(raw, &DEFAULT_DELIMITERS)
}

/// Splits an associatedMedia value using a caller-supplied delimiter set
/// (still in priority order).
///
/// A value that parses as a single URL in its entirety is returned as-is
/// without any delimiter logic. Otherwise each delimiter is tried in turn
/// and the split yielding the strictly largest number of valid URLs is kept;
/// on a tie the earlier (higher-priority) delimiter wins and the ambiguity
/// is logged. Garbage input yields an empty vec, never an error.
pub fn split_with_delimiters<S: AsRef<str>>(raw: &str, delimiters: &[S]) -> Vec<Url> {
    if raw.trim().is_empty() {
        return Vec::new();
    }

    // First try the entire string as one URL.
    if let Some(url) = url_parse::parse(raw) {
        return vec![url];
    }

    let mut best: Vec<Url> = Vec::new();
    for delimiter in delimiters {
        let fragments: Vec<&str> = raw
            .split(delimiter.as_ref())
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .collect();
        // Avoid validating fragments if nothing was actually split.
        if fragments.len() <= 1 {
            continue;
        }

        let candidate: Vec<Url> = fragments.iter().filter_map(|f| url_parse::parse(f)).collect();
        if candidate.len() > best.len() {
            best = candidate;
        } else if !best.is_empty() && candidate.len() == best.len() {
            tracing::info!(
                "unclear which delimiter separates associatedMedia = {:?}",
                raw
            );
        }
    }
    best
}
