//! MIME type resolution for media references.
//!
//! A [`MimeResolver`] normalizes declared format strings against a registered
//! alias table and derives types for bare URLs from an extension sniffer. It
//! also owns the HTML-classified set: sniffed types that mean "this URL serves
//! a web page, not a media file" (script endpoints, the no-extension
//! octet-stream fallback, and literal `text/html`).
//!
//! Both entry points are pure and infallible: unknown or malformed input is
//! the `None` outcome, never an error.

mod registry;
mod sniff;

pub use sniff::sniff_url;

use std::collections::{HashMap, HashSet};

use url::Url;

use crate::config::DwcmConfig;

/// Canonical MIME type for HTML pages.
pub const HTML_TYPE: &str = "text/html";

/// Fallback MIME type when the sniffer finds nothing better.
pub const OCTET_STREAM: &str = "application/octet-stream";

/// Resolves declared formats and URLs to normalized MIME types.
///
/// Built once from configuration and shared; all state is read-only after
/// construction, so a single instance can serve concurrent callers.
#[derive(Debug, Clone)]
pub struct MimeResolver {
    /// Lowercase alias -> canonical MIME name.
    aliases: HashMap<String, String>,
    /// Lowercase MIME types treated as HTML links rather than media files.
    html_types: HashSet<String>,
}

impl Default for MimeResolver {
    fn default() -> Self {
        Self {
            aliases: registry::default_aliases(),
            html_types: registry::default_html_types(),
        }
    }
}

impl MimeResolver {
    /// Builds a resolver from the built-in tables plus any extensions from
    /// the user's config file.
    pub fn from_config(cfg: &DwcmConfig) -> Self {
        let mut resolver = Self::default();
        for (alias, canonical) in &cfg.extra_mime_aliases {
            resolver
                .aliases
                .insert(alias.to_lowercase(), canonical.to_lowercase());
        }
        for t in &cfg.extra_html_types {
            resolver.html_types.insert(t.to_lowercase());
        }
        resolver
    }

    /// Normalizes a declared format string (e.g. a dwc:format value).
    ///
    /// Trims and lowercases, canonicalizes known aliases, and otherwise
    /// accepts the input only if it has valid `type/subtype` syntax.
    /// Idempotent: resolving an already-normalized type returns it unchanged.
    pub fn from_declared_format(&self, format: Option<&str>) -> Option<String> {
        let format = format?.trim().to_lowercase();
        if format.is_empty() {
            return None;
        }
        if let Some(canonical) = self.aliases.get(&format) {
            return Some(canonical.clone());
        }
        if is_valid_mime_syntax(&format) {
            Some(format)
        } else {
            tracing::debug!("unrecognized media format {format:?}");
            None
        }
    }

    /// Derives a MIME type from a URL via the extension sniffer.
    ///
    /// Sniffed types in the HTML-classified set are rewritten to the literal
    /// `text/html`: extensionless links default to octet-stream and script
    /// endpoints (.php, .jsp, .cgi, ...) serve pages, so neither should pass
    /// as a media file type.
    pub fn from_url(&self, url: Option<&Url>) -> Option<String> {
        let url = url?;
        let sniffed = sniff::sniff_url(url.as_str());
        if self.html_types.contains(&sniffed.to_lowercase()) {
            Some(HTML_TYPE.to_string())
        } else {
            Some(sniffed)
        }
    }
}

/// Checks `type/subtype` token syntax (RFC 2045 tokens, lowercased input).
fn is_valid_mime_syntax(s: &str) -> bool {
    match s.split_once('/') {
        Some((t, sub)) => !t.is_empty() && !sub.is_empty() && is_token(t) && is_token(sub),
        None => false,
    }
}

fn is_token(s: &str) -> bool {
    s.chars()
        .all(|c| c.is_ascii_alphanumeric() || "!#$&^_.+-".contains(c))
}
