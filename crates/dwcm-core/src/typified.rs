//! Typified-name extraction from typeStatus values.
//!
//! A dwc:typeStatus value often embeds the name the type applies to, e.g.
//! "Holotype of Dianthus fruticosus ssp. amorginus Runemark". This module
//! extracts the trailing name; it deliberately does no scientific-name
//! grammar parsing, so the result is the cleaned verbatim string only.

use std::ops::RangeInclusive;

use once_cell::sync::Lazy;
use regex::Regex;

/// Everything after the last "... of" keyword, case-insensitive.
static NAME_SEPARATOR: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)\sOF\W*\s+\W*(.+)\W*\s*$").expect("valid regex"));

static CLEAN_WHITESPACE: Lazy<Regex> = Lazy::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Length bounds outside which an extracted string is unlikely to be a name.
const REASONABLE_NAME_LEN: RangeInclusive<usize> = 4..=40;

/// Extracts the typified name from a typeStatus value.
///
/// Returns `None` when no "of" separator is present or the captured text
/// falls outside the plausible name length range. Never errors.
pub fn extract_typified_name(input: &str) -> Option<String> {
    if input.trim().is_empty() {
        return None;
    }

    let captured = NAME_SEPARATOR.captures(input)?.get(1)?.as_str();
    let name = CLEAN_WHITESPACE.replace_all(captured, " ").trim().to_string();
    if REASONABLE_NAME_LEN.contains(&name.len()) {
        Some(name)
    } else {
        tracing::debug!("cannot extract typified name from {input:?}");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_name_after_of() {
        assert_eq!(
            extract_typified_name("Holotype of Dianthus fruticosus Runemark").as_deref(),
            Some("Dianthus fruticosus Runemark")
        );
    }

    #[test]
    fn separator_is_case_insensitive() {
        assert_eq!(
            extract_typified_name("PARATYPE OF Abies alba Mill.").as_deref(),
            Some("Abies alba Mill.")
        );
    }

    #[test]
    fn collapses_internal_whitespace() {
        assert_eq!(
            extract_typified_name("Lectotype of  Quercus   robur  L.").as_deref(),
            Some("Quercus robur L.")
        );
    }

    #[test]
    fn no_separator_is_none() {
        assert_eq!(extract_typified_name("Holotype"), None);
        assert_eq!(extract_typified_name(""), None);
        assert_eq!(extract_typified_name("   "), None);
    }

    #[test]
    fn implausible_lengths_are_none() {
        assert_eq!(extract_typified_name("Holotype of X"), None);
        let long = format!("Holotype of {}", "x".repeat(60));
        assert_eq!(extract_typified_name(&long), None);
    }
}
