//! Dictionary-backed string lookup for controlled vocabularies.
//!
//! Publishers spell vocabulary terms every way imaginable
//! ("PreservedSpecimen", "preserved specimen", "Conserved Specimen").
//! A [`DictionaryParser`] maps such verbatim values to canonical terms via
//! an aggressively normalized exact match over an embedded TSV dictionary.

mod basis_of_record;

pub use basis_of_record::{BasisOfRecord, BasisOfRecordParser};

use std::collections::HashMap;

use anyhow::{bail, Result};

/// Exact-match lookup table built from `verbatim<TAB>canonical` lines.
///
/// Keys are normalized to uppercase alphanumerics before comparison, so
/// case, whitespace, and punctuation differences never matter. Read-only
/// after construction.
#[derive(Debug, Clone)]
pub struct DictionaryParser {
    entries: HashMap<String, String>,
}

impl DictionaryParser {
    /// Builds a parser from TSV dictionary source. Blank lines and `#`
    /// comments are skipped; a malformed line is a fatal init error, not a
    /// lookup-time one.
    pub fn from_tsv(source: &str) -> Result<Self> {
        let mut entries = HashMap::new();
        for (lineno, line) in source.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let Some((verbatim, canonical)) = line.split_once('\t') else {
                bail!("dictionary line {} has no tab separator: {line:?}", lineno + 1);
            };
            let key = normalize(verbatim);
            if key.is_empty() {
                bail!("dictionary line {} normalizes to nothing: {line:?}", lineno + 1);
            }
            entries.insert(key, canonical.trim().to_string());
        }
        Ok(Self { entries })
    }

    /// Looks up a verbatim value; `None` for unknown terms.
    pub fn parse(&self, input: &str) -> Option<&str> {
        let key = normalize(input);
        if key.is_empty() {
            return None;
        }
        self.entries.get(&key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Uppercase alphanumerics only; everything else is dropped.
fn normalize(s: &str) -> String {
    s.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}
