//! Media reference model and normalization.
//!
//! A [`MediaRecord`] is one media reference from an occurrence record:
//! identifier URL, normalized format, coarse category, and an optional
//! fallback `references` link for URLs that turn out to be web pages.

mod classify;
mod split;

pub use classify::MediaClassifier;
pub use split::{split_associated_media, split_with_delimiters, DEFAULT_DELIMITERS};

use serde::{Deserialize, Serialize};
use url::Url;

/// Coarse media category derived from the primary MIME type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaCategory {
    StillImage,
    Sound,
    MovingImage,
}

impl MediaCategory {
    /// Category for a normalized MIME type, by case-sensitive prefix match
    /// on the primary type.
    pub fn from_format(format: &str) -> Option<Self> {
        if format.starts_with("image") {
            Some(MediaCategory::StillImage)
        } else if format.starts_with("audio") {
            Some(MediaCategory::Sound)
        } else if format.starts_with("video") {
            Some(MediaCategory::MovingImage)
        } else {
            None
        }
    }
}

/// One media reference, mutated in place by [`MediaClassifier::classify`].
///
/// When classification decides the identifier is a web page rather than a
/// media file, the URL moves to `references` and `identifier`/`format` are
/// cleared.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MediaRecord {
    /// Direct URL of the media file, if known.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub identifier: Option<Url>,
    /// Normalized MIME type.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    /// Coarse category; unset when the format matches no known prefix.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub category: Option<MediaCategory>,
    /// Web page about the media, for identifiers that resolve to HTML.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub references: Option<Url>,
}

impl MediaRecord {
    /// Record for a media URL with an optional declared (already normalized)
    /// format.
    pub fn new(identifier: Option<Url>, format: Option<String>) -> Self {
        Self {
            identifier,
            format,
            category: None,
            references: None,
        }
    }
}
