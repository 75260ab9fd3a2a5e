//! Media record classification.

use super::{MediaCategory, MediaRecord};
use crate::mime::{MimeResolver, HTML_TYPE};
use crate::url_parse;

/// Classifies media records: fills in a missing format from the identifier
/// URL, redirects HTML pages to the `references` field, and assigns the
/// coarse category.
///
/// Holds only read-only state; build one from config at startup and share.
#[derive(Debug, Clone, Default)]
pub struct MediaClassifier {
    resolver: MimeResolver,
}

impl MediaClassifier {
    pub fn new(resolver: MimeResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &MimeResolver {
        &self.resolver
    }

    /// Classifies a record in place.
    ///
    /// 1. An empty format is derived from the identifier URL.
    /// 2. A `text/html` format means the identifier is a web page: the URL
    ///    moves to `references` and identifier/format are cleared.
    /// 3. A remaining format assigns the category by primary-type prefix;
    ///    unknown prefixes leave it unset.
    pub fn classify(&self, record: &mut MediaRecord) {
        if record.format.as_deref().is_none_or(str::is_empty) {
            record.format = self.resolver.from_url(record.identifier.as_ref());
        }

        // A media identifier serving HTML is a page about the media, not the
        // media itself.
        let is_html = record
            .format
            .as_deref()
            .is_some_and(|f| f.eq_ignore_ascii_case(HTML_TYPE));
        if is_html && record.identifier.is_some() {
            record.references = record.identifier.take();
            record.format = None;
        }

        if let Some(format) = record.format.as_deref().filter(|f| !f.is_empty()) {
            match MediaCategory::from_format(format) {
                Some(category) => record.category = Some(category),
                None => tracing::debug!("unsupported media format {format:?}"),
            }
        }
    }

    /// Convenience for pipeline callers: builds a record from a raw URL and
    /// an optional declared format, normalizes the format, and classifies.
    pub fn classify_media(&self, identifier: &str, declared_format: Option<&str>) -> MediaRecord {
        let mut record = MediaRecord::new(
            url_parse::parse(identifier),
            self.resolver.from_declared_format(declared_format),
        );
        self.classify(&mut record);
        record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classifier() -> MediaClassifier {
        MediaClassifier::default()
    }

    #[test]
    fn derives_format_and_category_from_jpg_url() {
        let mut record = MediaRecord::new(url_parse::parse("http://a.org/specimen.jpg"), None);
        classifier().classify(&mut record);
        assert!(record.format.as_deref().unwrap().starts_with("image/"));
        assert_eq!(record.category, Some(MediaCategory::StillImage));
        assert!(record.identifier.is_some());
        assert!(record.references.is_none());
    }

    #[test]
    fn audio_and_video_categories() {
        let c = classifier();

        let mut sound = MediaRecord::new(url_parse::parse("http://a.org/call.mp3"), None);
        c.classify(&mut sound);
        assert_eq!(sound.category, Some(MediaCategory::Sound));

        let mut movie = MediaRecord::new(url_parse::parse("http://a.org/clip.mp4"), None);
        c.classify(&mut movie);
        assert_eq!(movie.category, Some(MediaCategory::MovingImage));
    }

    #[test]
    fn declared_format_is_trusted_over_url() {
        let mut record = MediaRecord::new(
            url_parse::parse("http://a.org/download/4711"),
            Some("image/tiff".to_string()),
        );
        classifier().classify(&mut record);
        assert_eq!(record.format.as_deref(), Some("image/tiff"));
        assert_eq!(record.category, Some(MediaCategory::StillImage));
    }

    #[test]
    fn html_format_becomes_references_link() {
        let mut record = MediaRecord::new(
            url_parse::parse("http://a.org/specimen/view"),
            Some("text/html".to_string()),
        );
        classifier().classify(&mut record);
        assert!(record.identifier.is_none());
        assert!(record.format.is_none());
        assert!(record.category.is_none());
        assert_eq!(
            record.references.unwrap().as_str(),
            "http://a.org/specimen/view"
        );
    }

    #[test]
    fn html_check_is_case_insensitive() {
        let mut record = MediaRecord::new(
            url_parse::parse("http://a.org/page"),
            Some("Text/HTML".to_string()),
        );
        classifier().classify(&mut record);
        assert!(record.identifier.is_none());
        assert!(record.references.is_some());
    }

    #[test]
    fn extensionless_url_is_treated_as_link() {
        // Sniffer falls back to octet-stream, which the resolver rewrites
        // to text/html, which classification turns into a references link.
        let mut record = MediaRecord::new(url_parse::parse("http://a.org/specimen/12345"), None);
        classifier().classify(&mut record);
        assert!(record.identifier.is_none());
        assert!(record.format.is_none());
        assert!(record.references.is_some());
    }

    #[test]
    fn html_format_without_identifier_stays_put() {
        let mut record = MediaRecord::new(None, Some("text/html".to_string()));
        classifier().classify(&mut record);
        assert_eq!(record.format.as_deref(), Some("text/html"));
        assert!(record.references.is_none());
        assert!(record.category.is_none());
    }

    #[test]
    fn unknown_format_leaves_category_unset() {
        let mut record = MediaRecord::new(
            url_parse::parse("http://a.org/doc.pdf"),
            Some("application/pdf".to_string()),
        );
        classifier().classify(&mut record);
        assert_eq!(record.format.as_deref(), Some("application/pdf"));
        assert!(record.category.is_none());
        assert!(record.identifier.is_some());
    }

    #[test]
    fn classify_media_normalizes_declared_alias() {
        let record = classifier().classify_media("http://a.org/x.unknownext", Some("image/jpg"));
        assert_eq!(record.format.as_deref(), Some("image/jpeg"));
        assert_eq!(record.category, Some(MediaCategory::StillImage));
    }

    #[test]
    fn classify_media_with_garbage_url() {
        let record = classifier().classify_media("not a url", None);
        assert!(record.identifier.is_none());
        assert!(record.format.is_none());
        assert!(record.category.is_none());
        assert!(record.references.is_none());
    }
}
