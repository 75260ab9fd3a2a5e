//! Classify command: normalize one media reference and print it as JSON.

use anyhow::Result;
use dwcm_core::media::MediaClassifier;

pub fn run_classify(classifier: &MediaClassifier, url: &str, format: Option<&str>) -> Result<()> {
    let record = classifier.classify_media(url, format);
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}
