//! Split command: break a multi-value associatedMedia string into URLs.

use anyhow::Result;
use dwcm_core::config::DwcmConfig;
use dwcm_core::media;

/// Split and print one URL per line. An unsplittable value prints nothing
/// and still exits 0: garbage input is an empty result, not an error.
pub fn run_split(cfg: &DwcmConfig, value: &str) -> Result<()> {
    let urls = media::split_with_delimiters(value, &cfg.delimiters());
    for url in urls {
        println!("{url}");
    }
    Ok(())
}
