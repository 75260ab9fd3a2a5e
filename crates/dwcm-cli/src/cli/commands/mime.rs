//! Mime command: resolve a normalized MIME type.

use anyhow::{bail, Result};
use dwcm_core::mime::MimeResolver;
use dwcm_core::url_parse;

/// Resolve from a declared format or a URL, printing the normalized type or
/// "unknown" when resolution yields nothing.
pub fn run_mime(resolver: &MimeResolver, format: Option<&str>, url: Option<&str>) -> Result<()> {
    let resolved = match (format, url) {
        (Some(format), _) => resolver.from_declared_format(Some(format)),
        (None, Some(raw)) => {
            let url = url_parse::parse(raw);
            if url.is_none() {
                bail!("not a valid URL: {raw}");
            }
            resolver.from_url(url.as_ref())
        }
        (None, None) => bail!("pass either --format or --url"),
    };

    println!("{}", resolved.as_deref().unwrap_or("unknown"));
    Ok(())
}
