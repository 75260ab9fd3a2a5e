//! TypifiedName command: extract the name a typeStatus value refers to.

use anyhow::Result;
use dwcm_core::typified;

pub fn run_typified_name(value: &str) -> Result<()> {
    match typified::extract_typified_name(value) {
        Some(name) => println!("{name}"),
        None => println!("unknown"),
    }
    Ok(())
}
