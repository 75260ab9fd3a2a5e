//! BasisOfRecord command: interpret a verbatim vocabulary value.

use anyhow::Result;
use dwcm_core::dictionary::BasisOfRecordParser;

pub fn run_basis_of_record(value: &str) -> Result<()> {
    let parser = BasisOfRecordParser::new()?;
    match parser.parse(value) {
        Some(basis) => println!("{basis:?}"),
        None => println!("unknown"),
    }
    Ok(())
}
