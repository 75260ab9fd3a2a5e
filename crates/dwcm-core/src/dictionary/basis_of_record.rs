//! Darwin Core basisOfRecord vocabulary parser.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::DictionaryParser;

/// The Darwin Core basisOfRecord controlled vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BasisOfRecord {
    HumanObservation,
    MachineObservation,
    PreservedSpecimen,
    FossilSpecimen,
    LivingSpecimen,
    MaterialSample,
    MaterialCitation,
    Occurrence,
}

impl BasisOfRecord {
    fn from_canonical(name: &str) -> Option<Self> {
        match name {
            "HumanObservation" => Some(Self::HumanObservation),
            "MachineObservation" => Some(Self::MachineObservation),
            "PreservedSpecimen" => Some(Self::PreservedSpecimen),
            "FossilSpecimen" => Some(Self::FossilSpecimen),
            "LivingSpecimen" => Some(Self::LivingSpecimen),
            "MaterialSample" => Some(Self::MaterialSample),
            "MaterialCitation" => Some(Self::MaterialCitation),
            "Occurrence" => Some(Self::Occurrence),
            _ => None,
        }
    }
}

/// Maps verbatim basisOfRecord values to the vocabulary, backed by the
/// embedded dictionary file. Build once at startup; lookups are pure.
#[derive(Debug, Clone)]
pub struct BasisOfRecordParser {
    dict: DictionaryParser,
}

impl BasisOfRecordParser {
    /// Loads the embedded dictionary. Failure here means the shipped
    /// resource is broken, so callers should treat it as fatal.
    pub fn new() -> Result<Self> {
        let dict = DictionaryParser::from_tsv(include_str!("../../resources/basis_of_record.tsv"))
            .context("embedded basisOfRecord dictionary is malformed")?;
        Ok(Self { dict })
    }

    pub fn parse(&self, input: &str) -> Option<BasisOfRecord> {
        let canonical = self.dict.parse(input)?;
        let parsed = BasisOfRecord::from_canonical(canonical);
        if parsed.is_none() {
            tracing::debug!("dictionary maps {input:?} to unknown term {canonical:?}");
        }
        parsed
    }
}
