use super::residue::ResidueAnnotation;
use super::statistics::StatisticsSummary;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Descriptive metadata of the underlying structure, supplied by the loader.
///
/// The four description strings arrive preformatted as legacy PDB-style line
/// bodies (HEADER, COMPND, SOURCE, AUTHOR); the report writer only pads and
/// terminates them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureMetadata {
    /// Identifier of the structure, used as the persisted data block name.
    pub id: String,
    #[serde(default)]
    pub header: String,
    #[serde(default)]
    pub compound: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub author: String,
}

/// Provenance of one rendering pass: which tool produced the annotation and when.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provenance {
    pub name: String,
    pub version: String,
    pub date: NaiveDate,
}

impl Provenance {
    pub fn new(name: impl Into<String>, version: impl Into<String>, date: NaiveDate) -> Self {
        Self {
            name: name.into(),
            version: version.into(),
            date,
        }
    }
}

impl Default for Provenance {
    fn default() -> Self {
        Self::new(
            env!("CARGO_PKG_NAME"),
            env!("CARGO_PKG_VERSION"),
            chrono::Local::now().date_naive(),
        )
    }
}

/// The complete output of one classification run: everything the two writers need.
///
/// The residue stream is ordered by strictly increasing serial number and is
/// never mutated after creation; both writers consume it in one forward pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructureAnnotation {
    pub metadata: StructureMetadata,
    #[serde(default)]
    pub statistics: StatisticsSummary,
    #[serde(default)]
    pub provenance: Provenance,
    #[serde(default)]
    pub residues: Vec<ResidueAnnotation>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provenance_default_carries_the_crate_identity() {
        let provenance = Provenance::default();
        assert_eq!(provenance.name, "dsspfmt");
        assert_eq!(provenance.version, env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn provenance_new_stores_the_given_date() {
        let date = NaiveDate::from_ymd_opt(2020, 6, 1).unwrap();
        let provenance = Provenance::new("engine", "3.0", date);
        assert_eq!(provenance.date.to_string(), "2020-06-01");
    }
}
