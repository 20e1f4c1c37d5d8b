//! Loader for the TOML annotation document that carries a classification
//! run's output between the engine and the renderers.

use crate::models::annotation::StructureAnnotation;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocumentError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("malformed annotation document: {0}")]
    Parse(#[from] Box<toml::de::Error>),
    #[error("residue stream is out of order: nr {found} follows nr {previous}")]
    OutOfOrder { previous: i64, found: i64 },
}

/// Parses an annotation document and validates the residue-stream ordering
/// invariant the renderers depend on.
pub fn load_from_str(input: &str) -> Result<StructureAnnotation, DocumentError> {
    let annotation: StructureAnnotation =
        toml::from_str(input).map_err(Box::new)?;
    let mut previous: Option<i64> = None;
    for res in &annotation.residues {
        if let Some(prev) = previous {
            if res.nr <= prev {
                return Err(DocumentError::OutOfOrder {
                    previous: prev,
                    found: res.nr,
                });
            }
        }
        previous = Some(res.nr);
    }
    Ok(annotation)
}

/// Reads and parses an annotation document from a file path.
pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<StructureAnnotation, DocumentError> {
    load_from_str(&fs::read_to_string(path)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::residue::{ChainBreak, HelixPosition, SecondaryStructure};

    const MINIMAL: &str = r#"
[metadata]
id = "1XYZ"
header = "HEADER    PLANT PROTEIN"

[statistics]
residues = 2
chains = 1

[provenance]
name = "dssp"
version = "4.0"
date = "2020-06-01"

[[residues]]
nr = 1
ss = "AlphaHelix"
alpha = -48.2
ca = [25.0, 24.3, 10.2]
[residues.id]
compound_id = "ALA"
asym_id = "A"
seq_id = 1
auth_asym_id = "A"
auth_seq_id = 1

[[residues]]
nr = 2
ss = "Loop"
chain_break = "Gap"
[residues.id]
compound_id = "GLY"
asym_id = "A"
seq_id = 2
auth_asym_id = "A"
auth_seq_id = 2
[residues.helix]
alpha = "End"
"#;

    #[test]
    fn minimal_document_parses_with_defaults() {
        let annotation = load_from_str(MINIMAL).unwrap();
        assert_eq!(annotation.metadata.id, "1XYZ");
        assert_eq!(annotation.statistics.residues, 2);
        assert_eq!(annotation.provenance.version, "4.0");
        assert_eq!(annotation.residues.len(), 2);

        let first = &annotation.residues[0];
        assert_eq!(first.ss, SecondaryStructure::AlphaHelix);
        assert_eq!(first.alpha, -48.2);
        assert_eq!(first.ca.x, 25.0);
        assert!(first.bridge_partner(0).is_none());
        assert_eq!(first.chain_break, ChainBreak::None);

        let second = &annotation.residues[1];
        assert_eq!(second.chain_break, ChainBreak::Gap);
        assert_eq!(second.helix.alpha, HelixPosition::End);
        assert_eq!(second.kappa, 360.0);
    }

    #[test]
    fn out_of_order_residue_stream_is_rejected() {
        let doc = MINIMAL.replace("nr = 2", "nr = 1");
        let err = load_from_str(&doc).unwrap_err();
        assert!(matches!(
            err,
            DocumentError::OutOfOrder {
                previous: 1,
                found: 1
            }
        ));
    }

    #[test]
    fn syntactically_broken_document_is_a_parse_error() {
        assert!(matches!(
            load_from_str("metadata = 3"),
            Err(DocumentError::Parse(_))
        ));
    }

    #[test]
    fn load_from_path_round_trips_through_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("annotation.toml");
        std::fs::write(&path, MINIMAL).unwrap();
        let annotation = load_from_path(&path).unwrap();
        assert_eq!(annotation.residues.len(), 2);
    }

    #[test]
    fn missing_file_is_an_io_error() {
        assert!(matches!(
            load_from_path("/nonexistent/annotation.toml"),
            Err(DocumentError::Io(_))
        ));
    }
}
