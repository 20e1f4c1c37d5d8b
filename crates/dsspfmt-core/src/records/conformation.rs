//! Run-length segmentation of the residue stream into conformation records.
//!
//! A forward pass collapses consecutive residues sharing one non-loop
//! classification into `struct_conf` rows, declares each conformation type
//! once in `struct_conf_type`, and finishes with a `software` provenance row
//! before asking the sink to persist itself.

use super::sink::{DataBlock, Row};
use crate::io::traits::AnnotationFormat;
use crate::models::annotation::StructureAnnotation;
use crate::models::residue::{ResidueAnnotation, SecondaryStructure};
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CifError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// mmCIF conformation-type identifier for a classification, or `None` for
/// classifications that produce no record.
pub(crate) fn conf_type_id(ss: SecondaryStructure) -> Option<&'static str> {
    match ss {
        SecondaryStructure::Helix3 => Some("HELX_RH_3T_P"),
        SecondaryStructure::AlphaHelix => Some("HELX_RH_AL_P"),
        SecondaryStructure::Helix5 => Some("HELX_RH_PI_P"),
        SecondaryStructure::HelixPpII => Some("HELX_LH_PP_P"),
        SecondaryStructure::Turn => Some("TURN_TY1_P"),
        SecondaryStructure::Bend => Some("TURN_P"),
        SecondaryStructure::BetaBridge | SecondaryStructure::Strand => Some("STRN"),
        SecondaryStructure::Loop => None,
    }
}

/// Segments the residue stream and appends the conformation records.
///
/// The registry doubles as type-declaration dedup and per-type occurrence
/// counter: a type is declared exactly when its counter is created.
pub fn annotate_conformations(residues: &[ResidueAnnotation], block: &mut DataBlock) {
    let mut registry: HashMap<&'static str, u32> = HashMap::new();
    let mut start = 0;
    for next in 1..=residues.len() {
        if next < residues.len() && residues[next].ss == residues[start].ss {
            continue;
        }
        close_segment(&residues[start], &residues[next - 1], &mut registry, block);
        start = next;
    }
}

fn close_segment(
    first: &ResidueAnnotation,
    last: &ResidueAnnotation,
    registry: &mut HashMap<&'static str, u32>,
    block: &mut DataBlock,
) {
    let Some(type_id) = conf_type_id(first.ss) else {
        return;
    };
    let counter = match registry.entry(type_id) {
        Entry::Vacant(entry) => {
            block
                .category_mut("struct_conf_type")
                .push(Row::new().with("id", type_id));
            entry.insert(0)
        }
        Entry::Occupied(entry) => entry.into_mut(),
    };
    let row = Row::new()
        .with("conf_type_id", type_id)
        .with("id", format!("{type_id}{counter}"))
        .with("beg_label_comp_id", first.id.compound_id.clone())
        .with("beg_label_asym_id", first.id.asym_id.clone())
        .with("beg_label_seq_id", first.id.seq_id.to_string())
        .with("pdbx_beg_PDB_ins_code", first.id.ins_code.clone())
        .with("end_label_comp_id", last.id.compound_id.clone())
        .with("end_label_asym_id", last.id.asym_id.clone())
        .with("end_label_seq_id", last.id.seq_id.to_string())
        .with("pdbx_end_PDB_ins_code", last.id.ins_code.clone())
        .with("beg_auth_comp_id", first.id.compound_id.clone())
        .with("beg_auth_asym_id", first.id.auth_asym_id.clone())
        .with("beg_auth_seq_id", first.id.auth_seq_id.to_string())
        .with("end_auth_comp_id", last.id.compound_id.clone())
        .with("end_auth_asym_id", last.id.auth_asym_id.clone())
        .with("end_auth_seq_id", last.id.auth_seq_id.to_string())
        .with("criteria", "DSSP");
    *counter += 1;
    block.category_mut("struct_conf").push(row);
}

/// The mmCIF annotation writer: conformation records plus one provenance row.
pub struct CifAnnotation;

impl AnnotationFormat for CifAnnotation {
    type Error = CifError;

    fn write_to(
        annotation: &StructureAnnotation,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let mut block = DataBlock::new(annotation.metadata.id.as_str());
        annotate_conformations(&annotation.residues, &mut block);

        let provenance = &annotation.provenance;
        block.category_mut("software").push(
            Row::new()
                .with("name", provenance.name.clone())
                .with("classification", "other")
                .with("version", provenance.version.clone())
                .with("date", provenance.date.format("%Y-%m-%d").to_string()),
        );

        block.write_to(writer)?;
        Ok(())
    }
}
