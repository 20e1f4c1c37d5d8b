//! The classic fixed-column DSSP report.
//!
//! Column layout is a compatibility contract: every line reproduces the
//! legacy format byte-for-byte, including its quirks (26-letter label
//! cycling, 4-digit bridge-partner numbers, the `!` break lines).

use super::fields::{self, FieldOverflow};
use super::traits::AnnotationFormat;
use crate::models::annotation::StructureAnnotation;
use crate::models::residue::{
    ChainBreak, HelixKind, HelixPosition, ResidueAnnotation, UNDEFINED_ANGLE,
};
use std::io::{self, Write};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum DsspError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("chain identifier '{chain}' does not fit the single-character chain column")]
    ChainTooWide { chain: String },
    #[error(transparent)]
    FieldOverflow(#[from] FieldOverflow),
}

const FIRST_LINE: &str = "==== Secondary Structure Definition by the program DSSP, NKI version 3.0                           ==== ";
const REFERENCE_LINE: &str =
    "REFERENCE W. KABSCH AND C.SANDER, BIOPOLYMERS 22 (1983) 2577-2637";
const RESIDUE_CAPTION: &str = "  #  RESIDUE AA STRUCTURE BP1 BP2  ACC     N-H-->O    O-->H-N    N-H-->O    O-->H-N    TCO  KAPPA ALPHA  PHI   PSI    X-CA   Y-CA   Z-CA";
const HISTOGRAM_CAPTION: &str = "  1  2  3  4  5  6  7  8  9 10 11 12 13 14 15 16 17 18 19 20 21 22 23 24 25 26 27 28 29 30     *** HISTOGRAMS OF ***           .";

/// Column of the trailing period marker on header lines.
const MARKER_COLUMN: usize = 127;

/// Pads a header line body to the marker column and terminates it with `.`.
fn terminated(content: &str) -> String {
    format!("{content:<MARKER_COLUMN$}.")
}

fn helix_char(kind: HelixKind, position: HelixPosition) -> char {
    match position {
        HelixPosition::None => ' ',
        HelixPosition::Start => '>',
        HelixPosition::End => '<',
        HelixPosition::StartAndEnd => 'X',
        HelixPosition::Middle => match kind {
            HelixKind::ThreeTen => '3',
            HelixKind::Alpha => '4',
            HelixKind::Pi => '5',
            HelixKind::PolyProline => 'P',
        },
    }
}

fn hbond_cell(partner: Option<&crate::models::residue::HBond>, own_nr: i64) -> String {
    match partner {
        Some(bond) => format!(
            "{},{}",
            bond.partner_nr - own_nr,
            fields::fixed_real(bond.energy, 3, 1)
        ),
        None => "0, 0.0".to_string(),
    }
}

/// Renders one residue into its 136-column report line.
pub(crate) fn residue_line(res: &ResidueAnnotation) -> Result<String, DsspError> {
    if res.id.asym_id.chars().count() != 1 {
        return Err(DsspError::ChainTooWide {
            chain: res.id.asym_id.clone(),
        });
    }

    let mut code = res.id.one_letter_code();
    if code == 'C' {
        // bridged cystines get a lowercase pair letter instead of 'C'
        if let Some(bridge_nr) = res.ss_bridge_nr.filter(|&nr| nr > 0) {
            code = fields::cycle_lower(bridge_nr - 1);
        }
    }

    let helix: String = [
        HelixKind::PolyProline,
        HelixKind::ThreeTen,
        HelixKind::Alpha,
        HelixKind::Pi,
    ]
    .into_iter()
    .map(|kind| helix_char(kind, res.helix.position(kind)))
    .collect();

    let bend = if res.bend { 'S' } else { ' ' };
    let chirality = if res.alpha == UNDEFINED_ANGLE {
        ' '
    } else if res.alpha < 0.0 {
        '-'
    } else {
        '+'
    };

    let mut bp = [0i64; 2];
    let mut bridge_label = [' '; 2];
    for slot in 0..2 {
        if let Some(partner) = res.bridge_partner(slot) {
            // the partner number won't fit in four columns otherwise
            bp[slot] = partner.nr % 10000;
            bridge_label[slot] = if partner.parallel {
                fields::cycle_lower(partner.ladder)
            } else {
                fields::cycle_upper(partner.ladder)
            };
        }
    }

    let sheet = if res.sheet == 0 {
        ' '
    } else {
        fields::cycle_upper(res.sheet - 1)
    };

    let nho = [
        hbond_cell(res.acceptor(0), res.nr),
        hbond_cell(res.acceptor(1), res.nr),
    ];
    let onh = [
        hbond_cell(res.donor(0), res.nr),
        hbond_cell(res.donor(1), res.nr),
    ];

    // the ACC column rounds half up, not half to even
    let acc = (res.accessibility + 0.5).floor() as i64;

    Ok(format!(
        "{nr}{seq}{ins:>1.1}{chain:>1.1} {code}  {ss}{helix}{bend}{chirality}{bl0}{bl1}{bp0:>4}{bp1:>4}{sheet}{acc} {nho0:>11}{onh0:>11}{nho1:>11}{onh1:>11}  {tco}{kappa}{alpha}{phi}{psi} {x} {y} {z}",
        nr = fields::fixed_int(res.nr, 5, "residue number")?,
        seq = fields::fixed_int(res.id.auth_seq_id, 5, "author sequence number")?,
        ins = res.id.ins_code,
        chain = res.id.auth_asym_id,
        code = code,
        ss = res.ss.code(),
        helix = helix,
        bend = bend,
        chirality = chirality,
        bl0 = bridge_label[0],
        bl1 = bridge_label[1],
        bp0 = bp[0],
        bp1 = bp[1],
        sheet = sheet,
        acc = fields::fixed_int(acc, 4, "accessibility")?,
        nho0 = nho[0],
        onh0 = onh[0],
        nho1 = nho[1],
        onh1 = onh[1],
        tco = fields::fixed_real(res.tco, 6, 3),
        kappa = fields::fixed_real(res.kappa, 6, 1),
        alpha = fields::fixed_real(res.alpha, 6, 1),
        phi = fields::fixed_real(res.phi, 6, 1),
        psi = fields::fixed_real(res.psi, 6, 1),
        x = fields::fixed_real(res.ca.x, 6, 1),
        y = fields::fixed_real(res.ca.y, 6, 1),
        z = fields::fixed_real(res.ca.z, 6, 1),
    ))
}

/// One placeholder line for a numbering discontinuity. Exactly one line is
/// emitted per gap, carrying only the first missing serial number and a `*`
/// marker when the cause is a transition to a new chain.
pub(crate) fn break_line(nr: i64, cause: ChainBreak) -> Result<String, DsspError> {
    let marker = if cause == ChainBreak::NewChain { '*' } else { ' ' };
    Ok(format!(
        "{}        !{}             0   0    0      0, 0.0     0, 0.0     0, 0.0     0, 0.0   0.000 360.0 360.0 360.0 360.0    0.0    0.0    0.0",
        fields::fixed_int(nr, 5, "residue number")?,
        marker,
    ))
}

/// Renders the fixed document preamble and the aggregate-statistics block.
fn header_lines(annotation: &StructureAnnotation) -> Result<Vec<String>, DsspError> {
    let stats = &annotation.statistics;
    let meta = &annotation.metadata;
    let mut lines = Vec::new();

    lines.push(terminated(&format!(
        "{FIRST_LINE}DATE={}",
        annotation.provenance.date.format("%Y-%m-%d")
    )));
    lines.push(terminated(REFERENCE_LINE));
    lines.push(terminated(&meta.header));
    lines.push(terminated(&meta.compound));
    lines.push(terminated(&meta.source));
    lines.push(terminated(&meta.author));

    lines.push(terminated(&format!(
        "{}{}{}{}{} TOTAL NUMBER OF RESIDUES, NUMBER OF CHAINS, NUMBER OF SS-BRIDGES(TOTAL,INTRACHAIN,INTERCHAIN)",
        fields::fixed_int(stats.residues.into(), 5, "residue count")?,
        fields::fixed_int(stats.chains.into(), 3, "chain count")?,
        fields::fixed_int(stats.ss_bridges.into(), 3, "ss-bridge count")?,
        fields::fixed_int(stats.intra_chain_ss_bridges.into(), 3, "intra-chain ss-bridge count")?,
        fields::fixed_int(stats.inter_chain_ss_bridges().into(), 3, "inter-chain ss-bridge count")?,
    )));

    lines.push(terminated(&format!(
        "{}   ACCESSIBLE SURFACE OF PROTEIN (ANGSTROM**2)",
        fields::fixed_real(stats.accessible_surface, 8, 1)
    )));

    for (count, label) in [
        (
            stats.h_bonds,
            "TOTAL NUMBER OF HYDROGEN BONDS OF TYPE O(I)-->H-N(J)  , SAME NUMBER PER 100 RESIDUES",
        ),
        (
            stats.h_bonds_in_parallel_bridges,
            "TOTAL NUMBER OF HYDROGEN BONDS IN     PARALLEL BRIDGES, SAME NUMBER PER 100 RESIDUES",
        ),
        (
            stats.h_bonds_in_antiparallel_bridges,
            "TOTAL NUMBER OF HYDROGEN BONDS IN ANTIPARALLEL BRIDGES, SAME NUMBER PER 100 RESIDUES",
        ),
    ] {
        lines.push(terminated(&format!(
            "{}{}   {label}",
            fields::fixed_int(count.into(), 5, "hydrogen-bond count")?,
            fields::fixed_real(stats.per_100_rate(count), 5, 1),
        )));
    }

    for (bucket, &count) in stats.h_bonds_per_distance.iter().enumerate() {
        let offset = bucket as i64 - 5;
        let sign = if offset < 0 { '-' } else { '+' };
        lines.push(terminated(&format!(
            "{}{}   TOTAL NUMBER OF HYDROGEN BONDS OF TYPE O(I)-->H-N(I{sign}{}), SAME NUMBER PER 100 RESIDUES",
            fields::fixed_int(count.into(), 5, "hydrogen-bond count")?,
            fields::fixed_real(stats.per_100_rate(count), 5, 1),
            offset.abs(),
        )));
    }

    lines.push(HISTOGRAM_CAPTION.to_string());

    for (histogram, caption) in [
        (
            &stats.residues_per_alpha_helix,
            "    RESIDUES PER ALPHA HELIX         .",
        ),
        (
            &stats.parallel_bridges_per_ladder,
            "    PARALLEL BRIDGES PER LADDER      .",
        ),
        (
            &stats.antiparallel_bridges_per_ladder,
            "    ANTIPARALLEL BRIDGES PER LADDER  .",
        ),
        (
            &stats.ladders_per_sheet,
            "    LADDERS PER SHEET                .",
        ),
    ] {
        let mut line = String::with_capacity(128);
        for &count in histogram.iter() {
            line.push_str(&fields::fixed_int(count.into(), 3, "histogram count")?);
        }
        line.push_str(caption);
        lines.push(line);
    }

    Ok(lines)
}

/// The classic DSSP report writer.
///
/// Drives the residue stream once: header block, column caption, then per
/// residue a break line where the numbering jumps, followed by the residue's
/// own line.
pub struct DsspReport;

impl AnnotationFormat for DsspReport {
    type Error = DsspError;

    fn write_to(
        annotation: &StructureAnnotation,
        writer: &mut impl Write,
    ) -> Result<(), Self::Error> {
        let mut out = String::new();
        for line in header_lines(annotation)? {
            out.push_str(&line);
            out.push('\n');
        }
        out.push_str(RESIDUE_CAPTION);
        out.push('\n');

        let mut last = 0;
        for res in &annotation.residues {
            if res.nr != last + 1 {
                out.push_str(&break_line(last + 1, res.chain_break)?);
                out.push('\n');
            }
            out.push_str(&residue_line(res)?);
            out.push('\n');
            last = res.nr;
        }

        // nothing reaches the sink until the whole report has rendered
        writer.write_all(out.as_bytes())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::annotation::{Provenance, StructureMetadata};
    use crate::models::residue::{BridgePartner, HBond, HelixFlags, ResidueId, SecondaryStructure};
    use crate::models::statistics::StatisticsSummary;
    use chrono::NaiveDate;
    use nalgebra::Point3;

    fn residue(nr: i64, ss: SecondaryStructure) -> ResidueAnnotation {
        ResidueAnnotation {
            nr,
            id: ResidueId {
                compound_id: "ALA".to_string(),
                asym_id: "A".to_string(),
                seq_id: nr,
                auth_asym_id: "A".to_string(),
                auth_seq_id: nr,
                ins_code: String::new(),
            },
            ss,
            helix: HelixFlags::default(),
            bend: false,
            alpha: UNDEFINED_ANGLE,
            bridge_partner_1: None,
            bridge_partner_2: None,
            sheet: 0,
            ss_bridge_nr: None,
            donor_1: None,
            donor_2: None,
            acceptor_1: None,
            acceptor_2: None,
            accessibility: 0.0,
            tco: 0.0,
            kappa: UNDEFINED_ANGLE,
            phi: UNDEFINED_ANGLE,
            psi: UNDEFINED_ANGLE,
            ca: Point3::origin(),
            chain_break: ChainBreak::None,
        }
    }

    fn annotation(residues: Vec<ResidueAnnotation>) -> StructureAnnotation {
        StructureAnnotation {
            metadata: StructureMetadata {
                id: "1XYZ".to_string(),
                header: "HEADER    TEST PROTEIN".to_string(),
                compound: "COMPND    MOL_ID: 1;".to_string(),
                source: "SOURCE    MOL_ID: 1;".to_string(),
                author: "AUTHOR    A. AUTHOR".to_string(),
            },
            statistics: StatisticsSummary {
                residues: residues.len() as u32,
                chains: 1,
                ..Default::default()
            },
            provenance: Provenance::new(
                "dsspfmt",
                "0.1.0",
                NaiveDate::from_ymd_opt(2020, 6, 1).unwrap(),
            ),
            residues,
        }
    }

    fn render(annotation: &StructureAnnotation) -> Vec<String> {
        let mut out = Vec::new();
        DsspReport::write_to(annotation, &mut out).unwrap();
        String::from_utf8(out)
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn residue_lines_are_136_columns() {
        let line = residue_line(&residue(1, SecondaryStructure::AlphaHelix)).unwrap();
        assert_eq!(line.len(), 136);
        assert_eq!(&line[0..5], "    1");
        assert_eq!(&line[5..10], "    1");
        assert_eq!(&line[10..12], " A");
        assert_eq!(&line[13..14], "A");
        assert_eq!(&line[16..17], "H");
        assert_eq!(&line[25..33], "   0   0");
        assert_eq!(&line[34..38], "   0");
        assert_eq!(&line[39..50], "     0, 0.0");
        assert_eq!(&line[85..91], " 0.000");
        assert_eq!(&line[91..97], " 360.0");
    }

    #[test]
    fn unknown_compound_renders_as_x() {
        let mut res = residue(1, SecondaryStructure::Loop);
        res.id.compound_id = "MSE".to_string();
        let line = residue_line(&res).unwrap();
        assert_eq!(&line[13..14], "X");
    }

    #[test]
    fn bridged_cystines_share_a_lowercase_pair_letter() {
        let mut first = residue(10, SecondaryStructure::Loop);
        first.id.compound_id = "CYS".to_string();
        first.ss_bridge_nr = Some(1);
        let mut second = residue(40, SecondaryStructure::Loop);
        second.id.compound_id = "CYS".to_string();
        second.ss_bridge_nr = Some(1);
        let mut free = residue(50, SecondaryStructure::Loop);
        free.id.compound_id = "CYS".to_string();

        assert_eq!(&residue_line(&first).unwrap()[13..14], "a");
        assert_eq!(&residue_line(&second).unwrap()[13..14], "a");
        assert_eq!(&residue_line(&free).unwrap()[13..14], "C");
    }

    #[test]
    fn disulfide_letters_cycle_past_26_bridges() {
        let mut res = residue(1, SecondaryStructure::Loop);
        res.id.compound_id = "CYS".to_string();
        res.ss_bridge_nr = Some(27);
        assert_eq!(&residue_line(&res).unwrap()[13..14], "a");
    }

    #[test]
    fn helix_columns_render_in_pp_310_alpha_pi_order() {
        let mut res = residue(1, SecondaryStructure::AlphaHelix);
        res.helix = HelixFlags {
            three_ten: HelixPosition::Start,
            alpha: HelixPosition::Middle,
            pi: HelixPosition::End,
            poly_proline: HelixPosition::Middle,
        };
        let line = residue_line(&res).unwrap();
        assert_eq!(&line[17..21], "P>4<");

        res.helix.alpha = HelixPosition::StartAndEnd;
        res.helix.three_ten = HelixPosition::Middle;
        res.helix.pi = HelixPosition::Middle;
        let line = residue_line(&res).unwrap();
        assert_eq!(&line[17..21], "P3X5");
    }

    #[test]
    fn chirality_derives_from_the_alpha_sentinel() {
        let mut res = residue(1, SecondaryStructure::Loop);
        assert_eq!(&residue_line(&res).unwrap()[22..23], " ");
        res.alpha = -60.0;
        assert_eq!(&residue_line(&res).unwrap()[22..23], "-");
        res.alpha = 55.0;
        assert_eq!(&residue_line(&res).unwrap()[22..23], "+");
    }

    #[test]
    fn bridge_partners_render_number_mod_10000_and_case_by_orientation() {
        let mut res = residue(1, SecondaryStructure::Strand);
        res.bridge_partner_1 = Some(BridgePartner {
            nr: 12345,
            ladder: 0,
            parallel: true,
        });
        res.bridge_partner_2 = Some(BridgePartner {
            nr: 7,
            ladder: 2,
            parallel: false,
        });
        res.sheet = 1;
        let line = residue_line(&res).unwrap();
        assert_eq!(&line[23..25], "aC");
        assert_eq!(&line[25..29], "2345");
        assert_eq!(&line[29..33], "   7");
        assert_eq!(&line[33..34], "A");
    }

    #[test]
    fn sheet_labels_cycle_past_26_sheets() {
        let mut res = residue(1, SecondaryStructure::Strand);
        res.sheet = 27;
        assert_eq!(&residue_line(&res).unwrap()[33..34], "A");
    }

    #[test]
    fn hbond_slots_render_offset_and_energy_or_a_placeholder() {
        let mut res = residue(10, SecondaryStructure::AlphaHelix);
        res.acceptor_1 = Some(HBond {
            partner_nr: 13,
            energy: -2.5,
        });
        res.donor_1 = Some(HBond {
            partner_nr: 6,
            energy: -0.3,
        });
        let line = residue_line(&res).unwrap();
        assert_eq!(&line[39..50], "     3,-2.5");
        assert_eq!(&line[50..61], "    -4,-0.3");
        assert_eq!(&line[61..72], "     0, 0.0");
        assert_eq!(&line[72..83], "     0, 0.0");
    }

    #[test]
    fn accessibility_rounds_half_up() {
        let mut res = residue(1, SecondaryStructure::Loop);
        res.accessibility = 7.49;
        assert_eq!(&residue_line(&res).unwrap()[34..38], "   7");
        res.accessibility = 7.5;
        assert_eq!(&residue_line(&res).unwrap()[34..38], "   8");
    }

    #[test]
    fn multi_character_chain_identifier_is_a_format_error() {
        let mut res = residue(1, SecondaryStructure::Loop);
        res.id.asym_id = "AB".to_string();
        assert!(matches!(
            residue_line(&res),
            Err(DsspError::ChainTooWide { .. })
        ));
    }

    #[test]
    fn failed_render_writes_no_bytes() {
        let mut bad = residue(2, SecondaryStructure::Loop);
        bad.id.asym_id = "AB".to_string();
        let annotation = annotation(vec![residue(1, SecondaryStructure::Loop), bad]);
        let mut out = Vec::new();
        assert!(DsspReport::write_to(&annotation, &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn serial_overflow_is_a_format_error() {
        let res = residue(100000, SecondaryStructure::Loop);
        assert!(matches!(
            residue_line(&res),
            Err(DsspError::FieldOverflow(_))
        ));
    }

    #[test]
    fn break_line_marks_new_chains_with_a_star() {
        let gap = break_line(3, ChainBreak::Gap).unwrap();
        assert_eq!(gap.len(), 136);
        assert_eq!(&gap[0..5], "    3");
        assert_eq!(&gap[13..14], "!");
        assert_eq!(&gap[14..15], " ");

        let chain = break_line(47, ChainBreak::NewChain).unwrap();
        assert_eq!(&chain[14..15], "*");
    }

    #[test]
    fn numbering_gap_emits_exactly_one_break_line() {
        let mut fifth = residue(5, SecondaryStructure::Loop);
        fifth.chain_break = ChainBreak::Gap;
        let annotation = annotation(vec![
            residue(1, SecondaryStructure::Loop),
            residue(2, SecondaryStructure::Loop),
            fifth,
            residue(6, SecondaryStructure::Loop),
        ]);
        let lines = render(&annotation);
        // 27 header lines + caption + 4 residues + 1 break line
        assert_eq!(lines.len(), 33);
        let breaks: Vec<&String> = lines.iter().filter(|l| l.contains('!')).collect();
        assert_eq!(breaks.len(), 1);
        assert_eq!(&breaks[0][0..5], "    3");
        assert_eq!(&breaks[0][14..15], " ");
    }

    #[test]
    fn first_residue_not_numbered_one_triggers_a_break_line() {
        let mut first = residue(4, SecondaryStructure::Loop);
        first.chain_break = ChainBreak::NewChain;
        let lines = render(&annotation(vec![first]));
        let breaks: Vec<&String> = lines.iter().filter(|l| l.contains('!')).collect();
        assert_eq!(breaks.len(), 1);
        assert_eq!(&breaks[0][0..5], "    1");
        assert_eq!(&breaks[0][14..15], "*");
    }

    #[test]
    fn empty_stream_produces_only_header_and_caption_lines() {
        let lines = render(&annotation(Vec::new()));
        assert_eq!(lines.len(), 28);
        assert!(lines.iter().all(|l| !l.contains('!')));
        assert_eq!(lines[27], RESIDUE_CAPTION);
    }

    #[test]
    fn header_lines_are_128_columns_and_period_terminated() {
        let annotation = annotation(vec![residue(1, SecondaryStructure::Loop)]);
        let lines = render(&annotation);
        for line in &lines[0..27] {
            assert_eq!(line.len(), 128, "line: {line:?}");
            assert!(line.ends_with('.'), "line: {line:?}");
        }
    }

    #[test]
    fn header_carries_date_reference_and_statistics() {
        let annotation = annotation(vec![residue(1, SecondaryStructure::Loop)]);
        let lines = render(&annotation);
        assert!(lines[0].contains("DATE=2020-06-01"));
        assert_eq!(&lines[1][0..9], "REFERENCE");
        assert!(lines[6].starts_with("    1  1  0  0  0 TOTAL NUMBER OF RESIDUES"));
        assert!(lines[7].contains("ACCESSIBLE SURFACE OF PROTEIN (ANGSTROM**2)"));
        assert!(lines[8].contains("TYPE O(I)-->H-N(J)"));
        assert!(lines[11].contains("O(I)-->H-N(I-5)"));
        assert!(lines[16].contains("O(I)-->H-N(I+0)"));
        assert!(lines[21].contains("O(I)-->H-N(I+5)"));
        assert!(lines[22].contains("*** HISTOGRAMS OF ***"));
        assert!(lines[23].ends_with("RESIDUES PER ALPHA HELIX         ."));
        assert!(lines[26].ends_with("LADDERS PER SHEET                ."));
    }

    #[test]
    fn per_offset_hbond_rates_are_per_100_residues() {
        let mut annotation = annotation(vec![
            residue(1, SecondaryStructure::Loop),
            residue(2, SecondaryStructure::Loop),
        ]);
        annotation.statistics.h_bonds = 3;
        let lines = render(&annotation);
        assert!(lines[8].starts_with("    3150.0"));
    }

    #[test]
    fn every_residue_appears_exactly_once_in_order() {
        let annotation = annotation(
            (1..=20)
                .map(|nr| residue(nr, SecondaryStructure::AlphaHelix))
                .collect(),
        );
        let lines = render(&annotation);
        let residue_lines: Vec<&String> = lines[28..].iter().collect();
        assert_eq!(residue_lines.len(), 20);
        for (i, line) in residue_lines.iter().enumerate() {
            assert_eq!(line[0..5].trim(), (i + 1).to_string());
        }
    }

    #[test]
    fn write_to_path_creates_the_report_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.dssp");
        let annotation = annotation(vec![residue(1, SecondaryStructure::Loop)]);
        DsspReport::write_to_path(&annotation, &path).unwrap();
        let content = std::fs::read_to_string(&path).unwrap();
        assert_eq!(content.lines().count(), 29);
    }
}
