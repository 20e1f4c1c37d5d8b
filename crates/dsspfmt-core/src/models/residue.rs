use nalgebra::Point3;
use phf::{Map, phf_map};
use serde::{Deserialize, Serialize};

/// Sentinel used by the classification engine for dihedral angles it could not compute.
pub const UNDEFINED_ANGLE: f64 = 360.0;

static ONE_LETTER_CODES: Map<&'static str, char> = phf_map! {
    "ALA" => 'A', "ARG" => 'R', "ASN" => 'N', "ASP" => 'D', "ASX" => 'B',
    "CYS" => 'C', "GLN" => 'Q', "GLU" => 'E', "GLX" => 'Z', "GLY" => 'G',
    "HIS" => 'H', "ILE" => 'I', "LEU" => 'L', "LYS" => 'K', "MET" => 'M',
    "PHE" => 'F', "PRO" => 'P', "SER" => 'S', "THR" => 'T', "TRP" => 'W',
    "TYR" => 'Y', "VAL" => 'V',
};

/// Per-residue secondary-structure classification, as assigned by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SecondaryStructure {
    AlphaHelix,   // H
    BetaBridge,   // B
    Strand,       // E
    Helix3,       // G (3-10 helix)
    Helix5,       // I (pi helix)
    HelixPpII,    // P (polyproline-II helix)
    Turn,         // T
    Bend,         // S
    Loop,         // blank
}

impl SecondaryStructure {
    /// The single-character code used in the STRUCTURE column of the classic report.
    pub fn code(self) -> char {
        match self {
            SecondaryStructure::AlphaHelix => 'H',
            SecondaryStructure::BetaBridge => 'B',
            SecondaryStructure::Strand => 'E',
            SecondaryStructure::Helix3 => 'G',
            SecondaryStructure::Helix5 => 'I',
            SecondaryStructure::HelixPpII => 'P',
            SecondaryStructure::Turn => 'T',
            SecondaryStructure::Bend => 'S',
            SecondaryStructure::Loop => ' ',
        }
    }
}

/// The four helix classes tracked independently per residue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HelixKind {
    ThreeTen,
    Alpha,
    Pi,
    PolyProline,
}

/// Position of a residue within one helix class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HelixPosition {
    #[default]
    None,
    Start,
    End,
    StartAndEnd,
    Middle,
}

/// Helix membership of one residue, one slot per helix class.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HelixFlags {
    pub three_ten: HelixPosition,
    pub alpha: HelixPosition,
    pub pi: HelixPosition,
    pub poly_proline: HelixPosition,
}

impl HelixFlags {
    pub fn position(&self, kind: HelixKind) -> HelixPosition {
        match kind {
            HelixKind::ThreeTen => self.three_ten,
            HelixKind::Alpha => self.alpha,
            HelixKind::Pi => self.pi,
            HelixKind::PolyProline => self.poly_proline,
        }
    }
}

/// Relation of a residue to the previously emitted residue in the stream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChainBreak {
    #[default]
    None,
    Gap,
    NewChain,
}

/// One strand pairing of a residue: the partner's serial number, the ladder the
/// pair belongs to (0-based), and the ladder's orientation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BridgePartner {
    pub nr: i64,
    pub ladder: u32,
    pub parallel: bool,
}

/// One backbone hydrogen bond: the partner's serial number and the bond energy in kcal/mol.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HBond {
    pub partner_nr: i64,
    pub energy: f64,
}

/// Identity of a residue in both the model-native (label) and author-facing forms.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidueId {
    pub compound_id: String,
    pub asym_id: String,
    pub seq_id: i64,
    pub auth_asym_id: String,
    pub auth_seq_id: i64,
    #[serde(default)]
    pub ins_code: String,
}

impl ResidueId {
    /// One-letter amino-acid code; unknown compounds map to `'X'`.
    pub fn one_letter_code(&self) -> char {
        ONE_LETTER_CODES
            .get(self.compound_id.as_str())
            .copied()
            .unwrap_or('X')
    }
}

/// The full classification of one residue, as produced by the engine.
///
/// Streams of these are ordered by strictly increasing `nr`, the dense serial
/// number assigned during classification (not the author-facing residue number).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResidueAnnotation {
    pub nr: i64,
    pub id: ResidueId,
    pub ss: SecondaryStructure,
    #[serde(default)]
    pub helix: HelixFlags,
    #[serde(default)]
    pub bend: bool,
    #[serde(default = "undefined_angle")]
    pub alpha: f64,
    #[serde(default)]
    pub bridge_partner_1: Option<BridgePartner>,
    #[serde(default)]
    pub bridge_partner_2: Option<BridgePartner>,
    /// 0 means "not part of any sheet", otherwise a 1-based sheet index.
    #[serde(default)]
    pub sheet: u32,
    /// 1-based disulfide-bridge index, present only for bridged cystines.
    #[serde(default)]
    pub ss_bridge_nr: Option<u32>,
    #[serde(default)]
    pub donor_1: Option<HBond>,
    #[serde(default)]
    pub donor_2: Option<HBond>,
    #[serde(default)]
    pub acceptor_1: Option<HBond>,
    #[serde(default)]
    pub acceptor_2: Option<HBond>,
    /// Solvent-accessible surface in square Angstrom.
    #[serde(default)]
    pub accessibility: f64,
    #[serde(default)]
    pub tco: f64,
    #[serde(default = "undefined_angle")]
    pub kappa: f64,
    #[serde(default = "undefined_angle")]
    pub phi: f64,
    #[serde(default = "undefined_angle")]
    pub psi: f64,
    #[serde(default = "origin")]
    pub ca: Point3<f64>,
    #[serde(default)]
    pub chain_break: ChainBreak,
}

fn undefined_angle() -> f64 {
    UNDEFINED_ANGLE
}

fn origin() -> Point3<f64> {
    Point3::origin()
}

impl ResidueAnnotation {
    /// Bridge-partner slot 0 or 1. Slots beyond 1 are always empty.
    pub fn bridge_partner(&self, slot: usize) -> Option<&BridgePartner> {
        match slot {
            0 => self.bridge_partner_1.as_ref(),
            1 => self.bridge_partner_2.as_ref(),
            _ => None,
        }
    }

    /// Hydrogen-bond donor slot 0 or 1 (O(i) --> H-N(j) bonds).
    pub fn donor(&self, slot: usize) -> Option<&HBond> {
        match slot {
            0 => self.donor_1.as_ref(),
            1 => self.donor_2.as_ref(),
            _ => None,
        }
    }

    /// Hydrogen-bond acceptor slot 0 or 1 (N-H(i) --> O(j) bonds).
    pub fn acceptor(&self, slot: usize) -> Option<&HBond> {
        match slot {
            0 => self.acceptor_1.as_ref(),
            1 => self.acceptor_2.as_ref(),
            _ => None,
        }
    }
}
