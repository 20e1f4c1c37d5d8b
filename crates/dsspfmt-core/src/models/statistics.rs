use serde::{Deserialize, Serialize};

/// Number of buckets in each of the four count histograms of the report header.
pub const HISTOGRAM_SIZE: usize = 30;

/// Number of backbone-offset buckets for hydrogen bonds, covering offsets -5..=+5.
pub const HBOND_OFFSET_BUCKETS: usize = 11;

/// Aggregate statistics over one classified structure, computed by the engine
/// and rendered verbatim into the report header.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatisticsSummary {
    pub residues: u32,
    pub chains: u32,
    pub ss_bridges: u32,
    pub intra_chain_ss_bridges: u32,
    /// Total accessible surface of the protein in square Angstrom.
    pub accessible_surface: f64,
    pub h_bonds: u32,
    pub h_bonds_in_parallel_bridges: u32,
    pub h_bonds_in_antiparallel_bridges: u32,
    /// Hydrogen bonds of type O(i) --> H-N(i+k), bucketed by k from -5 to +5.
    pub h_bonds_per_distance: [u32; HBOND_OFFSET_BUCKETS],
    pub residues_per_alpha_helix: [u32; HISTOGRAM_SIZE],
    pub parallel_bridges_per_ladder: [u32; HISTOGRAM_SIZE],
    pub antiparallel_bridges_per_ladder: [u32; HISTOGRAM_SIZE],
    pub ladders_per_sheet: [u32; HISTOGRAM_SIZE],
}

impl StatisticsSummary {
    /// Inter-chain disulfide bridges, derived as total minus intra-chain.
    pub fn inter_chain_ss_bridges(&self) -> u32 {
        self.ss_bridges.saturating_sub(self.intra_chain_ss_bridges)
    }

    /// A count expressed per 100 residues. Defined as 0.0 for an empty structure
    /// so the degenerate header stays well-formed.
    pub fn per_100_rate(&self, count: u32) -> f64 {
        if self.residues == 0 {
            0.0
        } else {
            f64::from(count) * 100.0 / f64::from(self.residues)
        }
    }
}
