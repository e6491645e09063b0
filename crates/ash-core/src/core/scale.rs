use phf::{Map, Set, phf_map, phf_set};

/// The gap symbol produced by the external pairwise aligner.
pub const GAP: u8 = b'-';

/// Score assigned whenever either side of a residue pair is a gap.
pub const GAP_PENALTY: f64 = 2.0;

/// Score for two different residues that fall in the same hydrophilicity group.
pub const SAME_GROUP_SCORE: f64 = 0.25;

// Hydrophiles are positive, hydrophobes negative, neutral residues zero.
static HYDROPHILICITY_WEIGHTS: Map<u8, f64> = phf_map! {
    b'L' => -0.5, b'A' => -0.5, b'F' => -0.5, b'Y' => -0.5, b'W' => -0.5,
    b'I' => -0.5, b'V' => -0.5, b'H' => 0.0,  b'N' => 0.0,  b'C' => 0.0,
    b'G' => 0.0,  b'M' => 0.0,  b'Q' => 0.0,  b'P' => 0.0,  b'S' => 0.0,
    b'T' => 0.0,  b'D' => 0.5,  b'E' => 0.5,  b'R' => 0.5,  b'K' => 0.5,
};

// The antigenicity estimate counts these four symbols directly rather than
// going through the weight table.
static HYDROPHILIC_RESIDUES: Set<u8> = phf_set! { b'D', b'E', b'R', b'K' };

pub fn weight(residue: u8) -> Option<f64> {
    HYDROPHILICITY_WEIGHTS.get(&residue).copied()
}

pub fn is_canonical(residue: u8) -> bool {
    HYDROPHILICITY_WEIGHTS.contains_key(&residue)
}

pub fn is_hydrophilic(residue: u8) -> bool {
    HYDROPHILIC_RESIDUES.contains(&residue)
}
