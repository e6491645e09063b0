use super::scale::{self, GAP, GAP_PENALTY, SAME_GROUP_SCORE};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ScoringError {
    #[error("Residue symbol '{0}' is not one of the 20 canonical amino acids")]
    UnknownResidue(char),
    #[error("Cannot compute a hydrophilic fraction for an empty sequence")]
    EmptyInput,
}

/// Scores a pair of aligned residues on the ASH hydrophilicity scale.
///
/// A gap on either side (including both sides) is maximally dissimilar and
/// scores [`GAP_PENALTY`]. Otherwise the score is the absolute weight
/// difference between the two residues, with [`SAME_GROUP_SCORE`] substituted
/// when both residues fall in the same group. Note that this applies to the
/// same symbol paired with itself as well; the window scanner's index-wise
/// exact-match shortcut is the only path that treats identical symbols as
/// costing nothing.
pub fn pair_score(residue1: u8, residue2: u8) -> Result<f64, ScoringError> {
    if residue1 == GAP || residue2 == GAP {
        return Ok(GAP_PENALTY);
    }

    let weight1 =
        scale::weight(residue1).ok_or(ScoringError::UnknownResidue(residue1 as char))?;
    let weight2 =
        scale::weight(residue2).ok_or(ScoringError::UnknownResidue(residue2 as char))?;

    let delta = (weight1 - weight2).abs();
    if delta == 0.0 {
        Ok(SAME_GROUP_SCORE)
    } else {
        Ok(delta)
    }
}

/// Fraction of residues in `sequence` belonging to the hydrophilic group
/// {D, E, R, K}, rounded to two decimal places with ties rounded to even
/// (so 0.125 becomes 0.12, not 0.13).
pub fn hydrophilic_fraction(sequence: &[u8]) -> Result<f64, ScoringError> {
    if sequence.is_empty() {
        return Err(ScoringError::EmptyInput);
    }

    let hydrophilic = sequence
        .iter()
        .filter(|&&residue| scale::is_hydrophilic(residue))
        .count();
    let fraction = hydrophilic as f64 / sequence.len() as f64;
    Ok((fraction * 100.0).round_ties_even() / 100.0)
}
