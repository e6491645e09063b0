use super::error::EngineError;
use crate::core::scoring;
use serde::Serialize;

/// One window of the dissimilarity profile.
///
/// The serde field renames reproduce the column names of the original ASH
/// report format, misspelling included. Float formatting is the one known
/// delta from the original output: a mismatch-free window serializes its
/// score as `0.0` where the original emitted the integer `0`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    /// Zero-based start offset of the window in the first aligned sequence.
    #[serde(rename = "index")]
    pub position: usize,
    /// The window of the first aligned sequence.
    pub sequence: String,
    /// Summed per-residue dissimilarity across the window.
    pub ash_score: f64,
    /// Fraction of hydrophilic residues in `sequence`.
    #[serde(rename = "antigenicty")]
    pub antigenicity: f64,
    /// The window of the second aligned sequence at the same offset.
    pub analog_sequence: String,
}

/// Scans two aligned, equal-length sequences with a dense stride-1 sliding
/// window and returns one [`ScoreEntry`] per window position, in position
/// order.
///
/// A window longer than the sequences yields an empty result rather than an
/// error; a zero window length and mismatched input lengths are caller
/// contract violations and fail fast.
pub fn scan(
    sequence1: &[u8],
    sequence2: &[u8],
    window_length: usize,
) -> Result<Vec<ScoreEntry>, EngineError> {
    if sequence1.len() != sequence2.len() {
        return Err(EngineError::LengthMismatch {
            len1: sequence1.len(),
            len2: sequence2.len(),
        });
    }
    if window_length == 0 {
        return Err(EngineError::InvalidWindow { window_length });
    }

    let mut entries =
        Vec::with_capacity((sequence1.len() + 1).saturating_sub(window_length));
    let mut position = 0;
    while position + window_length <= sequence1.len() {
        let window = &sequence1[position..position + window_length];
        let analog = &sequence2[position..position + window_length];

        let mut ash_score = 0.0;
        for (&residue1, &residue2) in window.iter().zip(analog) {
            // An exact character match at the same index costs nothing, even
            // for two gaps. Only mismatched columns reach the weight table.
            if residue1 == residue2 {
                continue;
            }
            ash_score += scoring::pair_score(residue1, residue2)?;
        }

        entries.push(ScoreEntry {
            position,
            sequence: String::from_utf8_lossy(window).into_owned(),
            ash_score,
            antigenicity: scoring::hydrophilic_fraction(window)?,
            analog_sequence: String::from_utf8_lossy(analog).into_owned(),
        });
        position += 1;
    }

    Ok(entries)
}
