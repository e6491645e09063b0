use crate::core::scale;
use crate::core::scoring::ScoringError;
use crate::engine::error::EngineError;
use crate::engine::scanner::{self, ScoreEntry};
use tracing::{info, instrument};

/// Computes the full dissimilarity profile of two aligned sequences.
///
/// Both inputs must be gap-aligned, equal-length strings over the 20
/// canonical amino-acid symbols plus the gap symbol, as produced by a
/// pairwise aligner. The alphabet is validated up front so that a stray
/// symbol fails the whole run instead of surfacing midway through a scan.
#[instrument(skip_all, name = "profile_workflow")]
pub fn run(
    sequence1: &str,
    sequence2: &str,
    window_length: usize,
) -> Result<Vec<ScoreEntry>, EngineError> {
    validate_alignment(sequence1.as_bytes())?;
    validate_alignment(sequence2.as_bytes())?;

    info!(
        aligned_length = sequence1.len(),
        window_length, "Scanning aligned sequence pair."
    );
    let entries = scanner::scan(sequence1.as_bytes(), sequence2.as_bytes(), window_length)?;
    info!(windows = entries.len(), "Profile scan complete.");

    Ok(entries)
}

fn validate_alignment(sequence: &[u8]) -> Result<(), EngineError> {
    for &residue in sequence {
        if residue != scale::GAP && !scale::is_canonical(residue) {
            return Err(ScoringError::UnknownResidue(residue as char).into());
        }
    }
    Ok(())
}
