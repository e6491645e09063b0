use crate::core::scoring::ScoringError;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum EngineError {
    #[error("Window length must be at least 1, got {window_length}")]
    InvalidWindow { window_length: usize },

    #[error("Aligned sequences must have equal length, got {len1} and {len2}")]
    LengthMismatch { len1: usize, len2: usize },

    #[error("Residue scoring failed: {source}")]
    Scoring {
        #[from]
        source: ScoringError,
    },
}
