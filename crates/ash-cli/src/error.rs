use ash_core::engine::error::EngineError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    AshCore(#[from] EngineError),

    #[error("Failed to parse FASTA file '{path}': {source}", path = path.display())]
    FastaParsing {
        path: PathBuf,
        #[source]
        source: anyhow::Error,
    },

    #[error("FASTA file '{path}' contains no sequence data", path = path.display())]
    EmptyFasta { path: PathBuf },

    #[error("Failed to write report '{path}': {source}", path = path.display())]
    Report {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
