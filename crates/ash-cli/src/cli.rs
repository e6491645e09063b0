use clap::Parser;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    name = "ash",
    version,
    about = "ASH - Antigen Selection Heuristic. Computes a positional chemical-dissimilarity profile between two protein sequences to help locate chemically distinct or conserved regions for epitope selection.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Path to the FASTA file with the protein of interest.
    #[arg(value_name = "FIRST_FASTA")]
    pub first: PathBuf,

    /// Path to the FASTA file with the comparison protein.
    #[arg(value_name = "SECOND_FASTA")]
    pub second: PathBuf,

    /// Path for the output CSV report.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub output: PathBuf,

    /// Sliding window (peptide) length in residues.
    #[arg(short = 'w', long, required = true, value_name = "INT")]
    pub window_length: usize,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}
