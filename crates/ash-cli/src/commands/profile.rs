use crate::cli::Cli;
use crate::error::Result;
use crate::{align, fasta, report};
use ash_core::workflows::profile;
use tracing::info;

pub fn run(args: &Cli) -> Result<()> {
    let first = fasta::read_sequence(&args.first)?;
    let second = fasta::read_sequence(&args.second)?;
    info!(
        first_length = first.len(),
        second_length = second.len(),
        "Loaded input sequences."
    );

    let aligned = align::align(&first, &second);
    info!(
        aligned_length = aligned.first.len(),
        "Pairwise alignment complete."
    );

    let entries = profile::run(&aligned.first, &aligned.second, args.window_length)?;
    info!(windows = entries.len(), "Dissimilarity profile computed.");

    report::write_csv(&args.output, &entries)?;
    info!(path = %args.output.display(), "Report written.");

    Ok(())
}
