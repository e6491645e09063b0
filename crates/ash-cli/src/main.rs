mod align;
mod cli;
mod commands;
mod error;
mod fasta;
mod logging;
mod report;

use crate::cli::Cli;
use crate::error::Result;
use clap::Parser;
use tracing::{debug, error, info};

fn main() {
    if let Err(e) = run_app() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run_app() -> Result<()> {
    let cli = Cli::parse();
    logging::setup_logging(cli.verbose, cli.quiet, cli.log_file.clone())?;

    info!("ASH v{} starting up.", env!("CARGO_PKG_VERSION"));
    debug!("Full CLI arguments parsed: {:?}", &cli);

    let result = commands::profile::run(&cli);
    match &result {
        Ok(_) => info!("Profile completed successfully."),
        Err(e) => error!("Profile failed: {}", e),
    }

    result
}
