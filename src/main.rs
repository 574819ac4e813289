//! wordkit - anagram finder and word search solver on the command line

use anyhow::Result;
use clap::Parser;

use wordkit::cli;
use wordkit::core::logging;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    logging::init(cli.quiet, cli.verbose);
    cli::run(cli)
}
