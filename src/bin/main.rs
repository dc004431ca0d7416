use std::process;

use clap::Parser;

#[macro_use]
extern crate log;

use anyhow::Result;

/// Parse command line arguments and run `kinship_rs::run()`
fn main() -> Result<()> {
    // ----------------------------- Run CLI Parser
    let cli = parser::Cli::parse();

    // ----------------------------- Init logger.
    let verbosity = if cli.quiet { 0 } else { cli.verbose + 1 };
    logger::Logger::init(verbosity);

    // ----------------------------- Evaluate the case and print the outcome.
    match kinship_rs::run(&cli) {
        Ok(outcome) => println!("{outcome}"),
        Err(e) => {
            error!("{:?}", e);
            process::exit(1);
        }
    };

    Ok(())
}
