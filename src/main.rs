//! hyperdraft configuration toolkit
//!
//! Command-line entry point for validating and inspecting the
//! environment-driven configuration of a hyperdraft instance.

use clap::Parser;
use tracing::{error, info};

use hyperdraft::cli::Cli;
use hyperdraft::config::Loglevel;
use hyperdraft::error::Result;
use hyperdraft::logging;

fn main() {
    // Parse command-line arguments
    let cli = Cli::parse();

    // Initialize logging
    let level = if cli.debug {
        Loglevel::Debug
    } else {
        Loglevel::Warn
    };
    if let Err(e) = logging::init(level) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Execute the command
    if let Err(e) = run(cli) {
        error!("Error: {}", e);
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    info!("Starting hdctl");

    cli.execute()
}
