//! Yard Planner - container yard occupancy from the command line
//!
//! Generates a yard snapshot and reports statistics, slot listings,
//! projection draw lists and exports.

mod cli;
mod commands;
mod output;

use clap::Parser;
use cli::Cli;

fn main() {
    let cli = Cli::parse();
    yard_app::logging::init_tracing(cli.verbose);

    if let Err(e) = commands::execute(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
