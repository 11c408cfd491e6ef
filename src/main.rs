//! favicrop CLI entrypoint.
//!
//! Thin wrapper over the `cli` module: parse args, run the crop/resize/save
//! pipeline, and exit with a non-zero status on any failure.
//! For programmatic use, prefer the library API (`favicrop::api`).

use clap::Parser;

mod cli;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = cli::CliArgs::parse();
    cli::run(args)
}
