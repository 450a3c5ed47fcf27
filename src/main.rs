//! Calentar CLI
//!
//! # Usage
//!
//! ```bash
//! # Print the learning rate of every step
//! calentar simulate schedule.yaml
//!
//! # Longer run, machine-readable output
//! calentar simulate schedule.yaml --steps 200 --format json
//!
//! # Validate a schedule file
//! calentar validate schedule.yaml --detailed
//! ```

use calentar::cli::{run_command, Cli};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
