//! CLI command implementations

mod simulate;
mod validate;

pub use simulate::{format_records, simulate, StepRecord};

use crate::cli::logging::init_tracing;
use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    // Configure output based on verbose/quiet flags
    let log_level = if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    };
    init_tracing(log_level);

    match cli.command {
        Command::Simulate(args) => simulate::run_simulate(args, log_level),
        Command::Validate(args) => validate::run_validate(args, log_level),
    }
}
