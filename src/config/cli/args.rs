//! Core CLI types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::types::OutputFormat;
use crate::config::ScheduleSpec;

/// Calentar: warmup learning rate schedules
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "calentar")]
#[command(version)]
#[command(about = "Warmup learning rate schedules with multi-step and polynomial decay")]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Step a schedule and print the learning rate of every step
    Simulate(SimulateArgs),

    /// Validate a schedule file without running it
    Validate(ValidateArgs),
}

/// Arguments for the simulate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct SimulateArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Override number of steps
    #[arg(short, long)]
    pub steps: Option<usize>,

    /// Override resume point
    #[arg(long, allow_negative_numbers = true)]
    pub last_step: Option<i64>,

    /// Parameter group printed in text output
    #[arg(short, long, default_value_t = 0)]
    pub group: usize,

    /// Output format (text, json, yaml)
    #[arg(short, long, default_value = "text")]
    pub format: OutputFormat,
}

/// Arguments for the validate command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct ValidateArgs {
    /// Path to YAML schedule file
    #[arg(value_name = "CONFIG")]
    pub config: PathBuf,

    /// Show detailed validation report
    #[arg(short, long)]
    pub detailed: bool,
}

/// Parse CLI arguments from a string slice (for testing)
pub fn parse_args<I, T>(args: I) -> Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line overrides to a ScheduleSpec
pub fn apply_overrides(spec: &mut ScheduleSpec, args: &SimulateArgs) {
    if let Some(steps) = args.steps {
        spec.run.steps = steps;
    }
    if let Some(last_step) = args.last_step {
        spec.run.last_step = last_step;
    }
}
