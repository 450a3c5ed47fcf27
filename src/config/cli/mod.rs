//! CLI argument parsing
//!
//! # Usage
//!
//! ```bash
//! calentar simulate schedule.yaml
//! calentar simulate schedule.yaml --steps 200 --format json
//! calentar validate schedule.yaml --detailed
//! ```

mod args;
mod types;

#[cfg(test)]
mod tests;

pub use args::{apply_overrides, parse_args, Cli, Command, SimulateArgs, ValidateArgs};
pub use types::OutputFormat;
