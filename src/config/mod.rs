//! Declarative schedule configuration
//!
//! A schedule file names the optimizer's parameter groups, the scheduler and
//! how many steps to run:
//!
//! ```yaml
//! optimizer:
//!   base_lrs: [0.1]
//! scheduler:
//!   type: warmup_multi_step
//!   milestones: [10, 20]
//!   target_lr: 6.4
//! run:
//!   steps: 20
//! ```

mod cli;
mod loader;
mod schema;
mod validate;

pub use cli::{
    apply_overrides, parse_args, Cli, Command, OutputFormat, SimulateArgs, ValidateArgs,
};
pub use loader::{load_config, parse_config};
pub use schema::{OptimSpec, RunParams, ScheduleSpec, SchedulerSpec};
pub use validate::{validate_config, ValidationError};
