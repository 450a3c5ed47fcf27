//! Learning rate schedulers
//!
//! Provides warmup learning rate schedules for parameter-group optimizers:
//! - `WarmupMultiStepLR` - Linear warmup, then decay by gamma at milestones
//! - `WarmupPolynomialLR` - Linear warmup, then polynomial decay to zero
//!
//! Every scheduler owns a [`StepCounter`]. A training loop calls
//! [`LRScheduler::step`] once per iteration and then [`LRScheduler::apply`]
//! to push the new rates into its optimizer.

mod error;
mod step_counter;
mod warmup;
mod warmup_multi_step;
mod warmup_polynomial;


pub use error::{Result, SchedulerError};
pub use step_counter::StepCounter;
pub use warmup_multi_step::{Phase, WarmupMultiStepConfig, WarmupMultiStepLR};
pub use warmup_polynomial::{WarmupPolynomialConfig, WarmupPolynomialLR};

use super::Optimizer;

/// Learning rate scheduler trait
pub trait LRScheduler {
    /// Rates for the current step, one per parameter group
    ///
    /// Before the first call to `step` these are the base rates.
    fn get_lrs(&self) -> &[f32];

    /// Index of the most recently completed step (-1 before any step)
    fn last_step(&self) -> i64;

    /// Advance the step counter by one and recompute the rates
    fn step(&mut self) -> &[f32];

    /// Short identifier used in logs and CLI output
    fn name(&self) -> &'static str;

    /// Rate of the first parameter group
    fn get_lr(&self) -> f32 {
        self.get_lrs().first().copied().unwrap_or(0.0)
    }

    /// Write the current rates into the optimizer's parameter groups
    fn apply(&self, optimizer: &mut dyn Optimizer) -> Result<()> {
        optimizer.set_lrs(self.get_lrs())
    }
}
