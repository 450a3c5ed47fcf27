//! Validation error types
//!
//! Defines all validation error variants for schedule files.

use crate::optim::SchedulerError;

/// Validation error type
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid run steps: {0} (must be > 0)")]
    InvalidSteps(usize),

    #[error("Invalid momentum: {0} (must be in [0.0, 1.0))")]
    InvalidMomentum(f32),

    #[error("Invalid last step: {0} (must be >= -1)")]
    InvalidLastStep(i64),

    #[error("Step range overflow: {steps} step(s) after last step {last_step} exceed i64::MAX")]
    StepOverflow { last_step: i64, steps: usize },

    #[error("Invalid scheduler: {0}")]
    Scheduler(#[from] SchedulerError),
}
