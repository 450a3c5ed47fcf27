//! Error types for learning rate schedulers.

use thiserror::Error;

/// Scheduler construction and application errors
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SchedulerError {
    #[error("No parameter groups: at least one base learning rate is required")]
    EmptyBaseLrs,

    #[error("Invalid base learning rate for group {group}: {lr} (must be finite and >= 0.0)")]
    InvalidBaseLr { group: usize, lr: f32 },

    #[error("Invalid target learning rate: {0} (must be finite and >= 0.0)")]
    InvalidTargetLr(f32),

    #[error("Invalid gamma: {0} (must be in [0.0, 1.0])")]
    InvalidGamma(f32),

    #[error(
        "Invalid warmup steps: {0} (must be >= 2; the warmup ramp divides by warmup_steps - 1)"
    )]
    InvalidWarmupSteps(usize),

    #[error("Invalid total steps: {0} (must be > 0)")]
    InvalidTotalSteps(usize),

    #[error("Invalid polynomial power: {0} (must be finite and >= 0.0)")]
    InvalidPower(f32),

    #[error("Invalid last step: {0} (must be >= -1 and < i64::MAX)")]
    InvalidLastStep(i64),

    #[error("Parameter group count mismatch: scheduler has {expected}, optimizer has {actual}")]
    GroupCountMismatch { expected: usize, actual: usize },
}

/// Result type for scheduler operations
pub type Result<T> = std::result::Result<T, SchedulerError>;
