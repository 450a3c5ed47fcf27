//! Configuration validation logic

use super::error::ValidationError;
use crate::config::schema::ScheduleSpec;

/// Validate a parsed schedule
///
/// Checks:
/// - Run length and resume point are in range, and the last simulated step fits in `i64`
/// - Momentum is in range
/// - The scheduler can be built from the configured base rates
pub fn validate_config(spec: &ScheduleSpec) -> Result<(), ValidationError> {
    if spec.run.steps == 0 {
        return Err(ValidationError::InvalidSteps(spec.run.steps));
    }

    if spec.run.last_step < -1 {
        return Err(ValidationError::InvalidLastStep(spec.run.last_step));
    }

    // A fresh run takes step 0 on attach, so it ends at step `steps`
    let last_step = spec.run.last_step.max(0);
    let end = i64::try_from(spec.run.steps).ok().and_then(|steps| last_step.checked_add(steps));
    if end.is_none() {
        return Err(ValidationError::StepOverflow {
            last_step: spec.run.last_step,
            steps: spec.run.steps,
        });
    }

    let momentum = spec.optimizer.momentum;
    if !(0.0..1.0).contains(&momentum) {
        return Err(ValidationError::InvalidMomentum(momentum));
    }

    // Scheduler constructors own the per-parameter checks
    spec.scheduler.build(spec.optimizer.base_lrs.clone())?;

    Ok(())
}
