//! Linear warmup ramp and parameter checks shared by the warmup schedulers

use super::error::{Result, SchedulerError};
use super::step_counter::StepCounter;

/// Linear interpolation from `base_lr` at step 0 to `target_lr` at step
/// `warmup_steps - 1`.
///
/// Formula: lr_t = base + (target - base) * t / (warmup_steps - 1)
///
/// Written as `base * (1 - progress) + target * progress` so that both
/// endpoints are reproduced exactly in floating point.
pub(crate) fn warmup_lr(base_lr: f32, target_lr: f32, step: i64, warmup_steps: usize) -> f32 {
    let progress = step as f32 / (warmup_steps - 1) as f32;
    base_lr * (1.0 - progress) + target_lr * progress
}

/// Whether `step` still falls inside the warmup phase
pub(crate) fn in_warmup(step: i64, warmup_steps: usize) -> bool {
    i64::try_from(warmup_steps).map_or(true, |warmup| step < warmup)
}

pub(crate) fn validate_base_lrs(base_lrs: &[f32]) -> Result<()> {
    if base_lrs.is_empty() {
        return Err(SchedulerError::EmptyBaseLrs);
    }
    for (group, &lr) in base_lrs.iter().enumerate() {
        if !lr.is_finite() || lr < 0.0 {
            return Err(SchedulerError::InvalidBaseLr { group, lr });
        }
    }
    Ok(())
}

pub(crate) fn validate_target_lr(target_lr: f32) -> Result<()> {
    if !target_lr.is_finite() || target_lr < 0.0 {
        return Err(SchedulerError::InvalidTargetLr(target_lr));
    }
    Ok(())
}

pub(crate) fn validate_warmup_steps(warmup_steps: usize) -> Result<()> {
    if warmup_steps < 2 {
        return Err(SchedulerError::InvalidWarmupSteps(warmup_steps));
    }
    Ok(())
}

/// A resume point must leave room for at least one more step
pub(crate) fn validate_last_step(last_step: i64) -> Result<()> {
    if !(StepCounter::NOT_STARTED..i64::MAX).contains(&last_step) {
        return Err(SchedulerError::InvalidLastStep(last_step));
    }
    Ok(())
}
