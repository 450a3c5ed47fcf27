//! Tests for configuration validation

use super::*;
use crate::config::schema::{OptimSpec, RunParams, ScheduleSpec, SchedulerSpec};
use crate::optim::{SchedulerError, WarmupMultiStepConfig, WarmupPolynomialConfig};

fn multi_step_spec() -> ScheduleSpec {
    ScheduleSpec {
        optimizer: OptimSpec { base_lrs: vec![0.1], momentum: 0.0 },
        scheduler: SchedulerSpec::WarmupMultiStep(WarmupMultiStepConfig::new(vec![10, 20], 6.4)),
        run: RunParams::default(),
    }
}

#[test]
fn test_valid_multi_step_spec() {
    assert!(validate_config(&multi_step_spec()).is_ok());
}

#[test]
fn test_valid_polynomial_spec() {
    let mut spec = multi_step_spec();
    spec.scheduler = SchedulerSpec::WarmupPolynomial(WarmupPolynomialConfig::new(200, 6.4));
    spec.run.steps = 200;
    assert!(validate_config(&spec).is_ok());
}

#[test]
fn test_zero_steps_fails() {
    let mut spec = multi_step_spec();
    spec.run.steps = 0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidSteps(0)));
}

#[test]
fn test_invalid_last_step_fails() {
    let mut spec = multi_step_spec();
    spec.run.last_step = -5;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidLastStep(-5)));
}

#[test]
fn test_step_range_overflow_fails() {
    let mut spec = multi_step_spec();
    spec.run.last_step = i64::MAX;
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::StepOverflow { last_step: i64::MAX, steps: 20 })
    );

    spec.run.last_step = i64::MAX - 20;
    assert!(validate_config(&spec).is_ok());

    spec.run.last_step = i64::MAX - 19;
    assert!(matches!(validate_config(&spec), Err(ValidationError::StepOverflow { .. })));
}

#[test]
fn test_invalid_momentum_fails() {
    let mut spec = multi_step_spec();
    spec.optimizer.momentum = 1.0;
    assert_eq!(validate_config(&spec), Err(ValidationError::InvalidMomentum(1.0)));
}

#[test]
fn test_empty_groups_fails() {
    let mut spec = multi_step_spec();
    spec.optimizer.base_lrs.clear();
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::Scheduler(SchedulerError::EmptyBaseLrs))
    );
}

#[test]
fn test_short_warmup_fails() {
    let mut spec = multi_step_spec();
    spec.scheduler = SchedulerSpec::WarmupMultiStep(
        WarmupMultiStepConfig::new(vec![10], 6.4).with_warmup_steps(1),
    );
    assert_eq!(
        validate_config(&spec),
        Err(ValidationError::Scheduler(SchedulerError::InvalidWarmupSteps(1)))
    );
}

#[test]
fn test_validation_error_display() {
    let err = ValidationError::from(SchedulerError::InvalidGamma(2.0));
    let msg = err.to_string();
    assert!(msg.contains("Invalid scheduler"));
    assert!(msg.contains("gamma"));
}
