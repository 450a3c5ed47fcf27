//! Property-based tests for configuration validation

use super::error::ValidationError;
use super::validator::validate_config;
use crate::config::schema::*;
use crate::optim::{SchedulerError, WarmupMultiStepConfig, WarmupPolynomialConfig};
use proptest::prelude::*;

fn arb_scheduler() -> impl Strategy<Value = SchedulerSpec> {
    prop_oneof![
        (
            proptest::collection::vec(0usize..500, 0..6), // milestones
            0.0f32..10.0,                                 // target_lr
            0.0f32..=1.0,                                 // gamma
            2usize..50,                                   // warmup_steps
        )
            .prop_map(|(milestones, target_lr, gamma, warmup_steps)| {
                SchedulerSpec::WarmupMultiStep(
                    WarmupMultiStepConfig::new(milestones, target_lr)
                        .with_gamma(gamma)
                        .with_warmup_steps(warmup_steps),
                )
            }),
        (
            1usize..1000,  // total_steps
            0.0f32..10.0,  // target_lr
            0.0f32..5.0,   // p
            2usize..50,    // warmup_steps
        )
            .prop_map(|(total_steps, target_lr, p, warmup_steps)| {
                SchedulerSpec::WarmupPolynomial(
                    WarmupPolynomialConfig::new(total_steps, target_lr)
                        .with_power(p)
                        .with_warmup_steps(warmup_steps),
                )
            }),
    ]
}

fn arb_valid_spec() -> impl Strategy<Value = ScheduleSpec> {
    (
        proptest::collection::vec(0.0f32..1.0, 1..4), // base_lrs
        0.0f32..0.99,                                 // momentum
        arb_scheduler(),
        1usize..500,                                  // steps
        -1i64..100,                                   // last_step
    )
        .prop_map(|(base_lrs, momentum, scheduler, steps, last_step)| ScheduleSpec {
            optimizer: OptimSpec { base_lrs, momentum },
            scheduler,
            run: RunParams { steps, last_step },
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    #[test]
    fn prop_valid_spec_passes(spec in arb_valid_spec()) {
        prop_assert!(validate_config(&spec).is_ok());
    }

    #[test]
    fn prop_zero_steps_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.run.steps = 0;
        prop_assert!(matches!(validate_config(&spec), Err(ValidationError::InvalidSteps(0))));
    }

    #[test]
    fn prop_step_range_overflow_fails(spec in arb_valid_spec()) {
        let mut spec = spec;
        spec.run.last_step = i64::MAX - spec.run.steps as i64 + 1;
        let is_overflow = matches!(validate_config(&spec), Err(ValidationError::StepOverflow { .. }));
        prop_assert!(is_overflow);
    }

    #[test]
    fn prop_negative_base_lr_fails(
        spec in arb_valid_spec(),
        neg_lr in -10.0f32..-1e-6
    ) {
        let mut spec = spec;
        spec.optimizer.base_lrs[0] = neg_lr;
        let is_invalid_base_lr = matches!(
            validate_config(&spec),
            Err(ValidationError::Scheduler(SchedulerError::InvalidBaseLr { group: 0, .. }))
        );
        prop_assert!(is_invalid_base_lr);
    }

    #[test]
    fn prop_negative_target_lr_fails(
        spec in arb_valid_spec(),
        neg_lr in -10.0f32..-1e-6
    ) {
        let mut spec = spec;
        match &mut spec.scheduler {
            SchedulerSpec::WarmupMultiStep(c) => c.target_lr = neg_lr,
            SchedulerSpec::WarmupPolynomial(c) => c.target_lr = neg_lr,
        }
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::Scheduler(SchedulerError::InvalidTargetLr(_)))
        ));
    }

    #[test]
    fn prop_short_warmup_fails(spec in arb_valid_spec(), warmup in 0usize..2) {
        let mut spec = spec;
        match &mut spec.scheduler {
            SchedulerSpec::WarmupMultiStep(c) => c.warmup_steps = warmup,
            SchedulerSpec::WarmupPolynomial(c) => c.warmup_steps = warmup,
        }
        prop_assert!(matches!(
            validate_config(&spec),
            Err(ValidationError::Scheduler(SchedulerError::InvalidWarmupSteps(_)))
        ));
    }

    #[test]
    fn prop_gamma_above_one_fails(spec in arb_valid_spec(), gamma in 1.001f32..10.0) {
        let mut spec = spec;
        if let SchedulerSpec::WarmupMultiStep(c) = &mut spec.scheduler {
            c.gamma = gamma;
            prop_assert!(matches!(
                validate_config(&spec),
                Err(ValidationError::Scheduler(SchedulerError::InvalidGamma(_)))
            ));
        }
    }
}
