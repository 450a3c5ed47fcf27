//! Warmup + polynomial decay learning rate scheduler

use super::error::Result;
use super::step_counter::StepCounter;
use super::warmup::{
    in_warmup, validate_base_lrs, validate_last_step, validate_target_lr, validate_warmup_steps,
    warmup_lr,
};
use super::{LRScheduler, SchedulerError};
use crate::optim::Optimizer;
use serde::{Deserialize, Serialize};
use tracing::trace;

fn default_power() -> f32 {
    2.0
}

fn default_warmup_steps() -> usize {
    5
}

/// Hyperparameters of [`WarmupPolynomialLR`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupPolynomialConfig {
    /// Step at which the polynomial reaches zero
    #[serde(alias = "epochs")]
    pub total_steps: usize,

    /// Rate reached at the last warmup step
    pub target_lr: f32,

    /// Polynomial exponent
    #[serde(default = "default_power")]
    pub p: f32,

    /// Length of the linear warmup ramp
    #[serde(default = "default_warmup_steps")]
    pub warmup_steps: usize,
}

impl WarmupPolynomialConfig {
    /// Config with `p = 2` and `warmup_steps = 5`
    pub fn new(total_steps: usize, target_lr: f32) -> Self {
        Self {
            total_steps,
            target_lr,
            p: default_power(),
            warmup_steps: default_warmup_steps(),
        }
    }

    pub fn with_power(mut self, p: f32) -> Self {
        self.p = p;
        self
    }

    pub fn with_warmup_steps(mut self, warmup_steps: usize) -> Self {
        self.warmup_steps = warmup_steps;
        self
    }
}

/// Warmup + Polynomial Decay Learning Rate Scheduler
///
/// - Phase 1 (warmup): each group ramps linearly from its base rate at step 0
///   to `target_lr` at step `warmup_steps - 1`
/// - Phase 2 (decay): every group gets the same rate
///
/// Formula after warmup: lr_t = target_lr * (1 - t / total_steps)^p
///
/// The decay is not clamped. Past `total_steps` the base of the power is
/// negative: an even integer `p` makes the rate grow again, an odd one makes
/// it negative, and a fractional one yields NaN.
#[derive(Debug, Clone)]
pub struct WarmupPolynomialLR {
    base_lrs: Vec<f32>,
    total_steps: usize,
    target_lr: f32,
    p: f32,
    warmup_steps: usize,
    counter: StepCounter,
    lrs: Vec<f32>,
}

impl WarmupPolynomialLR {
    /// Create a new scheduler, one base rate per parameter group
    ///
    /// # Errors
    /// Fails if there are no groups, a rate is negative or non-finite,
    /// `total_steps == 0`, `p` is negative or non-finite, or `warmup_steps < 2`.
    pub fn new(base_lrs: Vec<f32>, config: WarmupPolynomialConfig) -> Result<Self> {
        validate_base_lrs(&base_lrs)?;
        validate_target_lr(config.target_lr)?;
        validate_warmup_steps(config.warmup_steps)?;
        if config.total_steps == 0 {
            return Err(SchedulerError::InvalidTotalSteps(config.total_steps));
        }
        if !config.p.is_finite() || config.p < 0.0 {
            return Err(SchedulerError::InvalidPower(config.p));
        }

        Ok(Self {
            lrs: base_lrs.clone(),
            base_lrs,
            total_steps: config.total_steps,
            target_lr: config.target_lr,
            p: config.p,
            warmup_steps: config.warmup_steps,
            counter: StepCounter::new(),
        })
    }

    /// Create a scheduler whose base rates are the optimizer's current group rates
    pub fn from_optimizer(
        optimizer: &dyn Optimizer,
        config: WarmupPolynomialConfig,
    ) -> Result<Self> {
        Self::new(optimizer.lrs(), config)
    }

    /// Create a scheduler positioned as if `last_step + 1` steps had been taken
    pub fn resume(
        base_lrs: Vec<f32>,
        config: WarmupPolynomialConfig,
        last_step: i64,
    ) -> Result<Self> {
        validate_last_step(last_step)?;
        let mut scheduler = Self::new(base_lrs, config)?;
        if last_step >= 0 {
            scheduler.lrs = scheduler.current_rates(last_step);
            scheduler.counter = StepCounter::starting_at(last_step);
        }
        Ok(scheduler)
    }

    /// Rates for `step`, one per group
    pub fn current_rates(&self, step: i64) -> Vec<f32> {
        if in_warmup(step, self.warmup_steps) {
            return self
                .base_lrs
                .iter()
                .map(|&base| warmup_lr(base, self.target_lr, step, self.warmup_steps))
                .collect();
        }

        vec![self.decayed_lr(step); self.base_lrs.len()]
    }

    pub fn base_lrs(&self) -> &[f32] {
        &self.base_lrs
    }

    pub fn total_steps(&self) -> usize {
        self.total_steps
    }

    pub fn target_lr(&self) -> f32 {
        self.target_lr
    }

    pub fn power(&self) -> f32 {
        self.p
    }

    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    fn decayed_lr(&self, step: i64) -> f32 {
        let remaining = 1.0 - step as f32 / self.total_steps as f32;
        self.target_lr * remaining.powf(self.p)
    }
}

impl LRScheduler for WarmupPolynomialLR {
    fn get_lrs(&self) -> &[f32] {
        &self.lrs
    }

    fn last_step(&self) -> i64 {
        self.counter.last_step()
    }

    fn step(&mut self) -> &[f32] {
        let step = self.counter.advance();
        self.lrs = self.current_rates(step);
        trace!(step, lrs = ?self.lrs, "warmup_polynomial");
        &self.lrs
    }

    fn name(&self) -> &'static str {
        "warmup_polynomial"
    }
}
