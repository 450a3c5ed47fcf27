//! Warmup + multi-step decay learning rate scheduler

use super::error::Result;
use super::step_counter::StepCounter;
use super::warmup::{
    in_warmup, validate_base_lrs, validate_last_step, validate_target_lr, validate_warmup_steps,
    warmup_lr,
};
use super::{LRScheduler, SchedulerError};
use crate::optim::Optimizer;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::{debug, trace, warn};

fn default_gamma() -> f32 {
    0.1
}

fn default_warmup_steps() -> usize {
    5
}

/// Hyperparameters of [`WarmupMultiStepLR`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarmupMultiStepConfig {
    /// Steps at which the rate is multiplied by `gamma`; repeated entries stack
    pub milestones: Vec<usize>,

    /// Rate reached at the last warmup step
    pub target_lr: f32,

    /// Multiplicative decay factor
    #[serde(default = "default_gamma")]
    pub gamma: f32,

    /// Length of the linear warmup ramp
    #[serde(default = "default_warmup_steps")]
    pub warmup_steps: usize,
}

impl WarmupMultiStepConfig {
    /// Config with `gamma = 0.1` and `warmup_steps = 5`
    pub fn new(milestones: Vec<usize>, target_lr: f32) -> Self {
        Self {
            milestones,
            target_lr,
            gamma: default_gamma(),
            warmup_steps: default_warmup_steps(),
        }
    }

    pub fn with_gamma(mut self, gamma: f32) -> Self {
        self.gamma = gamma;
        self
    }

    pub fn with_warmup_steps(mut self, warmup_steps: usize) -> Self {
        self.warmup_steps = warmup_steps;
        self
    }
}

/// Where a [`WarmupMultiStepLR`] is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Linear ramp from the base rates to the target rate
    Warmup,
    /// Past warmup, no milestone reached yet: the target rate is held
    Holding,
    /// Holding a rate decayed `decays` times in total
    DecayedHolding { decays: u32 },
}

/// Warmup + Multi-Step Decay Learning Rate Scheduler
///
/// - Phase 1 (warmup): each group ramps linearly from its base rate at step 0
///   to `target_lr` at step `warmup_steps - 1`
/// - Phase 2 (decay): the last computed rate is held, and multiplied by
///   `gamma^k` at every milestone listed `k` times
///
/// The rate after warmup is stateful: it is derived from the previously held
/// rate, not recomputed from the base rates.
#[derive(Debug, Clone)]
pub struct WarmupMultiStepLR {
    base_lrs: Vec<f32>,
    milestones: BTreeMap<usize, u32>,
    target_lr: f32,
    gamma: f32,
    warmup_steps: usize,
    counter: StepCounter,
    lrs: Vec<f32>,
    phase: Phase,
}

impl WarmupMultiStepLR {
    /// Create a new scheduler, one base rate per parameter group
    ///
    /// # Errors
    /// Fails if there are no groups, a rate is negative or non-finite,
    /// `gamma` is outside `[0, 1]`, or `warmup_steps < 2`.
    pub fn new(base_lrs: Vec<f32>, config: WarmupMultiStepConfig) -> Result<Self> {
        validate_base_lrs(&base_lrs)?;
        validate_target_lr(config.target_lr)?;
        validate_warmup_steps(config.warmup_steps)?;
        if !(0.0..=1.0).contains(&config.gamma) {
            return Err(SchedulerError::InvalidGamma(config.gamma));
        }

        let mut milestones = BTreeMap::new();
        for &m in &config.milestones {
            *milestones.entry(m).or_insert(0u32) += 1;
        }
        for &m in milestones.keys().filter(|&&m| m < config.warmup_steps) {
            warn!(
                milestone = m,
                warmup_steps = config.warmup_steps,
                "milestone falls inside warmup and will never decay the rate"
            );
        }

        Ok(Self {
            lrs: base_lrs.clone(),
            base_lrs,
            milestones,
            target_lr: config.target_lr,
            gamma: config.gamma,
            warmup_steps: config.warmup_steps,
            counter: StepCounter::new(),
            phase: Phase::Warmup,
        })
    }

    /// Create a scheduler whose base rates are the optimizer's current group rates
    pub fn from_optimizer(optimizer: &dyn Optimizer, config: WarmupMultiStepConfig) -> Result<Self> {
        Self::new(optimizer.lrs(), config)
    }

    /// Create a scheduler positioned as if `last_step + 1` steps had been taken
    pub fn resume(
        base_lrs: Vec<f32>,
        config: WarmupMultiStepConfig,
        last_step: i64,
    ) -> Result<Self> {
        validate_last_step(last_step)?;
        let mut scheduler = Self::new(base_lrs, config)?;
        if last_step >= 0 {
            scheduler.lrs = scheduler.closed_form_rates(last_step);
            scheduler.phase = scheduler.phase_at(last_step);
            scheduler.counter = StepCounter::starting_at(last_step);
        }
        Ok(scheduler)
    }

    /// Rates for `step`, treating the currently held rates as the previous step's
    ///
    /// Inside warmup this is the linear ramp. Afterwards the held rates are
    /// returned unchanged unless `step` is a milestone, in which case they are
    /// multiplied by `gamma` once per occurrence of `step` in the milestones.
    pub fn current_rates(&self, step: i64) -> Vec<f32> {
        if in_warmup(step, self.warmup_steps) {
            return self
                .base_lrs
                .iter()
                .map(|&base| warmup_lr(base, self.target_lr, step, self.warmup_steps))
                .collect();
        }

        match self.milestone_count(step) {
            None => self.lrs.clone(),
            Some(count) => {
                let factor = self.gamma.powi(count as i32);
                self.lrs.iter().map(|&lr| lr * factor).collect()
            }
        }
    }

    /// Rates at `step` computed directly, without the held state
    ///
    /// Formula after warmup: lr_t = target_lr * gamma^(milestones reached by t)
    pub fn closed_form_rates(&self, step: i64) -> Vec<f32> {
        if in_warmup(step, self.warmup_steps) {
            return self
                .base_lrs
                .iter()
                .map(|&base| warmup_lr(base, self.target_lr, step, self.warmup_steps))
                .collect();
        }

        let lr = self.target_lr * self.gamma.powi(self.decays_through(step) as i32);
        vec![lr; self.base_lrs.len()]
    }

    /// Current lifecycle phase
    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn base_lrs(&self) -> &[f32] {
        &self.base_lrs
    }

    pub fn target_lr(&self) -> f32 {
        self.target_lr
    }

    pub fn gamma(&self) -> f32 {
        self.gamma
    }

    pub fn warmup_steps(&self) -> usize {
        self.warmup_steps
    }

    /// Milestone step -> number of times it was listed
    pub fn milestones(&self) -> &BTreeMap<usize, u32> {
        &self.milestones
    }

    fn milestone_count(&self, step: i64) -> Option<u32> {
        usize::try_from(step).ok().and_then(|s| self.milestones.get(&s).copied())
    }

    /// Total decays applied by the end of `step` (post-warmup milestones only)
    fn decays_through(&self, step: i64) -> u32 {
        let Ok(step) = usize::try_from(step) else {
            return 0;
        };
        if step < self.warmup_steps {
            return 0;
        }
        self.milestones.range(self.warmup_steps..=step).map(|(_, &count)| count).sum()
    }

    fn phase_at(&self, step: i64) -> Phase {
        if in_warmup(step, self.warmup_steps) {
            return Phase::Warmup;
        }
        match self.decays_through(step) {
            0 => Phase::Holding,
            decays => Phase::DecayedHolding { decays },
        }
    }

    fn next_phase(&self, step: i64) -> Phase {
        if in_warmup(step, self.warmup_steps) {
            return Phase::Warmup;
        }
        match (self.phase, self.milestone_count(step)) {
            (Phase::DecayedHolding { decays }, Some(count)) => {
                Phase::DecayedHolding { decays: decays + count }
            }
            (_, Some(count)) => Phase::DecayedHolding { decays: count },
            (Phase::Warmup, None) => Phase::Holding,
            (phase, None) => phase,
        }
    }
}

impl LRScheduler for WarmupMultiStepLR {
    fn get_lrs(&self) -> &[f32] {
        &self.lrs
    }

    fn last_step(&self) -> i64 {
        self.counter.last_step()
    }

    fn step(&mut self) -> &[f32] {
        let step = self.counter.advance();
        let lrs = self.current_rates(step);
        let phase = self.next_phase(step);

        if let Phase::DecayedHolding { decays } = phase {
            if self.milestone_count(step).is_some() {
                debug!(step, decays, gamma = self.gamma, "milestone decay applied");
            }
        }

        self.lrs = lrs;
        self.phase = phase;
        trace!(step, lrs = ?self.lrs, "warmup_multi_step");
        &self.lrs
    }

    fn name(&self) -> &'static str {
        "warmup_multi_step"
    }
}
