//! YAML schema definitions for schedule files

use crate::optim::{
    LRScheduler, SchedulerError, WarmupMultiStepConfig, WarmupMultiStepLR,
    WarmupPolynomialConfig, WarmupPolynomialLR,
};
use serde::{Deserialize, Serialize};

/// Complete schedule: optimizer groups, scheduler and run length
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleSpec {
    /// Optimizer configuration
    pub optimizer: OptimSpec,

    /// Learning rate scheduler
    pub scheduler: SchedulerSpec,

    /// Simulation parameters
    #[serde(default)]
    pub run: RunParams,
}

/// Optimizer parameter groups
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimSpec {
    /// Base learning rate of each parameter group
    pub base_lrs: Vec<f32>,

    /// SGD momentum
    #[serde(default)]
    pub momentum: f32,
}

/// Scheduler selection, tagged by `type`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchedulerSpec {
    WarmupMultiStep(WarmupMultiStepConfig),
    WarmupPolynomial(WarmupPolynomialConfig),
}

impl SchedulerSpec {
    /// Identifier matching the `type` tag
    pub fn name(&self) -> &'static str {
        match self {
            SchedulerSpec::WarmupMultiStep(_) => "warmup_multi_step",
            SchedulerSpec::WarmupPolynomial(_) => "warmup_polynomial",
        }
    }

    /// Length of the warmup ramp
    pub fn warmup_steps(&self) -> usize {
        match self {
            SchedulerSpec::WarmupMultiStep(c) => c.warmup_steps,
            SchedulerSpec::WarmupPolynomial(c) => c.warmup_steps,
        }
    }

    /// Rate reached at the end of warmup
    pub fn target_lr(&self) -> f32 {
        match self {
            SchedulerSpec::WarmupMultiStep(c) => c.target_lr,
            SchedulerSpec::WarmupPolynomial(c) => c.target_lr,
        }
    }

    /// Build a fresh scheduler for the given base rates
    pub fn build(&self, base_lrs: Vec<f32>) -> Result<Box<dyn LRScheduler>, SchedulerError> {
        self.resume(base_lrs, -1)
    }

    /// Build a scheduler positioned at `last_step`
    pub fn resume(
        &self,
        base_lrs: Vec<f32>,
        last_step: i64,
    ) -> Result<Box<dyn LRScheduler>, SchedulerError> {
        let scheduler: Box<dyn LRScheduler> = match self {
            SchedulerSpec::WarmupMultiStep(config) => {
                Box::new(WarmupMultiStepLR::resume(base_lrs, config.clone(), last_step)?)
            }
            SchedulerSpec::WarmupPolynomial(config) => {
                Box::new(WarmupPolynomialLR::resume(base_lrs, config.clone(), last_step)?)
            }
        };
        Ok(scheduler)
    }
}

/// Simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunParams {
    /// Number of scheduler steps to run
    pub steps: usize,

    /// Resume point (-1 = fresh start)
    pub last_step: i64,
}

impl Default for RunParams {
    fn default() -> Self {
        Self { steps: 20, last_step: -1 }
    }
}
