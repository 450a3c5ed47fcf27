//! Optimizers and learning rate schedulers

mod optimizer;
mod scheduler;
mod sgd;

pub use optimizer::{Optimizer, ParamGroup, Parameter};
pub use scheduler::{
    LRScheduler, Phase, SchedulerError, StepCounter, WarmupMultiStepConfig, WarmupMultiStepLR,
    WarmupPolynomialConfig, WarmupPolynomialLR,
};
pub use sgd::SGD;
