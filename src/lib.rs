//! Calentar: warmup learning rate schedules
//!
//! Two schedules share a linear warmup ramp from each parameter group's base
//! rate to a target rate:
//! - [`WarmupMultiStepLR`](optim::WarmupMultiStepLR) then decays by `gamma`
//!   at milestone steps
//! - [`WarmupPolynomialLR`](optim::WarmupPolynomialLR) then follows
//!   `target * (1 - t / T)^p`
//!
//! # Example
//!
//! ```
//! use calentar::optim::{
//!     LRScheduler, Optimizer, ParamGroup, Parameter, WarmupMultiStepConfig, WarmupMultiStepLR,
//!     SGD,
//! };
//!
//! let groups = vec![ParamGroup::new("default", 0.1, vec![Parameter::zeros(10)])];
//! let mut optimizer = SGD::new(groups, 0.0);
//! let config = WarmupMultiStepConfig::new(vec![10, 20], 6.4);
//! let mut scheduler = WarmupMultiStepLR::from_optimizer(&optimizer, config)?;
//!
//! for _ in 0..5 {
//!     scheduler.step();
//!     scheduler.apply(&mut optimizer)?;
//!     optimizer.step();
//! }
//! assert_eq!(optimizer.lrs(), vec![6.4]);
//! # Ok::<(), calentar::optim::SchedulerError>(())
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod optim;

pub use error::{Error, Result};
