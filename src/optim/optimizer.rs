//! Optimizer trait over parameter groups

use super::scheduler::SchedulerError;
use ndarray::Array1;

/// A single optimizable vector and its gradient
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub data: Array1<f32>,
    pub grad: Option<Array1<f32>>,
}

impl Parameter {
    /// Create a parameter with no gradient
    pub fn new(data: Array1<f32>) -> Self {
        Self { data, grad: None }
    }

    /// Create a zero-initialised parameter of length `len`
    pub fn zeros(len: usize) -> Self {
        Self::new(Array1::zeros(len))
    }

    /// Attach a gradient
    pub fn set_grad(&mut self, grad: Array1<f32>) {
        self.grad = Some(grad);
    }

    /// Reset the gradient to zeros, if one is attached
    pub fn zero_grad(&mut self) {
        if let Some(grad) = self.grad.as_mut() {
            grad.fill(0.0);
        }
    }
}

/// Parameters that share one learning rate
#[derive(Debug, Clone, PartialEq)]
pub struct ParamGroup {
    pub name: String,
    pub lr: f32,
    pub params: Vec<Parameter>,
}

impl ParamGroup {
    /// Create a named group
    pub fn new(name: impl Into<String>, lr: f32, params: Vec<Parameter>) -> Self {
        Self { name: name.into(), lr, params }
    }
}

/// Trait for optimization algorithms
///
/// Schedulers only touch the per-group `lr`; everything else belongs to the
/// optimizer.
pub trait Optimizer {
    /// Perform a single optimization step on every group
    fn step(&mut self);

    /// Parameter groups in registration order
    fn param_groups(&self) -> &[ParamGroup];

    /// Mutable access to the parameter groups
    fn param_groups_mut(&mut self) -> &mut [ParamGroup];

    /// Zero out all gradients
    fn zero_grad(&mut self) {
        for group in self.param_groups_mut() {
            for param in &mut group.params {
                param.zero_grad();
            }
        }
    }

    /// Learning rate of every group
    fn lrs(&self) -> Vec<f32> {
        self.param_groups().iter().map(|g| g.lr).collect()
    }

    /// Overwrite the learning rate of every group
    fn set_lrs(&mut self, lrs: &[f32]) -> Result<(), SchedulerError> {
        let groups = self.param_groups_mut();
        if groups.len() != lrs.len() {
            return Err(SchedulerError::GroupCountMismatch {
                expected: lrs.len(),
                actual: groups.len(),
            });
        }
        for (group, &lr) in groups.iter_mut().zip(lrs) {
            group.lr = lr;
        }
        Ok(())
    }
}
