//! Stochastic Gradient Descent optimizer

use super::optimizer::{Optimizer, ParamGroup};
use ndarray::Array1;

/// SGD optimizer with optional momentum
///
/// Each parameter group is updated with its own learning rate, so a scheduler
/// can drive groups independently.
pub struct SGD {
    groups: Vec<ParamGroup>,
    momentum: f32,
    velocities: Vec<Vec<Option<Array1<f32>>>>,
}

impl SGD {
    /// Create a new SGD optimizer
    pub fn new(groups: Vec<ParamGroup>, momentum: f32) -> Self {
        let velocities = groups.iter().map(|g| vec![None; g.params.len()]).collect();
        Self { groups, momentum, velocities }
    }

    /// Momentum coefficient
    pub fn momentum(&self) -> f32 {
        self.momentum
    }
}

impl Optimizer for SGD {
    fn step(&mut self) {
        for (group, velocities) in self.groups.iter_mut().zip(self.velocities.iter_mut()) {
            let lr = group.lr;
            for (param, velocity) in group.params.iter_mut().zip(velocities.iter_mut()) {
                let Some(grad) = &param.grad else {
                    continue;
                };

                if self.momentum > 0.0 {
                    // v = momentum * v - lr * grad
                    let v = match velocity.take() {
                        Some(v) => v * self.momentum - grad * lr,
                        None => grad * (-lr),
                    };
                    // param = param + v
                    param.data += &v;
                    *velocity = Some(v);
                } else {
                    // param -= lr * grad
                    param.data.scaled_add(-lr, grad);
                }
            }
        }
    }

    fn param_groups(&self) -> &[ParamGroup] {
        &self.groups
    }

    fn param_groups_mut(&mut self) -> &mut [ParamGroup] {
        &mut self.groups
    }
}
