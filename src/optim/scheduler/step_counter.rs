//! Step counter shared by all schedulers

/// Index of the most recently completed step.
///
/// Starts at `-1` ("no steps taken yet"); every call to [`StepCounter::advance`]
/// moves it forward by exactly one, saturating at `i64::MAX`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepCounter {
    last_step: i64,
}

impl StepCounter {
    /// Sentinel meaning zero steps have completed
    pub const NOT_STARTED: i64 = -1;

    /// Create a counter that has not taken any step
    pub fn new() -> Self {
        Self { last_step: Self::NOT_STARTED }
    }

    /// Create a counter positioned at `last_step`
    pub fn starting_at(last_step: i64) -> Self {
        Self { last_step }
    }

    /// Increment the step index and return the new value
    pub fn advance(&mut self) -> i64 {
        self.last_step = self.last_step.saturating_add(1);
        self.last_step
    }

    /// Current step index
    pub fn last_step(&self) -> i64 {
        self.last_step
    }

    /// Whether at least one step has completed
    pub fn is_started(&self) -> bool {
        self.last_step > Self::NOT_STARTED
    }
}

impl Default for StepCounter {
    fn default() -> Self {
        Self::new()
    }
}
