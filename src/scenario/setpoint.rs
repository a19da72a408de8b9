//! setpoint.rs
//! Piecewise-constant setpoint profiles sampled onto the time grid.
//!
//! A profile is an initial value plus steps applied in insertion order:
//! every sample with `t >= step.time` takes the step's value, so later
//! steps override earlier ones where they overlap.

use crate::engine::TimeGrid;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Step {
    time: f64,
    value: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SetpointProfile {
    initial: f64,
    steps: Vec<Step>,
}

impl SetpointProfile {
    pub fn new(initial: f64) -> Self {
        Self { initial, steps: Vec::new() }
    }

    /// Adds a step that takes effect at every sample with `t >= time`.
    pub fn step_at(mut self, time: f64, value: f64) -> Self {
        self.steps.push(Step { time, value });
        self
    }

    /// Value of the profile at time `t`.
    pub fn value_at(&self, t: f64) -> f64 {
        self.steps
            .iter()
            .rev()
            .find(|s| t >= s.time)
            .map_or(self.initial, |s| s.value)
    }

    pub fn sample(&self, grid: &TimeGrid) -> Vec<f64> {
        grid.times().map(|t| self.value_at(t)).collect()
    }
}

/// Setpoint 1 everywhere: a step 0 -> 1 against the resting output.
pub fn unit_step(grid: &TimeGrid) -> Vec<f64> {
    SetpointProfile::new(1.0).sample(grid)
}

/// Jump to 2 at t = 0, then back down to 1 from `t_switch` on.
pub fn step_up_then_down(grid: &TimeGrid, t_switch: f64) -> Vec<f64> {
    SetpointProfile::new(0.0)
        .step_at(0.0, 2.0)
        .step_at(t_switch, 1.0)
        .sample(grid)
}

/// Fixed reference line drawn under the responses.
pub fn reference(grid: &TimeGrid) -> Vec<f64> {
    unit_step(grid)
}
