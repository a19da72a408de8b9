//! simulate.rs
//! Closed-loop PID + PT1 process, integrated with explicit Euler on a fixed grid.
//!
//! Loop per sample i >= 1:
//! - error against the previous output sample (one-step-delayed feedback)
//! - PID law on that error, integral and backward-difference derivative
//! - one Euler step of dy/dt = (u - y) / tau using the control just computed
//!
//! Sample 0 is the resting state: output and control both zero.

use crate::engine::{
    error::SimulationError,
    params::SimulationParams,
    time_grid::TimeGrid,
};

/// Trajectories produced by one simulation run, one value per grid sample.
#[derive(Debug, Clone, PartialEq)]
pub struct Response {
    pub output: Vec<f64>,
    /// Computed on every run; the interactive chart does not draw it yet.
    pub control: Vec<f64>,
}

impl Response {
    #[inline]
    pub fn len(&self) -> usize {
        self.output.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.output.is_empty()
    }
}

/// Running state of the discrete PID law. Lives for exactly one run.
#[derive(Debug, Default)]
struct PidState {
    integral: f64,
    prev_error: f64,
}

impl PidState {
    #[inline]
    fn step(&mut self, params: &SimulationParams, error: f64, dt: f64) -> f64 {
        self.integral += error * dt;
        // prev_error starts at 0, so the first derivative is error / dt
        let derivative = (error - self.prev_error) / dt;
        self.prev_error = error;

        let g = &params.gains;
        g.kp * error + g.ki * self.integral + g.kd * derivative
    }
}

/// One explicit-Euler step of the first-order lag.
#[inline]
fn pt1_step(y_prev: f64, u: f64, tau: f64, dt: f64) -> f64 {
    y_prev + dt * ((u - y_prev) / tau)
}

/// Runs the feedback loop over `grid`.
///
/// The caller guarantees `setpoint.len() >= grid.len()`, `tau > 0` and a
/// positive step (a [`TimeGrid`] always has one). A shorter setpoint panics
/// on indexing; use [`try_simulate`] for unchecked input.
pub fn simulate(setpoint: &[f64], params: &SimulationParams, grid: &TimeGrid) -> Response {
    let n = grid.len();
    let dt = grid.dt();

    let mut output = vec![0.0; n];
    let mut control = vec![0.0; n];
    let mut pid = PidState::default();

    for i in 1..n {
        let error = setpoint[i] - output[i - 1];
        control[i] = pid.step(params, error, dt);
        output[i] = pt1_step(output[i - 1], control[i], params.tau, dt);
    }

    Response { output, control }
}

/// Validating front door to [`simulate`]: checks parameters and setpoint length first.
pub fn try_simulate(
    setpoint: &[f64],
    params: &SimulationParams,
    grid: &TimeGrid,
) -> Result<Response, SimulationError> {
    params.validate()?;
    if setpoint.len() != grid.len() {
        return Err(SimulationError::LengthMismatch {
            setpoint: setpoint.len(),
            grid: grid.len(),
        });
    }
    if setpoint.iter().any(|v| !v.is_finite()) {
        return Err(SimulationError::NonFinite { name: "setpoint" });
    }
    Ok(simulate(setpoint, params, grid))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::params::PidGains;
    use approx::assert_relative_eq;

    fn default_grid() -> TimeGrid {
        TimeGrid::new(10.0, 0.01).unwrap()
    }

    #[test]
    fn first_samples_follow_the_update_order() {
        // dt = 0.5, tau = 1, Kp = 1, Ki = 1, Kd = 1, setpoint = 1
        let grid = TimeGrid::new(1.5, 0.5).unwrap();
        let params = SimulationParams::new(PidGains::new(1.0, 1.0, 1.0), 1.0);
        let r = simulate(&[1.0, 1.0, 1.0], &params, &grid);

        // i = 1: e = 1, I = 0.5, D = 2, u = 3.5, y = 0 + 0.5 * 3.5 = 1.75
        assert_relative_eq!(r.control[1], 3.5);
        assert_relative_eq!(r.output[1], 1.75);
        // i = 2: e = -0.75, I = 0.125, D = -3.5, u = -4.125, y = 1.75 + 0.5 * (-5.875)
        assert_relative_eq!(r.control[2], -4.125);
        assert_relative_eq!(r.output[2], -1.1875);
    }

    #[test]
    fn resting_state_at_sample_zero() {
        let grid = default_grid();
        let params = SimulationParams::new(PidGains::new(5.0, 1.0, 0.5), 1.0);
        let r = simulate(&vec![1.0; grid.len()], &params, &grid);
        assert_eq!(r.output[0], 0.0);
        assert_eq!(r.control[0], 0.0);
    }

    #[test]
    fn single_sample_grid_stays_at_rest() {
        let grid = TimeGrid::new(0.01, 0.01).unwrap();
        let params = SimulationParams::new(PidGains::new(1.0, 0.5, 0.1), 1.0);
        let r = simulate(&[1.0], &params, &grid);
        assert_eq!(r.output, vec![0.0]);
        assert_eq!(r.control, vec![0.0]);
    }

    #[test]
    fn try_simulate_rejects_length_mismatch() {
        let grid = default_grid();
        let params = SimulationParams::from(PidGains::new(1.0, 0.5, 0.1));
        let err = try_simulate(&[1.0; 10], &params, &grid).unwrap_err();
        assert_eq!(err, SimulationError::LengthMismatch { setpoint: 10, grid: 1000 });
    }

    #[test]
    fn try_simulate_rejects_bad_tau_before_running() {
        let grid = default_grid();
        let params = SimulationParams::new(PidGains::new(1.0, 0.5, 0.1), -1.0);
        let err = try_simulate(&vec![1.0; grid.len()], &params, &grid).unwrap_err();
        assert_eq!(err, SimulationError::NonPositiveTimeConstant { tau: -1.0 });
    }

    #[test]
    fn try_simulate_rejects_non_finite_setpoint() {
        let grid = TimeGrid::new(0.03, 0.01).unwrap();
        let params = SimulationParams::from(PidGains::new(1.0, 0.0, 0.0));
        let err = try_simulate(&[0.0, f64::NAN, 1.0], &params, &grid).unwrap_err();
        assert_eq!(err, SimulationError::NonFinite { name: "setpoint" });
    }

    #[test]
    fn try_simulate_matches_simulate_for_valid_input() {
        let grid = default_grid();
        let params = SimulationParams::from(PidGains::new(1.0, 0.5, 0.1));
        let sp = vec![1.0; grid.len()];
        assert_eq!(try_simulate(&sp, &params, &grid).unwrap(), simulate(&sp, &params, &grid));
    }
}
