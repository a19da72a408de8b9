//! # PID step-response simulator
//!
//! Closed-loop PID controller driving a first-order lag (PT1) process,
//! integrated with explicit Euler on a fixed time grid.
//!
//! - `engine`: the pure simulation, `simulate` / `try_simulate`.
//! - `scenario`: piecewise-constant setpoint profiles.
//! - `shell`: slider state, command parsing, recompute on change.
//! - `display`: SVG chart of the responses.
//! - `utils::metrics`: overshoot / settling summaries.

pub mod display;
pub mod engine;
pub mod scenario;
pub mod shell;
pub mod utils;

pub use engine::{simulate, try_simulate, PidGains, Response, SimulationError, SimulationParams, TimeGrid};
