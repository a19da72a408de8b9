//! error.rs
//! Validation errors for the simulation engine.

use thiserror::Error;

/// Raised before any computation when grid, parameters or setpoint are unusable.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("time step must be positive, got dt = {dt}")]
    NonPositiveStep { dt: f64 },

    #[error("simulation duration must be positive, got t_end = {t_end}")]
    NonPositiveDuration { t_end: f64 },

    #[error("process time constant must be positive, got tau = {tau}")]
    NonPositiveTimeConstant { tau: f64 },

    #[error("gain {name} must be non-negative, got {value}")]
    NegativeGain { name: &'static str, value: f64 },

    #[error("{name} must be a finite number")]
    NonFinite { name: &'static str },

    #[error("setpoint has {setpoint} samples but the time grid has {grid}")]
    LengthMismatch { setpoint: usize, grid: usize },
}
