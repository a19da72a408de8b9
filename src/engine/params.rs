//! params.rs
//! Controller gains and process model handed to the simulation by value.

use crate::engine::error::SimulationError;

/// Time constant of the PT1 process used by the interactive session.
pub const DEFAULT_TAU: f64 = 1.0;

/// Proportional, integral and derivative gains.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PidGains {
    pub kp: f64,
    pub ki: f64,
    pub kd: f64,
}

impl PidGains {
    pub const fn new(kp: f64, ki: f64, kd: f64) -> Self {
        Self { kp, ki, kd }
    }

    pub const fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }

    pub const fn with_kp(self, kp: f64) -> Self {
        Self { kp, ..self }
    }

    pub const fn with_ki(self, ki: f64) -> Self {
        Self { ki, ..self }
    }

    pub const fn with_kd(self, kd: f64) -> Self {
        Self { kd, ..self }
    }

    /// Gains must be finite and non-negative.
    pub fn validate(&self) -> Result<(), SimulationError> {
        for (name, value) in [("Kp", self.kp), ("Ki", self.ki), ("Kd", self.kd)] {
            if !value.is_finite() {
                return Err(SimulationError::NonFinite { name });
            }
            if value < 0.0 {
                return Err(SimulationError::NegativeGain { name, value });
            }
        }
        Ok(())
    }
}

/// Everything the engine needs besides the setpoint and the time grid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub gains: PidGains,
    /// First-order lag time constant, seconds.
    pub tau: f64,
}

impl SimulationParams {
    pub const fn new(gains: PidGains, tau: f64) -> Self {
        Self { gains, tau }
    }

    pub fn validate(&self) -> Result<(), SimulationError> {
        self.gains.validate()?;
        if !self.tau.is_finite() {
            return Err(SimulationError::NonFinite { name: "tau" });
        }
        if self.tau <= 0.0 {
            return Err(SimulationError::NonPositiveTimeConstant { tau: self.tau });
        }
        Ok(())
    }
}

impl From<PidGains> for SimulationParams {
    fn from(gains: PidGains) -> Self {
        Self::new(gains, DEFAULT_TAU)
    }
}
