//! time_grid.rs
//! Fixed-step time axis shared by every simulation in a session.

use crate::engine::error::SimulationError;

/// Relative slack applied before rounding the sample count up, so that
/// `t_end / dt` landing a hair above an integer does not add a sample.
const SAMPLE_COUNT_SLACK: f64 = 1e-9;

/// Samples `t_i = i * dt` covering the half-open interval `[0, t_end)`.
///
/// Immutable once built: uniform spacing, strictly increasing, at least one sample.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeGrid {
    dt: f64,
    t_end: f64,
    len: usize,
}

impl TimeGrid {
    /// Builds the grid, rejecting non-positive or non-finite step and duration.
    pub fn new(t_end: f64, dt: f64) -> Result<Self, SimulationError> {
        if !dt.is_finite() {
            return Err(SimulationError::NonFinite { name: "dt" });
        }
        if !t_end.is_finite() {
            return Err(SimulationError::NonFinite { name: "t_end" });
        }
        if dt <= 0.0 {
            return Err(SimulationError::NonPositiveStep { dt });
        }
        if t_end <= 0.0 {
            return Err(SimulationError::NonPositiveDuration { t_end });
        }

        let len = ((t_end / dt) * (1.0 - SAMPLE_COUNT_SLACK)).ceil().max(1.0) as usize;

        Ok(Self { dt, t_end, len })
    }

    #[inline]
    pub fn dt(&self) -> f64 {
        self.dt
    }

    #[inline]
    pub fn t_end(&self) -> f64 {
        self.t_end
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a constructed grid; present for API symmetry with `len`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Time of sample `i`.
    #[inline]
    pub fn time_at(&self, i: usize) -> f64 {
        i as f64 * self.dt
    }

    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time_at(i))
    }
}
