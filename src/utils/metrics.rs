//! Step-response statistics for one simulated trajectory.
//!
//! Computed after every recompute and logged next to the chart:
//! - **Stats:** min / max / mean over any series.
//! - **ResponseStats:** overshoot and settling time against the final setpoint.

use crate::engine::TimeGrid;

/// Tolerance band for settling, as a fraction of the final setpoint magnitude.
pub const SETTLING_BAND: f64 = 0.02;

/// Absolute floor for the settling band so a zero setpoint still has one.
const SETTLING_BAND_FLOOR: f64 = 1e-3;

/// Statistics summary for a dataset.
#[derive(Debug, Clone, PartialEq)]
pub struct Stats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
}

/// Computes min, max, mean for a float series.
pub fn calculate_stats(data: &[f64]) -> Option<Stats> {
    if data.is_empty() {
        return None;
    }

    let min = data.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = data.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    let mean = data.iter().sum::<f64>() / data.len() as f64;

    Some(Stats { min, max, mean })
}

/// How a response tracked its setpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ResponseStats {
    pub min: f64,
    pub max: f64,
    pub mean: f64,
    pub final_value: f64,
    /// `max(output) - final setpoint`, never negative.
    pub overshoot: f64,
    /// First time after which the output stays inside the settling band.
    pub settling_time: Option<f64>,
}

impl ResponseStats {
    /// Returns `None` for an empty response.
    pub fn from_response(output: &[f64], setpoint: &[f64], grid: &TimeGrid) -> Option<Self> {
        let stats = calculate_stats(output)?;
        let final_value = *output.last()?;
        let target = *setpoint.last()?;

        let band = (target.abs() * SETTLING_BAND).max(SETTLING_BAND_FLOOR);
        // Last sample outside the band; the response has settled from the one after it.
        let settling_time = match output.iter().rposition(|y| (y - target).abs() > band) {
            None => Some(0.0),
            Some(i) if i + 1 < output.len() => Some(grid.time_at(i + 1)),
            Some(_) => None,
        };

        Some(Self {
            min: stats.min,
            max: stats.max,
            mean: stats.mean,
            final_value,
            overshoot: (stats.max - target).max(0.0),
            settling_time,
        })
    }
}
