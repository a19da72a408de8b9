//! slider.rs
//! The four adjustable inputs and their ranges.

use std::fmt;

use log::warn;

use crate::shell::error::ShellError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slider {
    Kp,
    Ki,
    Kd,
    TSwitch,
}

impl Slider {
    pub const ALL: [Slider; 4] = [Slider::Kp, Slider::Ki, Slider::Kd, Slider::TSwitch];

    pub fn label(self) -> &'static str {
        match self {
            Slider::Kp => "Kp",
            Slider::Ki => "Ki",
            Slider::Kd => "Kd",
            Slider::TSwitch => "switch time [s]",
        }
    }

    /// Range of the slider; the switch time spans all but the last second of the run.
    pub fn range(self, t_end: f64) -> SliderRange {
        match self {
            Slider::Kp => SliderRange::new(0.0, 10.0),
            Slider::Ki => SliderRange::new(0.0, 2.0),
            Slider::Kd => SliderRange::new(0.0, 1.0),
            Slider::TSwitch => SliderRange::new(0.0, (t_end - 1.0).max(0.0)),
        }
    }
}

impl fmt::Display for Slider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }

    /// Pins `value` into the range the way a slider widget would.
    pub fn clamp(&self, slider: Slider, value: f64) -> Result<f64, ShellError> {
        if !value.is_finite() {
            return Err(ShellError::NonFiniteValue { slider: slider.label() });
        }
        if self.contains(value) {
            return Ok(value);
        }
        let clamped = value.clamp(self.min, self.max);
        warn!(
            "{} = {} outside [{}, {}], using {}",
            slider, value, self.min, self.max, clamped
        );
        Ok(clamped)
    }
}
