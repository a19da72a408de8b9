//! session.rs
//! Owns the time grid and the current parameter value; recomputes both
//! scenarios on every change.
//!
//! Parameters are never edited in place: each slider change builds a new
//! `ShellParams` and the previous one is dropped.

use log::{debug, info};

use crate::engine::{try_simulate, PidGains, Response, SimulationParams, TimeGrid};
use crate::scenario::{reference, step_up_then_down, unit_step};
use crate::shell::{config::ShellConfig, error::ShellError, slider::Slider};
use crate::utils::metrics::ResponseStats;

/// Values currently selected on the sliders.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShellParams {
    pub gains: PidGains,
    pub t_switch: f64,
}

impl ShellParams {
    pub fn get(&self, slider: Slider) -> f64 {
        match slider {
            Slider::Kp => self.gains.kp,
            Slider::Ki => self.gains.ki,
            Slider::Kd => self.gains.kd,
            Slider::TSwitch => self.t_switch,
        }
    }

    /// Copy with one slider moved.
    pub fn with(self, slider: Slider, value: f64) -> Self {
        match slider {
            Slider::Kp => Self { gains: self.gains.with_kp(value), ..self },
            Slider::Ki => Self { gains: self.gains.with_ki(value), ..self },
            Slider::Kd => Self { gains: self.gains.with_kd(value), ..self },
            Slider::TSwitch => Self { t_switch: value, ..self },
        }
    }
}

/// One setpoint scenario and the engine's answer to it.
#[derive(Debug, Clone)]
pub struct ScenarioRun {
    pub label: &'static str,
    pub setpoint: Vec<f64>,
    pub response: Response,
    pub stats: Option<ResponseStats>,
}

impl ScenarioRun {
    fn run(
        label: &'static str,
        setpoint: Vec<f64>,
        params: &SimulationParams,
        grid: &TimeGrid,
    ) -> Result<Self, ShellError> {
        let response = try_simulate(&setpoint, params, grid)?;
        let stats = ResponseStats::from_response(&response.output, &setpoint, grid);
        Ok(Self { label, setpoint, response, stats })
    }
}

/// Everything the chart needs for one redraw.
#[derive(Debug, Clone)]
pub struct Frame {
    pub params: ShellParams,
    pub unit_step: ScenarioRun,
    pub step_down: ScenarioRun,
    pub reference: Vec<f64>,
}

impl Frame {
    pub fn runs(&self) -> [&ScenarioRun; 2] {
        [&self.unit_step, &self.step_down]
    }
}

pub struct Session {
    config: ShellConfig,
    grid: TimeGrid,
    initial: ShellParams,
    params: ShellParams,
}

impl Session {
    /// Builds the grid and pins the start-up values into their slider ranges.
    pub fn new(config: ShellConfig) -> Result<Self, ShellError> {
        let grid = TimeGrid::new(config.t_end, config.dt)?;

        let mut initial = ShellParams {
            gains: config.initial_gains,
            t_switch: config.initial_t_switch,
        };
        for slider in Slider::ALL {
            let value = slider.range(grid.t_end()).clamp(slider, initial.get(slider))?;
            initial = initial.with(slider, value);
        }
        SimulationParams::new(initial.gains, config.tau).validate()?;

        info!(
            "session: {} samples, dt = {} s, tau = {} s",
            grid.len(),
            grid.dt(),
            config.tau
        );

        Ok(Self { config, grid, initial, params: initial })
    }

    pub fn config(&self) -> &ShellConfig {
        &self.config
    }

    pub fn grid(&self) -> &TimeGrid {
        &self.grid
    }

    pub fn params(&self) -> ShellParams {
        self.params
    }

    /// Recomputes both scenarios for the current parameters.
    pub fn frame(&self) -> Result<Frame, ShellError> {
        let p = self.params;
        let sim = SimulationParams::new(p.gains, self.config.tau);

        let unit_step = ScenarioRun::run("Step 0→1", unit_step(&self.grid), &sim, &self.grid)?;
        let step_down = ScenarioRun::run(
            "Step 0→2→1",
            step_up_then_down(&self.grid, p.t_switch),
            &sim,
            &self.grid,
        )?;

        Ok(Frame {
            params: p,
            unit_step,
            step_down,
            reference: reference(&self.grid),
        })
    }

    /// Moves one slider and returns the recomputed frame.
    pub fn apply(&mut self, slider: Slider, value: f64) -> Result<Frame, ShellError> {
        let value = slider.range(self.grid.t_end()).clamp(slider, value)?;
        let next = self.params.with(slider, value);
        debug!("{}: {} -> {}", slider, self.params.get(slider), value);

        self.params = next;
        self.frame()
    }

    /// Back to the start-up values.
    pub fn reset(&mut self) -> Result<Frame, ShellError> {
        self.params = self.initial;
        self.frame()
    }
}
