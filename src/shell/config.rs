//! config.rs
//! Compiled-in session defaults. Nothing is read from disk or the environment.

use std::path::PathBuf;

use crate::engine::{PidGains, DEFAULT_TAU};

pub const DEFAULT_T_END: f64 = 10.0;
pub const DEFAULT_DT: f64 = 0.01;
pub const DEFAULT_GAINS: PidGains = PidGains::new(1.0, 0.5, 0.1);
pub const DEFAULT_T_SWITCH: f64 = 1.0;
pub const DEFAULT_CHART_PATH: &str = "data/pid_response.svg";

#[derive(Debug, Clone, PartialEq)]
pub struct ShellConfig {
    pub t_end: f64,
    pub dt: f64,
    pub tau: f64,
    pub initial_gains: PidGains,
    pub initial_t_switch: f64,
    pub chart_path: PathBuf,
    /// Large canvas; the chart is meant to fill the screen.
    pub fullscreen: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            t_end: DEFAULT_T_END,
            dt: DEFAULT_DT,
            tau: DEFAULT_TAU,
            initial_gains: DEFAULT_GAINS,
            initial_t_switch: DEFAULT_T_SWITCH,
            chart_path: PathBuf::from(DEFAULT_CHART_PATH),
            fullscreen: true,
        }
    }
}

impl ShellConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_grid(mut self, t_end: f64, dt: f64) -> Self {
        self.t_end = t_end;
        self.dt = dt;
        self
    }

    pub fn with_tau(mut self, tau: f64) -> Self {
        self.tau = tau;
        self
    }

    pub fn with_initial_gains(mut self, gains: PidGains) -> Self {
        self.initial_gains = gains;
        self
    }

    pub fn with_initial_t_switch(mut self, t_switch: f64) -> Self {
        self.initial_t_switch = t_switch;
        self
    }

    pub fn with_chart_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.chart_path = path.into();
        self
    }

    pub fn with_fullscreen(mut self, fullscreen: bool) -> Self {
        self.fullscreen = fullscreen;
        self
    }

    /// Canvas size in pixels.
    pub fn canvas_size(&self) -> (u32, u32) {
        if self.fullscreen { (1920, 1080) } else { (1280, 720) }
    }
}
