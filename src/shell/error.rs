//! error.rs
//! Errors surfaced by the interactive shell.

use std::path::PathBuf;

use thiserror::Error;

use crate::engine::SimulationError;

#[derive(Debug, Error)]
pub enum ShellError {
    #[error("could not parse '{input}' as a number")]
    Parse { input: String },

    #[error("unknown command '{0}' (type 'help' for the list)")]
    UnknownCommand(String),

    #[error("missing value for '{0}'")]
    MissingValue(&'static str),

    #[error("{slider} must be a finite number")]
    NonFiniteValue { slider: &'static str },

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error("chart path {path:?} must end in .svg")]
    UnsupportedChartFormat { path: PathBuf },

    #[error("failed to render chart: {0}")]
    Render(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
