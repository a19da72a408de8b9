//engine: closed-loop simulation core
//Pure functions of (setpoint, params, grid); nothing is kept between runs
pub mod error;
pub mod params;
pub mod simulate;
pub mod time_grid;

pub use error::SimulationError;
pub use params::{PidGains, SimulationParams, DEFAULT_TAU};
pub use simulate::{simulate, try_simulate, Response};
pub use time_grid::TimeGrid;
