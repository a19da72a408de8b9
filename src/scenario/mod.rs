//scenario: setpoint sequences fed to the engine
pub mod setpoint;

pub use setpoint::{reference, step_up_then_down, unit_step, SetpointProfile};
