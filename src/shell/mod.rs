//shell: parameter state, slider ranges and command parsing around the engine
pub mod command;
pub mod config;
pub mod error;
pub mod session;
pub mod slider;

pub use command::Command;
pub use config::ShellConfig;
pub use error::ShellError;
pub use session::{Frame, ScenarioRun, Session, ShellParams};
pub use slider::{Slider, SliderRange};
