//! command.rs
//! Terminal stand-in for the slider panel: one line in, one command out.

use std::io;

use crate::shell::{error::ShellError, slider::Slider};

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Set(Slider, f64),
    Show,
    Reset,
    Help,
    Quit,
}

pub const HELP: &str = "\
Commands:
  kp <value>       proportional gain  [0, 10]
  ki <value>       integral gain      [0, 2]
  kd <value>       derivative gain    [0, 1]
  switch <value>   step-down time [s] [0, t_end - 1]
  show             print current parameters and response summary
  reset            restore the start-up parameters
  help             this text
  quit             leave the session";

impl Command {
    /// Parses a line such as `kp 2.5`. Blank lines mean `show`.
    pub fn parse(line: &str) -> Result<Self, ShellError> {
        let mut parts = line.split_whitespace();
        let Some(head) = parts.next() else {
            return Ok(Command::Show);
        };

        let slider = match head.to_ascii_lowercase().as_str() {
            "kp" => Slider::Kp,
            "ki" => Slider::Ki,
            "kd" => Slider::Kd,
            "switch" | "t_switch" | "ts" => Slider::TSwitch,
            "show" | "s" => return Ok(Command::Show),
            "reset" | "r" => return Ok(Command::Reset),
            "help" | "h" | "?" => return Ok(Command::Help),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            other => return Err(ShellError::UnknownCommand(other.to_string())),
        };

        let raw = parts.next().ok_or(ShellError::MissingValue(slider.label()))?;
        let value = raw
            .parse::<f64>()
            .map_err(|_| ShellError::Parse { input: raw.to_string() })?;

        Ok(Command::Set(slider, value))
    }
}

/// One pull from the input stream.
#[derive(Debug)]
pub enum Input {
    Line(String),
    /// The line was consumed but is not valid UTF-8.
    Unreadable(io::Error),
    Eof,
}

/// Reads the next line. Invalid UTF-8 is reported as [`Input::Unreadable`]
/// so the session can carry on; other read failures are returned as errors.
pub fn next_input<I>(lines: &mut I) -> io::Result<Input>
where
    I: Iterator<Item = io::Result<String>>,
{
    match lines.next() {
        None => Ok(Input::Eof),
        Some(Ok(line)) => Ok(Input::Line(line)),
        Some(Err(e)) if e.kind() == io::ErrorKind::InvalidData => Ok(Input::Unreadable(e)),
        Some(Err(e)) => Err(e),
    }
}
