//! # Interactive PID Simulator Entry Point
//!
//! Terminal slider panel for the PID + PT1 simulation.
//!
//! Each command moves one slider, recomputes both setpoint scenarios and
//! redraws the chart file (default `data/pid_response.svg`); keep it open in
//! a browser or image viewer that reloads on change.
//!
//! ## Scenarios
//! - **Step 0→1:** setpoint 1 from t = 0.
//! - **Step 0→2→1:** setpoint 2 from t = 0, back to 1 at the switch time.

use std::{
    io::{stdin, stdout, BufRead, Write},
    process::ExitCode,
};

use log::{error, info};

use pid_sim::{
    display::write_chart,
    shell::{
        command::{next_input, Input, HELP},
        Command, Frame, Session, ShellConfig, ShellError, Slider,
    },
};

fn main() -> ExitCode {
    env_logger::init();
    info!("=== PID SIMULATOR START ===");

    let mut session = match Session::new(ShellConfig::default()) {
        Ok(s) => s,
        Err(e) => {
            error!("failed to start session: {}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = session.frame().and_then(|f| redraw(&session, &f)) {
        error!("initial render failed: {}", e);
        return ExitCode::FAILURE;
    }

    print_banner(&session);

    let input = stdin();
    let mut lines = input.lock().lines();
    loop {
        print!("> ");
        let _ = stdout().flush();

        let line = match next_input(&mut lines) {
            Ok(Input::Line(line)) => line,
            Ok(Input::Unreadable(e)) => {
                error!("skipping unreadable input line: {}", e);
                println!("error: input line is not valid UTF-8");
                continue;
            }
            Ok(Input::Eof) => break,
            Err(e) => {
                error!("failed to read stdin: {}", e);
                return ExitCode::FAILURE;
            }
        };

        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(Command::Help) => println!("{}", HELP),
            Ok(cmd) => {
                if let Err(e) = handle(&mut session, cmd) {
                    error!("{}", e);
                    println!("error: {}", e);
                }
            }
            Err(e) => {
                error!("{}", e);
                println!("{}", e);
            }
        }
    }

    info!("=== PID SIMULATOR FINISHED ===");
    ExitCode::SUCCESS
}

fn handle(session: &mut Session, cmd: Command) -> Result<(), ShellError> {
    let frame = match cmd {
        Command::Set(slider, value) => session.apply(slider, value)?,
        Command::Reset => session.reset()?,
        Command::Show => {
            let frame = session.frame()?;
            print_summary(&frame);
            return Ok(());
        }
        Command::Help | Command::Quit => return Ok(()),
    };
    redraw(session, &frame)?;
    print_summary(&frame);
    Ok(())
}

fn redraw(session: &Session, frame: &Frame) -> Result<(), ShellError> {
    let config = session.config();
    write_chart(frame, session.grid(), config.canvas_size(), &config.chart_path)?;

    for run in frame.runs() {
        if let Some(stats) = &run.stats {
            info!(
                "{}: final={:.4} min={:.4} max={:.4} mean={:.4} overshoot={:.4} settling={:?}",
                run.label,
                stats.final_value,
                stats.min,
                stats.max,
                stats.mean,
                stats.overshoot,
                stats.settling_time
            );
        }
    }
    Ok(())
}

fn print_banner(session: &Session) {
    let t_end = session.grid().t_end();
    println!("\n┌──────────────────────────────────────────────┐");
    println!("│   PID CONTROLLER RESPONSE TO SETPOINT STEPS  │");
    println!("├──────────────────────────────────────────────┤");
    for slider in Slider::ALL {
        let r = slider.range(t_end);
        println!("│  {:<16} [{:>4}, {:>4}]                  │", slider.label(), r.min, r.max);
    }
    println!("└──────────────────────────────────────────────┘");
    println!("Chart: {}", session.config().chart_path.display());
    println!("Type 'help' for commands.\n");
}

fn print_summary(frame: &Frame) {
    let p = frame.params;
    println!(
        "Kp={:.3} Ki={:.3} Kd={:.3} switch={:.2}s",
        p.gains.kp, p.gains.ki, p.gains.kd, p.t_switch
    );
    for run in frame.runs() {
        if let Some(stats) = &run.stats {
            let settling = stats
                .settling_time
                .map_or_else(|| "not settled".to_string(), |t| format!("{:.2}s", t));
            println!(
                "  {:<12} final={:.4} range=[{:.4}, {:.4}] overshoot={:.4} settling={}",
                run.label, stats.final_value, stats.min, stats.max, stats.overshoot, settling
            );
        }
    }
}
