//! Integration tests for the closed-loop PID + PT1 simulation

use approx::{assert_abs_diff_eq, assert_relative_eq};
use pid_sim::{
    scenario::{step_up_then_down, unit_step, SetpointProfile},
    shell::{Command, Session, ShellConfig, Slider},
    simulate, try_simulate, PidGains, SimulationError, SimulationParams, TimeGrid,
};

fn grid() -> TimeGrid {
    TimeGrid::new(10.0, 0.01).unwrap()
}

fn params(kp: f64, ki: f64, kd: f64) -> SimulationParams {
    SimulationParams::new(PidGains::new(kp, ki, kd), 1.0)
}

// ============================================================================
// ENGINE PROPERTIES
// ============================================================================

#[test]
fn test_zero_gains_leave_process_at_rest() {
    let grid = grid();
    let r = simulate(&unit_step(&grid), &params(0.0, 0.0, 0.0), &grid);

    assert!(r.control.iter().all(|&u| u == 0.0), "control should stay zero");
    assert!(r.output.iter().all(|&y| y == 0.0), "output should stay zero");
}

#[test]
fn test_zero_setpoint_keeps_output_zero_for_any_gains() {
    let grid = grid();
    let zero = vec![0.0; grid.len()];

    for gains in [(1.0, 0.5, 0.1), (10.0, 2.0, 1.0), (0.0, 2.0, 0.0), (3.0, 0.0, 0.7)] {
        let r = simulate(&zero, &params(gains.0, gains.1, gains.2), &grid);
        assert!(r.output.iter().all(|&y| y == 0.0), "gains {:?}", gains);
        assert!(r.control.iter().all(|&u| u == 0.0), "gains {:?}", gains);
    }
}

#[test]
fn test_proportional_only_step_response_is_monotone_and_below_setpoint() {
    let grid = grid();
    let sp = unit_step(&grid);

    for kp in [0.5, 1.0, 5.0, 10.0] {
        let r = simulate(&sp, &params(kp, 0.0, 0.0), &grid);
        assert!(
            r.output.windows(2).all(|w| w[1] >= w[0]),
            "output should be non-decreasing for Kp = {}",
            kp
        );
        assert!(r.output.iter().all(|&y| y <= 1.0), "no overshoot for Kp = {}", kp);
        // P-only steady state of the loop: Kp / (1 + Kp)
        assert_abs_diff_eq!(r.output[999], kp / (1.0 + kp), epsilon = 1e-3);
    }
}

#[test]
fn test_identical_inputs_give_bit_identical_outputs() {
    let grid = grid();
    let sp = step_up_then_down(&grid, 3.3);
    let p = params(2.7, 0.9, 0.35);

    let a = simulate(&sp, &p, &grid);
    let b = simulate(&sp, &p, &grid);

    let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
    assert_eq!(bits(&a.output), bits(&b.output));
    assert_eq!(bits(&a.control), bits(&b.control));
}

#[test]
fn test_lengths_match_time_grid() {
    for (t_end, dt) in [(10.0, 0.01), (1.0, 0.3), (0.01, 0.01), (2.5, 0.1)] {
        let grid = TimeGrid::new(t_end, dt).unwrap();
        let sp = unit_step(&grid);
        let r = simulate(&sp, &params(1.0, 0.5, 0.1), &grid);

        assert_eq!(sp.len(), grid.len());
        assert_eq!(r.output.len(), grid.len());
        assert_eq!(r.control.len(), grid.len());
    }
}

// ============================================================================
// REFERENCE SCENARIOS
// ============================================================================

#[test]
fn test_default_gains_converge_to_unit_setpoint() {
    let grid = grid();
    assert_eq!(grid.len(), 1000);

    let r = simulate(&vec![1.0; grid.len()], &params(1.0, 0.5, 0.1), &grid);

    assert_eq!(r.output[0], 0.0);
    assert!(
        (r.output[999] - 1.0).abs() < 0.05,
        "integral action should remove steady-state error, got {}",
        r.output[999]
    );
}

#[test]
fn test_first_control_sample_uses_zero_previous_error() {
    let grid = grid();
    let r = simulate(&unit_step(&grid), &params(1.0, 0.5, 0.1), &grid);

    // e = 1: Kp * 1 + Ki * 0.01 + Kd * (1 - 0) / 0.01
    assert_relative_eq!(r.control[1], 1.0 + 0.005 + 10.0, epsilon = 1e-12);
    assert_relative_eq!(r.output[1], 0.01 * r.control[1], epsilon = 1e-12);
}

#[test]
fn test_step_down_takes_effect_at_switch_sample() {
    let grid = grid();
    let p = params(1.0, 0.5, 0.1);

    let switched = step_up_then_down(&grid, 1.0);
    assert_eq!(switched[99], 2.0);
    assert_eq!(switched[100], 1.0);

    let held = simulate(&vec![2.0; grid.len()], &p, &grid);
    let at_100 = simulate(&switched, &p, &grid);
    let at_101 = simulate(&step_up_then_down(&grid, 1.01), &p, &grid);

    // Identical history up to the switch
    assert_eq!(&at_100.output[..100], &held.output[..100]);
    // Sample 100 already sees setpoint 1
    assert!(at_100.output[100] < held.output[100]);
    assert_eq!(at_101.output[100], held.output[100]);
    assert!(at_100.output[100] < at_100.output[99]);
}

#[test]
fn test_profile_sampling_matches_scenario_builder() {
    let grid = grid();
    let profile = SetpointProfile::new(0.0).step_at(0.0, 2.0).step_at(4.0, 1.0);
    assert_eq!(profile.sample(&grid), step_up_then_down(&grid, 4.0));
}

// ============================================================================
// VALIDATION
// ============================================================================

#[test]
fn test_try_simulate_fails_fast_on_bad_input() {
    let grid = grid();
    let sp = unit_step(&grid);

    assert_eq!(
        try_simulate(&sp[..500], &params(1.0, 0.5, 0.1), &grid),
        Err(SimulationError::LengthMismatch { setpoint: 500, grid: 1000 })
    );
    assert_eq!(
        try_simulate(&sp, &SimulationParams::new(PidGains::new(1.0, 0.5, 0.1), 0.0), &grid),
        Err(SimulationError::NonPositiveTimeConstant { tau: 0.0 })
    );
    assert_eq!(
        try_simulate(&sp, &params(-1.0, 0.5, 0.1), &grid),
        Err(SimulationError::NegativeGain { name: "Kp", value: -1.0 })
    );
}

// ============================================================================
// SHELL ROUND TRIP
// ============================================================================

#[test]
fn test_commands_drive_session_recompute() {
    let mut session = Session::new(ShellConfig::default().with_fullscreen(false)).unwrap();
    let initial = session.frame().unwrap();

    let Command::Set(slider, value) = Command::parse("kp 4").unwrap() else {
        panic!("expected a slider command");
    };
    assert_eq!(slider, Slider::Kp);

    let frame = session.apply(slider, value).unwrap();
    assert_eq!(frame.params.gains.kp, 4.0);
    assert_ne!(frame.unit_step.response.output, initial.unit_step.response.output);
    // Control is computed for every scenario even though the chart skips it
    assert_eq!(frame.step_down.response.control.len(), session.grid().len());
    assert_eq!(session.config().canvas_size(), (1280, 720));
}

#[test]
fn test_switch_slider_moves_step_down() {
    let mut session = Session::new(ShellConfig::default()).unwrap();
    let frame = session.apply(Slider::TSwitch, 5.0).unwrap();

    assert_eq!(frame.step_down.setpoint[499], 2.0);
    assert_eq!(frame.step_down.setpoint[500], 1.0);
    // Unit-step scenario does not depend on the switch time
    let reference = simulate(&unit_step(session.grid()), &params(1.0, 0.5, 0.1), session.grid());
    assert_eq!(frame.unit_step.response, reference);
}
