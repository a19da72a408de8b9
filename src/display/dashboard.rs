//! Response chart: renders a `Frame` to SVG with plotters.
//!
//! Layout:
//! - **Chart:** both output curves over `[0, t_end] x [0, 2]` plus the dotted setpoint reference.
//! - **Status bar:** current gains, switch time and settling summary.
//!
//! Control sequences ride along in the frame but are not drawn.
//! Only `.svg` chart paths are accepted.
//! The file is written next to its final path and renamed, so a viewer never
//! picks up a half-written chart.

use std::{
    fs,
    path::{Path, PathBuf},
};

use log::info;
use plotters::{coord::Shift, prelude::*};

use crate::engine::TimeGrid;
use crate::shell::{error::ShellError, session::Frame};

pub const TITLE: &str = "PID controller response to setpoint steps";
pub const REFERENCE_LABEL: &str = "Setpoint 0→1";

const Y_RANGE: (f64, f64) = (0.0, 2.0);
const STATUS_BAR_PX: i32 = 50;

/// Dash pattern in samples: (drawn, skipped).
const DASH: (usize, usize) = (12, 8);
const DOT: (usize, usize) = (2, 6);

/// Renders `frame` and writes it to `path`. Returns the path written.
pub fn write_chart(
    frame: &Frame,
    grid: &TimeGrid,
    size: (u32, u32),
    path: &Path,
) -> Result<PathBuf, ShellError> {
    let is_svg = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("svg"));
    if !is_svg {
        return Err(ShellError::UnsupportedChartFormat { path: path.to_path_buf() });
    }

    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir)?;
    }

    let svg = render_svg(frame, grid, size)?;
    let tmp = path.with_extension("svg.tmp");
    fs::write(&tmp, svg)?;
    fs::rename(&tmp, path)?;

    info!("chart written to {:?}", path);
    Ok(path.to_path_buf())
}

/// Renders `frame` into an SVG document held in memory.
pub fn render_svg(frame: &Frame, grid: &TimeGrid, size: (u32, u32)) -> Result<String, ShellError> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        draw_frame(&root, frame, grid).map_err(|e| ShellError::Render(e.to_string()))?;
        root.present().map_err(|e| ShellError::Render(e.to_string()))?;
    }
    Ok(append_response_comment(svg, frame))
}

fn draw_frame<DB: DrawingBackend>(
    root: &DrawingArea<DB, Shift>,
    frame: &Frame,
    grid: &TimeGrid,
) -> Result<(), DrawingAreaErrorKind<DB::ErrorType>> {
    root.fill(&WHITE)?;

    let height = root.dim_in_pixel().1 as i32;
    let (chart_area, status_area) = root.split_vertically(height - STATUS_BAR_PX);

    let mut chart = ChartBuilder::on(&chart_area)
        .caption(TITLE, ("sans-serif", 28))
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..grid.t_end(), Y_RANGE.0..Y_RANGE.1)?;

    chart
        .configure_mesh()
        .x_desc("Time [s]")
        .y_desc("Value")
        .draw()?;

    // Step 0→1: solid
    let solid = BLUE.stroke_width(2);
    chart
        .draw_series(LineSeries::new(
            points(grid, &frame.unit_step.response.output),
            solid,
        ))?
        .label(frame.unit_step.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], solid));

    // Step 0→2→1: dashed
    let dashed = RED.stroke_width(2);
    chart
        .draw_series(broken_line(
            points(grid, &frame.step_down.response.output),
            DASH,
            dashed,
        ))?
        .label(frame.step_down.label)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 8, y)], dashed));

    // Reference: black dotted
    let dotted = BLACK.stroke_width(1);
    chart
        .draw_series(broken_line(points(grid, &frame.reference), DOT, dotted))?
        .label(REFERENCE_LABEL)
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 3, y)], dotted));

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()?;

    let status_font = ("sans-serif", 18).into_font().color(&BLACK);
    status_area.draw(&Text::new(status_line(frame), (40, 15), status_font))?;

    Ok(())
}

fn points<'a>(grid: &'a TimeGrid, values: &'a [f64]) -> impl Iterator<Item = (f64, f64)> + 'a {
    grid.times().zip(values.iter().copied())
}

/// Splits a curve into short segments separated by gaps of `pattern.1` samples.
fn broken_line(
    points: impl Iterator<Item = (f64, f64)>,
    pattern: (usize, usize),
    style: ShapeStyle,
) -> Vec<PathElement<(f64, f64)>> {
    let (on, off) = pattern;
    let all: Vec<(f64, f64)> = points.collect();
    all.chunks(on + off)
        .map(|chunk| PathElement::new(chunk[..on.min(chunk.len())].to_vec(), style))
        .collect()
}

fn status_line(frame: &Frame) -> String {
    let p = frame.params;
    let settle = |t: Option<f64>| t.map_or_else(|| "-".to_string(), |t| format!("{:.2} s", t));
    format!(
        "Kp = {:.2} | Ki = {:.2} | Kd = {:.2} | switch = {:.2} s | settling: {} / {}",
        p.gains.kp,
        p.gains.ki,
        p.gains.kd,
        p.t_switch,
        settle(frame.unit_step.stats.as_ref().and_then(|s| s.settling_time)),
        settle(frame.step_down.stats.as_ref().and_then(|s| s.settling_time)),
    )
}

/// Embeds the parameters and response summary as a comment before `</svg>`.
fn append_response_comment(svg: String, frame: &Frame) -> String {
    let p = frame.params;
    let mut comment = format!(
        "<!-- RESPONSE: kp={} ki={} kd={} t_switch={}",
        p.gains.kp, p.gains.ki, p.gains.kd, p.t_switch
    );
    for run in frame.runs() {
        if let Some(stats) = &run.stats {
            comment.push_str(&format!(
                " | {}: final={:.4} min={:.4} mean={:.4} overshoot={:.4}",
                run.label, stats.final_value, stats.min, stats.mean, stats.overshoot
            ));
        }
    }
    comment.push_str(" -->");

    match svg.rfind("</svg>") {
        Some(pos) => {
            let mut out = svg;
            out.insert_str(pos, &format!("{}\n", comment));
            out
        }
        None => svg,
    }
}
