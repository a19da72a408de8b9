pub mod dashboard;

pub use dashboard::{render_svg, write_chart};
