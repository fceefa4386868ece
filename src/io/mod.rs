//! Input/output for the textual slider line format.

mod beatmap;

pub use beatmap::{format_slider_line, parse_slider_line};
