//! Coordinate system of the 24-hour rendering grid.
//!
//! The horizontal axis is 24 equal hour cells; tick labels run 0..23 plus
//! a terminal "24". Gridline percentages here must match what the layout
//! engine produces so bars line up with hour boundaries.

pub const HOURS_PER_DAY: u32 = 24;

/// Horizontal position of the gridline for `hour` (0..=24), in percent.
pub fn gridline_percent(hour: u32) -> f64 {
    hour as f64 / HOURS_PER_DAY as f64 * 100.0
}

/// Tick labels 0..24 for the sheet header.
pub fn hour_labels() -> impl Iterator<Item = u32> {
    0..=HOURS_PER_DAY
}
