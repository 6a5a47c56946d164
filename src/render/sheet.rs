//! Terminal rendering of one ELD daily log sheet.
//!
//! The sheet is a 4-row grid (OFF/SB/DR/ON) over a 24-hour track. Each
//! track cell covers 15 minutes; bars are placed by scaling the layout
//! engine's left/width percentages onto the track, so they line up with
//! the hour gridlines.

use crate::core::grid::{self, HOURS_PER_DAY};
use crate::core::layout::{self, DayRows, PositionedInterval};
use crate::models::duty_status::ROW_ORDER;
use crate::models::DutyInterval;
use crate::utils::colors::{color_for_row, colorize};
use crate::utils::time::mins2readable;
use chrono::NaiveDate;

pub const CELLS_PER_HOUR: usize = 4; // 15-minute resolution
pub const TRACK_CELLS: usize = HOURS_PER_DAY as usize * CELLS_PER_HOUR;

const LABEL_WIDTH: usize = 4;
const BAR: char = '█';
const GRIDLINE: char = '·';

/// Render one day's log sheet to a string.
///
/// Empty input renders the "no data" message. Intervals that fail strict
/// positioning are skipped and reported at the bottom of the sheet, so a
/// single bad entry never kills the rendering pass.
pub fn render_sheet(day: NaiveDate, intervals: &[DutyInterval], use_color: bool) -> String {
    if intervals.is_empty() {
        return "No log data for this day.\n".to_string();
    }

    let mut skipped: Vec<String> = Vec::new();
    let mut positioned: Vec<PositionedInterval> = Vec::new();

    for interval in intervals {
        match layout::position_interval(day, interval) {
            Ok(p) => positioned.push(p),
            Err(e) => skipped.push(e.to_string()),
        }
    }

    let rows = layout::group_by_status(positioned);

    let mut out = String::new();
    out.push_str(&hour_header());
    out.push('\n');

    for (i, label) in ROW_ORDER.iter().enumerate() {
        out.push_str(&render_row(label, i, &rows, use_color));
        out.push('\n');
    }

    if !rows.unrecognized.is_empty() {
        let labels: Vec<&str> = rows
            .unrecognized
            .iter()
            .map(|p| p.interval.status.code())
            .collect();
        out.push_str(&format!(
            "! {} entries with unrecognized status not drawn: {}\n",
            rows.unrecognized.len(),
            labels.join(", ")
        ));
    }

    for msg in &skipped {
        out.push_str(&format!("! skipped: {}\n", msg));
    }

    out
}

/// Tick labels every 2 hours plus the terminal "24", aligned with the
/// start of each hour cell.
fn hour_header() -> String {
    let mut header = " ".repeat(LABEL_WIDTH + 1);
    for hour in grid::hour_labels().step_by(2) {
        if hour == HOURS_PER_DAY {
            header.push_str("24");
        } else {
            header.push_str(&format!("{:<width$}", hour, width = CELLS_PER_HOUR * 2));
        }
    }
    header
}

fn render_row(label: &str, row_index: usize, rows: &DayRows, use_color: bool) -> String {
    let mut track = vec![' '; TRACK_CELLS];

    for hour in grid::hour_labels().take(HOURS_PER_DAY as usize) {
        let cell = (grid::gridline_percent(hour) / 100.0 * TRACK_CELLS as f64) as usize;
        track[cell] = GRIDLINE;
    }

    for p in &rows.rows[row_index] {
        let start_cell = (p.left / 100.0 * TRACK_CELLS as f64).round() as usize;
        let mut width_cells = (p.width / 100.0 * TRACK_CELLS as f64).round() as usize;
        if p.width > 0.0 && width_cells == 0 {
            width_cells = 1; // short intervals still get a visible mark
        }
        for k in 0..width_cells {
            // wrap past midnight continues at the left edge
            track[(start_cell + k) % TRACK_CELLS] = BAR;
        }
    }

    let total = mins2readable(rows.row_minutes(row_index));

    format!(
        "{:<width$}|{}| {}",
        label,
        paint_bars(&track, color_for_row(row_index), use_color),
        total,
        width = LABEL_WIDTH,
    )
}

/// Wrap each contiguous run of bar cells in the row color.
fn paint_bars(track: &[char], color: &str, use_color: bool) -> String {
    let mut out = String::new();
    let mut run = String::new();

    for &c in track {
        if c == BAR {
            run.push(c);
        } else {
            if !run.is_empty() {
                out.push_str(&colorize(&run, color, use_color));
                run.clear();
            }
            out.push(c);
        }
    }
    if !run.is_empty() {
        out.push_str(&colorize(&run, color, use_color));
    }

    out
}
