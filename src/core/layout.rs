//! Timeline layout: maps duty-status intervals onto a normalized 0–100%
//! horizontal axis representing one 24-hour reporting day.
//!
//! The output feeds the log sheet renderer, which scales the percentages
//! onto a fixed-width character grid, and the export writers.

use crate::errors::{AppError, AppResult};
use crate::models::DutyInterval;
use chrono::{NaiveDate, NaiveDateTime, Timelike};

pub const MINUTES_PER_DAY: f64 = 24.0 * 60.0;

/// A duty interval annotated with its horizontal placement on the
/// 24-hour axis. Ephemeral: recomputed on every render pass.
#[derive(Debug, Clone)]
pub struct PositionedInterval {
    pub interval: DutyInterval,
    /// Percentage (0–100) of the day width at which the interval begins.
    pub left: f64,
    /// Percentage (0–100) of the day width the interval spans.
    pub width: f64,
}

impl PositionedInterval {
    pub fn duration_minutes(&self) -> f64 {
        self.width / 100.0 * MINUTES_PER_DAY
    }
}

/// Positioned intervals partitioned into the four fixed status rows,
/// plus whatever carried an unrecognized label.
#[derive(Debug, Default, Clone)]
pub struct DayRows {
    pub rows: [Vec<PositionedInterval>; 4], // OFF, SB, DR, ON
    pub unrecognized: Vec<PositionedInterval>,
}

impl DayRows {
    /// Total minutes spent in the row at `index`.
    pub fn row_minutes(&self, index: usize) -> f64 {
        self.rows[index].iter().map(|p| p.duration_minutes()).sum()
    }
}

/// Minutes elapsed since the timestamp's own midnight, with fractional
/// seconds kept as fractional minutes for sub-minute precision.
pub fn minutes_from_midnight(ts: NaiveDateTime) -> f64 {
    let seconds = ts.second() as f64 + ts.nanosecond() as f64 / 1_000_000_000.0;
    ts.hour() as f64 * 60.0 + ts.minute() as f64 + seconds / 60.0
}

/// Position one interval on the reporting day `day`.
///
/// Placement uses time-of-day only; an end time-of-day numerically earlier
/// than the start is treated as wrapping forward through midnight exactly
/// once. The full timestamps are still checked so that reversed or
/// multi-day intervals fail instead of producing a nonsense bar:
/// - the interval must start on `day`;
/// - `end_time` must not precede `start_time`;
/// - the interval must span strictly less than 24 hours.
pub fn position_interval(day: NaiveDate, interval: &DutyInterval) -> AppResult<PositionedInterval> {
    if interval.start_time.date() != day {
        return Err(AppError::IntervalOutsideDay {
            day: day.to_string(),
            interval: interval.to_string(),
        });
    }

    let span = interval.end_time - interval.start_time;
    if span < chrono::Duration::zero() {
        return Err(AppError::NegativeDuration(interval.to_string()));
    }
    if span >= chrono::Duration::days(1) {
        return Err(AppError::MultiDayInterval(interval.to_string()));
    }

    let start_minutes = minutes_from_midnight(interval.start_time);
    let end_minutes = minutes_from_midnight(interval.end_time);

    let mut duration_minutes = end_minutes - start_minutes;
    if duration_minutes < 0.0 {
        // Single wrap through 24:00.
        duration_minutes += MINUTES_PER_DAY;
    }

    Ok(PositionedInterval {
        interval: interval.clone(),
        left: start_minutes / MINUTES_PER_DAY * 100.0,
        width: duration_minutes / MINUTES_PER_DAY * 100.0,
    })
}

/// Position a whole day's log. Order and length of the output match the
/// input; an empty log gives an empty result (caller shows "no data").
///
/// This is the strict variant: any invalid interval fails the whole day.
/// Callers wanting the recoverable behavior call [`position_interval`]
/// per entry and skip failures.
pub fn layout_day(day: NaiveDate, intervals: &[DutyInterval]) -> AppResult<Vec<PositionedInterval>> {
    intervals
        .iter()
        .map(|iv| position_interval(day, iv))
        .collect()
}

/// Partition positioned intervals into the four status rows, preserving
/// relative order within each row. Unrecognized labels go to their own
/// bucket so they stay visible.
pub fn group_by_status(positioned: Vec<PositionedInterval>) -> DayRows {
    let mut rows = DayRows::default();
    for p in positioned {
        match p.interval.status.row_index() {
            Some(i) => rows.rows[i].push(p),
            None => rows.unrecognized.push(p),
        }
    }
    rows
}
