use crate::core::layout;
use crate::models::Trip;
use crate::ui::messages::warning;
use serde::Serialize;

/// Flat per-interval row for export: the original log fields plus the
/// derived timeline placement.
#[derive(Serialize, Clone, Debug)]
pub struct LogExport {
    pub trip_id: i64,
    pub day: usize,
    pub status: String,
    pub start_time: String,
    pub end_time: String,
    pub left_pct: f64,
    pub width_pct: f64,
    pub duration_minutes: f64,
    pub description: String,
}

pub(crate) fn get_headers() -> Vec<&'static str> {
    vec![
        "trip_id",
        "day",
        "status",
        "start_time",
        "end_time",
        "left_pct",
        "width_pct",
        "duration_minutes",
        "description",
    ]
}

/// Flatten a trip's daily logs into export rows, positioning every
/// interval. Invalid intervals are skipped with a warning, same policy as
/// the renderer.
pub fn trip_to_rows(trip: &Trip) -> Vec<LogExport> {
    let mut rows = Vec::new();

    for (day_index, day_log) in trip.days().iter().enumerate() {
        let Some(day) = day_log.first().map(|iv| iv.reporting_day()) else {
            continue;
        };

        for interval in day_log {
            match layout::position_interval(day, interval) {
                Ok(p) => rows.push(LogExport {
                    trip_id: trip.id,
                    day: day_index + 1,
                    status: p.interval.status.code().to_string(),
                    start_time: p.interval.start_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    end_time: p.interval.end_time.format("%Y-%m-%dT%H:%M:%S").to_string(),
                    left_pct: p.left,
                    width_pct: p.width,
                    duration_minutes: p.duration_minutes(),
                    description: p.interval.description.clone().unwrap_or_default(),
                }),
                Err(e) => warning(format!("skipping interval: {}", e)),
            }
        }
    }

    rows
}
