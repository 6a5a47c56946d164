use super::model::{get_headers, LogExport};
use crate::errors::AppResult;
use csv::Writer;
use std::path::Path;

/// Write positioned log rows as CSV.
pub fn write_csv(path: &Path, rows: &[LogExport]) -> AppResult<()> {
    let mut wtr = Writer::from_path(path)?;

    wtr.write_record(get_headers())?;

    for r in rows {
        wtr.write_record(&[
            r.trip_id.to_string(),
            r.day.to_string(),
            r.status.clone(),
            r.start_time.clone(),
            r.end_time.clone(),
            format!("{:.4}", r.left_pct),
            format!("{:.4}", r.width_pct),
            format!("{:.2}", r.duration_minutes),
            r.description.clone(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
