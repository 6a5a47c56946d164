use super::model::LogExport;
use crate::errors::AppResult;
use std::path::Path;

/// Write positioned log rows as pretty-printed JSON.
pub fn write_json(path: &Path, rows: &[LogExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
