use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{
    ensure_writable, notify_export_success, trip_to_rows, write_csv, write_json, ExportFormat,
};
use crate::ui::messages::warning;
use std::path::Path;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        trip_id,
        input,
        format,
        file,
        force,
    } = cmd
    {
        let trip = super::show::load_trip(*trip_id, input.as_deref(), cfg)?;

        let path = Path::new(file);
        ensure_writable(path, *force)?;

        let rows = trip_to_rows(&trip);
        if rows.is_empty() {
            warning("No log entries to export for this trip.");
            return Ok(());
        }

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), path);
    }

    Ok(())
}
