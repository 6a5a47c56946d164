use crate::api::TripClient;
use crate::config::Config;
use crate::errors::AppResult;
use crate::utils::table::{Column, Table};
use crate::utils::time::hours2readable;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let client = TripClient::new(&cfg.api_base_url, cfg.timeout_secs)?;
    let trips = client.list_trips()?;

    if trips.is_empty() {
        println!("No trips recorded yet. Submit a new trip to see it here!");
        return Ok(());
    }

    let mut table = Table::new(vec![
        Column::new("ID", 6),
        Column::new("From", 24),
        Column::new("To", 24),
        Column::new("Cycle Used", 11),
        Column::new("Created", 19),
    ]);

    for trip in &trips {
        table.add_row(vec![
            trip.id.to_string(),
            trip.pickup_location.clone(),
            trip.dropoff_location.clone(),
            hours2readable(trip.current_cycle_used_hrs),
            trip.created_at
                .as_deref()
                .map(|c| c.chars().take(19).collect::<String>())
                .unwrap_or_default(),
        ]);
    }

    print!("{}", table.render());
    println!("{} trip(s).", trips.len());

    Ok(())
}
