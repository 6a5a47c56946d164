use crate::api::TripClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::models::TripRequest;
use crate::ui::messages::{info, success};

/// Submit a new trip to the planning API, then show the planned result
/// the same way `show` would.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Plan {
        current_location,
        pickup_location,
        dropoff_location,
        cycle_used_hrs,
    } = cmd
    {
        let request = TripRequest {
            current_location: current_location.clone(),
            pickup_location: pickup_location.clone(),
            dropoff_location: dropoff_location.clone(),
            current_cycle_used_hrs: *cycle_used_hrs,
        };

        info("Submitting trip…");

        let client = TripClient::new(&cfg.api_base_url, cfg.timeout_secs)?;
        let trip = client.create_trip(&request)?;

        success(format!("Trip created with ID {}", trip.id));

        super::show::print_trip(&trip, cfg.use_color, None);
    }

    Ok(())
}
