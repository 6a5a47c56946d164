use crate::api::TripClient;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Trip;
use crate::render::render_sheet;
use crate::models::duty_status::ROW_ORDER;
use crate::ui::messages::header;
use crate::utils::colors::colorize;
use crate::utils::formatting::describe_status;
use crate::utils::time::{hours2readable, parse_timestamp};
use std::fs;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Show { trip_id, file, day } = cmd {
        let trip = load_trip(*trip_id, file.as_deref(), cfg)?;
        print_trip(&trip, cfg.use_color, *day);
    }
    Ok(())
}

/// Resolve the trip source: a local JSON file when `--file` was given,
/// the remote API otherwise.
pub(crate) fn load_trip(trip_id: Option<i64>, file: Option<&str>, cfg: &Config) -> AppResult<Trip> {
    match (trip_id, file) {
        (_, Some(path)) => {
            let content = fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        (Some(id), None) => {
            let client = TripClient::new(&cfg.api_base_url, cfg.timeout_secs)?;
            client.get_trip(id)
        }
        (None, None) => Err(AppError::Other(
            "a trip id or --file is required".to_string(),
        )),
    }
}

/// Full trip printout: route summary, ELD daily log sheets and stops.
/// `day_filter` is 1-based; None shows every day.
pub(crate) fn print_trip(trip: &Trip, use_color: bool, day_filter: Option<usize>) {
    header(format!(
        "Trip {}: {} → {}",
        trip.id, trip.pickup_location, trip.dropoff_location
    ));

    match trip.route_distance_miles {
        Some(miles) => println!("Distance: {:.2} miles", miles),
        None => println!("Distance: N/A"),
    }
    match trip.route_duration_hours {
        Some(hours) => println!("Duration: {}", hours2readable(hours)),
        None => println!("Duration: N/A"),
    }
    println!("Cycle used: {}", hours2readable(trip.current_cycle_used_hrs));

    print_route(trip);
    print_logs(trip, use_color, day_filter);
    print_stops(trip);
}

fn print_route(trip: &Trip) {
    let Some(route) = &trip.route_geojson else {
        println!("\nNo route geometry available.");
        return;
    };

    println!("\nRoute ({} points):", route.point_count());
    if let (Some((slat, slon)), Some((elat, elon))) = (route.start_point(), route.end_point()) {
        println!("  pickup  at {:.4}, {:.4}", slat, slon);
        println!("  dropoff at {:.4}, {:.4}", elat, elon);
    }
    if let Some(((south, west), (north, east))) = route.bounding_box() {
        println!(
            "  bounds  {:.4}, {:.4} → {:.4}, {:.4}",
            south, west, north, east
        );
    }
}

fn print_logs(trip: &Trip, use_color: bool, day_filter: Option<usize>) {
    println!("\nELD Daily Logs");

    let days = trip.days();
    if days.is_empty() {
        println!("No ELD log data available for this trip.");
        return;
    }

    let legend: Vec<String> = ROW_ORDER
        .iter()
        .map(|code| {
            let (name, color) = describe_status(code);
            format!("{} = {}", colorize(code, color, use_color), name)
        })
        .collect();
    println!("{}", legend.join("  |  "));

    for (index, day_log) in days.iter().enumerate() {
        let day_number = index + 1;
        if let Some(wanted) = day_filter {
            if wanted != day_number {
                continue;
            }
        }

        match day_log.first() {
            Some(first) => {
                let date = first.reporting_day();
                println!("\nDay {} ({})", day_number, date);
                print!("{}", render_sheet(date, day_log, use_color));
            }
            None => {
                println!("\nDay {}", day_number);
                println!("No log data for this day.");
            }
        }
    }
}

fn print_stops(trip: &Trip) {
    println!("\nPlanned Stops");

    let stops = trip.stop_list();
    if stops.is_empty() {
        println!("No planned stops.");
        return;
    }

    for stop in stops {
        let desc = stop
            .description
            .as_deref()
            .map(|d| format!(" ({})", d))
            .unwrap_or_default();
        let when = parse_timestamp(&stop.time)
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| stop.time.clone());
        println!(
            "- {}: {} — {}{}",
            stop.kind,
            when,
            hours2readable(stop.duration_hrs()),
            desc
        );
    }
}
