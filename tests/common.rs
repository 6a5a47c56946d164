#![allow(dead_code)]
use assert_cmd::Command;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tlg() -> Command {
    Command::cargo_bin("triplogger").expect("binary built")
}

/// Create a unique output file path inside the system temp dir and remove
/// any leftover from a previous run
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplogger_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write the sample trip fixture to the temp dir and return its path.
/// Decimal fields are strings on purpose: that is how the API encodes them.
pub fn write_fixture_trip(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplogger_trip.json", name));
    fs::write(&path, SAMPLE_TRIP_JSON).expect("write fixture");
    path.to_string_lossy().to_string()
}

/// Same trip, but with an empty second day to exercise the "no data" path.
pub fn write_fixture_trip_empty_day(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_triplogger_trip_empty.json", name));
    let json = SAMPLE_TRIP_JSON.replace(SECOND_DAY_JSON, "[]");
    fs::write(&path, json).expect("write fixture");
    path.to_string_lossy().to_string()
}

pub const SECOND_DAY_JSON: &str = r#"[
      {"status": "OFF", "start_time": "2024-01-02T00:00:00", "end_time": "2024-01-02T06:30:00", "description": "Required 10-hour off-duty reset"},
      {"status": "DR", "start_time": "2024-01-02T06:30:00", "end_time": "2024-01-02T09:45:00", "description": "Driving (3.25 hrs)"},
      {"status": "ON", "start_time": "2024-01-02T09:45:00", "end_time": "2024-01-02T10:45:00", "description": "Dropoff"}
    ]"#;

pub const SAMPLE_TRIP_JSON: &str = r#"{
  "id": 42,
  "current_location": "Chicago, IL",
  "pickup_location": "Chicago, IL",
  "dropoff_location": "Dallas, TX",
  "current_cycle_used_hrs": "12.50",
  "route_distance_miles": "967.30",
  "route_duration_hours": "14.25",
  "route_geojson": {
    "type": "LineString",
    "coordinates": [[-87.6298, 41.8781], [-94.5786, 39.0997], [-96.7970, 32.7767]]
  },
  "daily_logs": [
    [
      {"status": "OFF", "start_time": "2024-01-01T00:00:00", "end_time": "2024-01-01T08:00:00", "description": "Initial state before trip activities"},
      {"status": "ON", "start_time": "2024-01-01T08:00:00", "end_time": "2024-01-01T09:00:00", "description": "Pickup"},
      {"status": "DR", "start_time": "2024-01-01T09:00:00", "end_time": "2024-01-01T17:00:00", "description": "Driving (8.00 hrs)"},
      {"status": "OFF", "start_time": "2024-01-01T17:00:00", "end_time": "2024-01-01T17:30:00", "description": "Mandatory 30-min break"},
      {"status": "DR", "start_time": "2024-01-01T17:30:00", "end_time": "2024-01-01T20:30:00", "description": "Driving (3.00 hrs)"},
      {"status": "OFF", "start_time": "2024-01-01T20:30:00", "end_time": "2024-01-02T00:00:00", "description": "Off-duty at end of day (implicit boundary)"}
    ],
    [
      {"status": "OFF", "start_time": "2024-01-02T00:00:00", "end_time": "2024-01-02T06:30:00", "description": "Required 10-hour off-duty reset"},
      {"status": "DR", "start_time": "2024-01-02T06:30:00", "end_time": "2024-01-02T09:45:00", "description": "Driving (3.25 hrs)"},
      {"status": "ON", "start_time": "2024-01-02T09:45:00", "end_time": "2024-01-02T10:45:00", "description": "Dropoff"}
    ]
  ],
  "stops": [
    {"type": "Pickup", "time": "2024-01-01T08:00:00", "duration_hours": 1.0},
    {"type": "Mandatory 30-Min Break", "time": "2024-01-01T17:00:00", "duration_minutes": 30},
    {"type": "Dropoff", "time": "2024-01-02T09:45:00", "duration_hours": 1.0}
  ],
  "created_at": "2024-01-01T07:45:00.123456Z"
}"#;
