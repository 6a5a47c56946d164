use predicates::str::contains;
use std::fs;

mod common;
use common::{temp_out, tlg, write_fixture_trip};

#[test]
fn test_export_csv() {
    let fixture = write_fixture_trip("export_csv");
    let out = temp_out("export_csv", "csv");

    tlg()
        .args(["export", "--input", &fixture, "--format", "csv", "--file", &out])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    let mut lines = content.lines();

    assert_eq!(
        lines.next().unwrap(),
        "trip_id,day,status,start_time,end_time,left_pct,width_pct,duration_minutes,description"
    );
    assert!(content.contains("42,1,DR,2024-01-01T09:00:00"));
    assert!(content.contains("42,2,ON,2024-01-02T09:45:00"));
}

#[test]
fn test_export_csv_positions() {
    let fixture = write_fixture_trip("export_csv_positions");
    let out = temp_out("export_csv_positions", "csv");

    tlg()
        .args(["export", "--input", &fixture, "--format", "csv", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported csv");

    // first OFF block: 00:00–08:00 → left 0%, width 33.3333%
    let first = content
        .lines()
        .find(|l| l.contains("2024-01-01T00:00:00"))
        .expect("first interval row");
    assert!(first.contains("0.0000,33.3333,480.00"));

    // wrapped block 20:30 → 00:00 next day: 210 minutes.
    // Anchor on the start_time column; the same timestamp also appears as
    // the end_time of the preceding driving row.
    let wrapped = content
        .lines()
        .find(|l| l.contains(",OFF,2024-01-01T20:30:00,"))
        .expect("wrapped interval row");
    assert!(wrapped.contains("210.00"));
}

#[test]
fn test_export_json() {
    let fixture = write_fixture_trip("export_json");
    let out = temp_out("export_json", "json");

    tlg()
        .args(["export", "--input", &fixture, "--format", "json", "--file", &out])
        .assert()
        .success();

    let content = fs::read_to_string(&out).expect("read exported json");
    let rows: serde_json::Value = serde_json::from_str(&content).expect("valid json");

    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 9); // 6 entries day 1 + 3 entries day 2
    assert_eq!(rows[0]["status"], "OFF");
    assert_eq!(rows[0]["trip_id"], 42);
    assert!(rows[0]["width_pct"].as_f64().unwrap() > 33.0);
}

#[test]
fn test_export_refuses_overwrite_without_force() {
    let fixture = write_fixture_trip("export_force");
    let out = temp_out("export_force", "csv");

    tlg()
        .args(["export", "--input", &fixture, "--format", "csv", "--file", &out])
        .assert()
        .success();

    tlg()
        .args(["export", "--input", &fixture, "--format", "csv", "--file", &out])
        .assert()
        .failure()
        .stderr(contains("already exists"));

    tlg()
        .args(["export", "--input", &fixture, "--format", "csv", "--file", &out, "--force"])
        .assert()
        .success();
}
