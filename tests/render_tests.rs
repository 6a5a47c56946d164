use chrono::NaiveDate;
use triplogger::models::duty_status::ROW_ORDER;
use triplogger::models::{DutyInterval, DutyStatus};
use triplogger::render::render_sheet;
use triplogger::utils::colors::color_for_row;
use triplogger::utils::formatting::describe_status;

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

fn interval(status: &str, start: &str, end: &str) -> DutyInterval {
    DutyInterval::new(
        DutyStatus::from_code(status),
        start.parse().unwrap(),
        end.parse().unwrap(),
        None,
    )
}

#[test]
fn test_empty_day_renders_no_data_message() {
    let sheet = render_sheet(day(), &[], false);
    assert_eq!(sheet, "No log data for this day.\n");
}

#[test]
fn test_sheet_has_four_rows_and_hour_header() {
    let intervals = vec![
        interval("OFF", "2024-01-01T00:00:00", "2024-01-01T08:00:00"),
        interval("DR", "2024-01-01T08:00:00", "2024-01-01T16:00:00"),
    ];

    let sheet = render_sheet(day(), &intervals, false);
    let lines: Vec<&str> = sheet.lines().collect();

    // header + OFF/SB/DR/ON tracks
    assert_eq!(lines.len(), 5);
    assert!(lines[0].contains("22"));
    assert!(lines[0].trim_end().ends_with("24"));
    assert!(lines[1].starts_with("OFF"));
    assert!(lines[2].starts_with("SB"));
    assert!(lines[3].starts_with("DR"));
    assert!(lines[4].starts_with("ON"));
}

#[test]
fn test_row_totals() {
    let intervals = vec![
        interval("DR", "2024-01-01T08:00:00", "2024-01-01T12:30:00"),
        interval("DR", "2024-01-01T13:00:00", "2024-01-01T15:00:00"),
    ];

    let sheet = render_sheet(day(), &intervals, false);
    let dr_line = sheet.lines().find(|l| l.starts_with("DR")).unwrap();

    // 4h30m + 2h00m of driving
    assert!(dr_line.ends_with("06h 30m"));
}

#[test]
fn test_bars_drawn_in_matching_row_only() {
    let intervals = vec![interval("SB", "2024-01-01T10:00:00", "2024-01-01T14:00:00")];

    let sheet = render_sheet(day(), &intervals, false);
    let sb_line = sheet.lines().find(|l| l.starts_with("SB")).unwrap();
    let dr_line = sheet.lines().find(|l| l.starts_with("DR")).unwrap();

    assert!(sb_line.contains('█'));
    assert!(!dr_line.contains('█'));
}

#[test]
fn test_unrecognized_status_reported_not_drawn() {
    let intervals = vec![
        interval("DR", "2024-01-01T08:00:00", "2024-01-01T10:00:00"),
        interval("PC", "2024-01-01T10:00:00", "2024-01-01T11:00:00"),
    ];

    let sheet = render_sheet(day(), &intervals, false);
    assert!(sheet.contains("unrecognized status"));
    assert!(sheet.contains("PC"));
}

#[test]
fn test_legend_colors_match_row_colors() {
    for (row_index, code) in ROW_ORDER.iter().enumerate() {
        let (_, legend_color) = describe_status(code);
        assert_eq!(legend_color, color_for_row(row_index));
    }
}

#[test]
fn test_invalid_interval_skipped_with_note() {
    let intervals = vec![
        interval("DR", "2024-01-01T08:00:00", "2024-01-01T10:00:00"),
        // ends two days later, rejected by strict positioning
        interval("OFF", "2024-01-01T10:00:00", "2024-01-03T10:00:00"),
    ];

    let sheet = render_sheet(day(), &intervals, false);
    assert!(sheet.contains("! skipped:"));
    // the valid interval still renders
    let dr_line = sheet.lines().find(|l| l.starts_with("DR")).unwrap();
    assert!(dr_line.contains('█'));
}
