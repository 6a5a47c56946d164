//! Formatting utilities used for CLI outputs.

use super::colors::{GREEN, GREY, MAGENTA, RESET, YELLOW};

/// Full name and ANSI color for a duty status code.
/// Colors come from the same constants the sheet bars use, so the legend
/// and the tracks always match.
pub fn describe_status(code: &str) -> (String, &'static str) {
    match code {
        "OFF" => ("Off Duty".into(), GREY),
        "SB" => ("Sleeper Berth".into(), MAGENTA),
        "DR" => ("Driving".into(), GREEN),
        "ON" => ("On Duty (not driving)".into(), YELLOW),
        other => (other.to_string(), RESET),
    }
}
