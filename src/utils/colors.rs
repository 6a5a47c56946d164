/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";
pub const MAGENTA: &str = "\x1b[35m";

/// Bar color per duty-status row:
/// OFF → grey, SB → magenta, DR → green, ON → yellow.
pub fn color_for_row(row_index: usize) -> &'static str {
    match row_index {
        0 => GREY,
        1 => MAGENTA,
        2 => GREEN,
        3 => YELLOW,
        _ => RESET,
    }
}

/// Wrap `s` in `color`..RESET when coloring is enabled, pass through
/// otherwise.
pub fn colorize(s: &str, color: &str, use_color: bool) -> String {
    if use_color {
        format!("{color}{s}{RESET}")
    } else {
        s.to_string()
    }
}
