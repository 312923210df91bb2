/// ANSI color helper utilities for terminal output.
use crate::core::calculator::gaps::GapStatus;

pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";
pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";
pub const YELLOW: &str = "\x1b[33m";

/// Badge color for a gap:
/// OK → green, TIGHT → yellow, CONFLICT → red
pub fn color_for_status(status: GapStatus) -> &'static str {
    match status {
        GapStatus::Ok => GREEN,
        GapStatus::Warning => YELLOW,
        GapStatus::Conflict => RED,
    }
}

pub fn colorize_status(status: GapStatus) -> String {
    format!("{}{}{}", color_for_status(status), status.label(), RESET)
}

/// Grey out empty values ("" or "-").
pub fn colorize_optional(value: &str) -> String {
    if value.trim().is_empty() || value.trim() == "-" {
        format!("{GREY}{value}{RESET}")
    } else {
        value.to_string()
    }
}
