use crate::core::calculator::gaps::GapStatus;
use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";
const ICON_CAR: &str = "🚗";

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_BLUE, BOLD, ICON_INFO, RESET, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_GREEN, BOLD, ICON_OK, RESET, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}{}{} {}{}", FG_YELLOW, BOLD, ICON_WARN, RESET, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg);
}

/// Formatted section header
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}

/// Print a travel verdict with the icon and color of its status.
pub fn gap_verdict<T: fmt::Display>(status: GapStatus, msg: T) {
    match status {
        GapStatus::Ok => success(msg),
        GapStatus::Warning => warning(msg),
        GapStatus::Conflict => println!("{}{}{} {}{}", FG_RED, BOLD, ICON_ERR, RESET, msg),
    }
}

/// Separator row drawn between two lessons in listings.
pub fn travel_separator<T: fmt::Display>(color: &str, msg: T) {
    println!("   {} {}{}{}", ICON_CAR, color, msg, RESET);
}
