//! Formatting utilities used for CLI and export outputs.

use crate::models::coordinate::GeoCoordinate;

/// Travel time for display: `"45 min"`, `"1h"`, `"1h 10 min"`.
pub fn format_travel_time(minutes: i64) -> String {
    if minutes < 60 {
        return format!("{} min", minutes);
    }
    let h = minutes / 60;
    let m = minutes % 60;
    if m == 0 {
        format!("{}h", h)
    } else {
        format!("{}h {} min", h, m)
    }
}

/// Distance for display: rounded metres below 1 km (`"850 m"`), otherwise
/// kilometres with one decimal (`"2.3 km"`).
pub fn format_km(km: f64) -> String {
    if km < 1.0 {
        format!("{} m", (km * 1000.0).round() as i64)
    } else {
        format!("{:.1} km", km)
    }
}

/// Distance between two meeting points, or an empty string when either is
/// missing.
pub fn format_distance(from: Option<&GeoCoordinate>, to: Option<&GeoCoordinate>) -> String {
    match (from, to) {
        (Some(a), Some(b)) => format_km(a.distance_km(b)),
        _ => String::new(),
    }
}

/// Signed margin for display: `"+12 min"`, `"0 min"`, `"-7 min"`.
pub fn format_margin(margin: i64) -> String {
    if margin > 0 {
        format!("+{} min", margin)
    } else {
        format!("{} min", margin)
    }
}
