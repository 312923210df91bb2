//! Travel-time estimate between two meeting points.
//!
//! The estimate is an offline heuristic: straight-line distance driven at a
//! fixed urban speed, rounded up to scheduling granularity, plus a fixed
//! buffer for parking and walking to the meeting point. No routing data is
//! involved, so the value is identical for the same pair of points.

use crate::core::calculator::distance::distance_km;
use crate::core::calculator::gaps::{self, GapAssessment};
use crate::models::coordinate::GeoCoordinate;
use serde::{Deserialize, Serialize};

pub const URBAN_SPEED_KMH: f64 = 25.0;
pub const BUFFER_MINUTES: i64 = 5;
pub const DEFAULT_TRAVEL_MINUTES: i64 = 15;
pub const ROUNDING_STEP_MINUTES: i64 = 5;
/// Adjacent lessons further apart than this are not part of the same
/// working session and are not checked.
pub const MAX_SCAN_GAP_MINUTES: i64 = 240;

/// Tunable constants of the estimator and of the gap classifier.
///
/// `TravelPolicy::default()` reproduces the fixed product constants; the
/// configuration file may override any of them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TravelPolicy {
    pub urban_speed_kmh: f64,
    pub buffer_minutes: i64,
    pub default_travel_minutes: i64,
    pub rounding_step_minutes: i64,
    pub ok_margin_minutes: i64,
    pub max_scan_gap_minutes: i64,
}

impl Default for TravelPolicy {
    fn default() -> Self {
        Self {
            urban_speed_kmh: URBAN_SPEED_KMH,
            buffer_minutes: BUFFER_MINUTES,
            default_travel_minutes: DEFAULT_TRAVEL_MINUTES,
            rounding_step_minutes: ROUNDING_STEP_MINUTES,
            ok_margin_minutes: gaps::OK_MARGIN_MINUTES,
            max_scan_gap_minutes: MAX_SCAN_GAP_MINUTES,
        }
    }
}

impl TravelPolicy {
    /// Estimated door-to-door minutes between two meeting points.
    ///
    /// Falls back to `default_travel_minutes` when either point is unknown.
    /// Otherwise: `ceil(raw / step) * step + buffer`, with
    /// `raw = km / speed * 60`.
    pub fn estimate_travel_minutes(
        &self,
        from: Option<&GeoCoordinate>,
        to: Option<&GeoCoordinate>,
    ) -> i64 {
        let (Some(a), Some(b)) = (from, to) else {
            return self.default_travel_minutes;
        };

        // a zero or negative speed cannot produce a meaningful duration
        if self.urban_speed_kmh.partial_cmp(&0.0) != Some(std::cmp::Ordering::Greater) {
            return self.default_travel_minutes;
        }

        let raw_minutes = distance_km(a, b) / self.urban_speed_kmh * 60.0;
        self.round_up(raw_minutes) + self.buffer_minutes
    }

    /// Classify `gap_minutes` against `travel_minutes` using this policy's
    /// OK threshold.
    pub fn classify_gap(&self, gap_minutes: i64, travel_minutes: i64) -> GapAssessment {
        gaps::classify_gap_with_margin(gap_minutes, travel_minutes, self.ok_margin_minutes)
    }

    /// Whether a gap between adjacent lessons is inside the scan window
    /// `[0, max_scan_gap_minutes]`.
    pub fn in_scan_window(&self, gap_minutes: i64) -> bool {
        (0..=self.max_scan_gap_minutes).contains(&gap_minutes)
    }

    fn round_up(&self, raw_minutes: f64) -> i64 {
        let raw_minutes = raw_minutes.max(0.0);
        if self.rounding_step_minutes <= 0 {
            return raw_minutes.ceil() as i64;
        }
        let step = self.rounding_step_minutes as f64;
        (raw_minutes / step).ceil() as i64 * self.rounding_step_minutes
    }
}

/// Estimate with the default policy (25 km/h, 5-minute steps, 5-minute
/// buffer, 15 minutes when a point is missing).
pub fn estimate_travel_minutes(from: Option<&GeoCoordinate>, to: Option<&GeoCoordinate>) -> i64 {
    TravelPolicy::default().estimate_travel_minutes(from, to)
}
