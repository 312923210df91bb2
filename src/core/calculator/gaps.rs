//! Module responsible for judging whether the gap between two lessons is
//! enough to drive from one meeting point to the next.

use serde::Serialize;
use std::fmt;

/// Minimum slack (minutes) above the travel estimate for a gap to be OK.
pub const OK_MARGIN_MINUTES: i64 = 5;

/// Severity of a gap, ordered from harmless to infeasible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum GapStatus {
    Ok,
    Warning,
    Conflict,
}

impl GapStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GapStatus::Ok => "ok",
            GapStatus::Warning => "warning",
            GapStatus::Conflict => "conflict",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            GapStatus::Ok => "OK",
            GapStatus::Warning => "TIGHT",
            GapStatus::Conflict => "CONFLICT",
        }
    }
}

impl fmt::Display for GapStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Result of comparing an available gap with a travel estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GapAssessment {
    /// `gap - travel`; negative means the next lesson cannot be reached.
    pub margin_minutes: i64,
    pub status: GapStatus,
}

impl GapAssessment {
    pub fn is_ok(&self) -> bool {
        self.status == GapStatus::Ok
    }
}

/// A gap together with the travel estimate it was judged against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GapCheck {
    pub gap_minutes: i64,
    pub travel_minutes: i64,
    /// Straight-line distance, when both meeting points are known.
    pub distance_km: Option<f64>,
    pub assessment: GapAssessment,
}

impl GapCheck {
    pub fn status(&self) -> GapStatus {
        self.assessment.status
    }

    pub fn margin_minutes(&self) -> i64 {
        self.assessment.margin_minutes
    }
}

/// Classify with the default 5-minute cushion.
///
/// `margin >= 5` → OK, `0 <= margin < 5` → WARNING, `margin < 0` → CONFLICT.
pub fn classify_gap(gap_minutes: i64, travel_minutes: i64) -> GapAssessment {
    classify_gap_with_margin(gap_minutes, travel_minutes, OK_MARGIN_MINUTES)
}

/// Classify with a custom OK cushion. Each band is inclusive on its lower end.
pub fn classify_gap_with_margin(
    gap_minutes: i64,
    travel_minutes: i64,
    ok_margin_minutes: i64,
) -> GapAssessment {
    let margin = gap_minutes.saturating_sub(travel_minutes);

    let status = if margin >= ok_margin_minutes {
        GapStatus::Ok
    } else if margin >= 0 {
        GapStatus::Warning
    } else {
        GapStatus::Conflict
    };

    GapAssessment {
        margin_minutes: margin,
        status,
    }
}
