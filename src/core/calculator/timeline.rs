use crate::core::calculator::gaps::{GapCheck, GapStatus};
use crate::core::calculator::travel::TravelPolicy;
use crate::models::lesson::Lesson;
use chrono::NaiveDateTime;
use serde::Serialize;

/// The drive between two adjacent lessons.
#[derive(Debug, Clone, Serialize)]
pub struct TravelLeg {
    /// Position of the departing lesson in `Timeline::lessons`.
    pub from_index: usize,
    pub from_id: i64,
    pub to_id: i64,
    pub from_student: String,
    pub to_student: String,
    pub from_end: NaiveDateTime,
    pub to_start: NaiveDateTime,
    pub check: GapCheck,
}

impl TravelLeg {
    pub fn status(&self) -> GapStatus {
        self.check.status()
    }
}

#[derive(Debug, Default, Clone)]
pub struct Timeline {
    /// Active lessons, chronologically sorted.
    pub lessons: Vec<Lesson>,
    /// One leg per adjacent pair whose gap falls in the scan window.
    pub legs: Vec<TravelLeg>,
    pub total_travel_minutes: i64,
}

impl Timeline {
    pub fn count(&self, status: GapStatus) -> usize {
        self.legs.iter().filter(|l| l.status() == status).count()
    }

    pub fn has_issues(&self) -> bool {
        self.legs.iter().any(|l| l.status() != GapStatus::Ok)
    }

    /// Worst status over all legs (OK for an empty timeline).
    pub fn worst_status(&self) -> GapStatus {
        self.legs
            .iter()
            .map(TravelLeg::status)
            .max()
            .unwrap_or(GapStatus::Ok)
    }

    /// The leg departing from the lesson at `index`, if it was checked.
    pub fn leg_after(&self, index: usize) -> Option<&TravelLeg> {
        self.legs.iter().find(|l| l.from_index == index)
    }
}

/// Minutes between the end of `prev` and the start of `next` (may be negative
/// when the two overlap).
pub fn gap_minutes(prev: &Lesson, next: &Lesson) -> i64 {
    (next.start - prev.end).num_minutes()
}

/// Evaluate the drive from `prev` to `next`, regardless of the scan window.
pub fn check_leg(prev: &Lesson, next: &Lesson, policy: &TravelPolicy) -> GapCheck {
    let from = prev.meeting_point.as_ref();
    let to = next.meeting_point.as_ref();

    let gap = gap_minutes(prev, next);
    let travel = policy.estimate_travel_minutes(from, to);
    let distance_km = match (from, to) {
        (Some(a), Some(b)) => Some(a.distance_km(b)),
        _ => None,
    };

    GapCheck {
        gap_minutes: gap,
        travel_minutes: travel,
        distance_km,
        assessment: policy.classify_gap(gap, travel),
    }
}

/// Scan a schedule: sort the active lessons and assess every adjacent pair
/// whose gap is between 0 and `max_scan_gap_minutes` (inclusive).
/// The input slice is never modified.
pub fn build_timeline(lessons: &[Lesson], policy: &TravelPolicy) -> Timeline {
    // -----------------------------
    // Active lessons, chronologically
    // -----------------------------
    let mut sorted: Vec<Lesson> = lessons.iter().filter(|l| l.is_active()).cloned().collect();
    if sorted.is_empty() {
        return Timeline::default();
    }
    sorted.sort_by_key(|l| (l.start, l.end));

    // -----------------------------
    // Legs between neighbours
    // -----------------------------
    let mut legs = Vec::new();
    let mut total = 0;

    for (i, w) in sorted.windows(2).enumerate() {
        let (curr, next) = (&w[0], &w[1]);

        if !policy.in_scan_window(gap_minutes(curr, next)) {
            continue;
        }

        let check = check_leg(curr, next, policy);
        total += check.travel_minutes;

        legs.push(TravelLeg {
            from_index: i,
            from_id: curr.id,
            to_id: next.id,
            from_student: curr.student.clone(),
            to_student: next.student.clone(),
            from_end: curr.end,
            to_start: next.start,
            check,
        });
    }

    Timeline {
        lessons: sorted,
        legs,
        total_travel_minutes: total,
    }
}
