//! Checking a new booking against an existing schedule.
//!
//! The candidate is compared with its closest predecessor (latest end at or
//! before the candidate's start) and its closest successor (earliest start at
//! or after the candidate's end). A side without a neighbour is unbounded and
//! never reports a problem.

use crate::core::calculator::gaps::{GapCheck, GapStatus};
use crate::core::calculator::timeline::check_leg;
use crate::core::calculator::travel::TravelPolicy;
use crate::models::lesson::Lesson;
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Default)]
pub struct CandidateAssessment {
    pub previous: Option<Lesson>,
    pub next: Option<Lesson>,
    /// Drive from `previous` to the candidate.
    pub before: Option<GapCheck>,
    /// Drive from the candidate to `next`.
    pub after: Option<GapCheck>,
    /// Active lessons whose time range intersects the candidate's.
    pub overlaps: Vec<Lesson>,
}

impl CandidateAssessment {
    pub fn before_status(&self) -> GapStatus {
        self.before.map(|c| c.status()).unwrap_or(GapStatus::Ok)
    }

    pub fn after_status(&self) -> GapStatus {
        self.after.map(|c| c.status()).unwrap_or(GapStatus::Ok)
    }

    pub fn has_issue(&self) -> bool {
        self.before_status() != GapStatus::Ok || self.after_status() != GapStatus::Ok
    }

    pub fn worst_status(&self) -> GapStatus {
        self.before_status().max(self.after_status())
    }

    pub fn has_overlap(&self) -> bool {
        !self.overlaps.is_empty()
    }
}

/// Lessons that can bound the candidate: active, and not the candidate itself.
fn bounding<'a>(lessons: &'a [Lesson], candidate_id: i64) -> impl Iterator<Item = &'a Lesson> {
    lessons
        .iter()
        .filter(move |l| l.is_active() && (candidate_id == 0 || l.id != candidate_id))
}

/// Latest-ending lesson that ends at or before `start`.
pub fn find_previous(lessons: &[Lesson], start: NaiveDateTime) -> Option<&Lesson> {
    find_previous_excluding(lessons, start, 0)
}

/// Earliest-starting lesson that starts at or after `end`.
pub fn find_next(lessons: &[Lesson], end: NaiveDateTime) -> Option<&Lesson> {
    find_next_excluding(lessons, end, 0)
}

fn find_previous_excluding(
    lessons: &[Lesson],
    start: NaiveDateTime,
    candidate_id: i64,
) -> Option<&Lesson> {
    bounding(lessons, candidate_id)
        .filter(|l| l.end <= start)
        .max_by_key(|l| l.end)
}

fn find_next_excluding(
    lessons: &[Lesson],
    end: NaiveDateTime,
    candidate_id: i64,
) -> Option<&Lesson> {
    bounding(lessons, candidate_id)
        .filter(|l| l.start >= end)
        .min_by_key(|l| l.start)
}

/// Lessons overlapping `[start, end)`. Touching ranges do not overlap.
pub fn find_overlaps(
    lessons: &[Lesson],
    start: NaiveDateTime,
    end: NaiveDateTime,
    candidate_id: i64,
) -> Vec<Lesson> {
    bounding(lessons, candidate_id)
        .filter(|l| l.start < end && start < l.end)
        .cloned()
        .collect()
}

/// Assess both sides of a candidate booking independently.
///
/// The result only informs: callers may still accept a booking that
/// conflicts.
pub fn assess_candidate(
    lessons: &[Lesson],
    candidate: &Lesson,
    policy: &TravelPolicy,
) -> CandidateAssessment {
    let previous = find_previous_excluding(lessons, candidate.start, candidate.id).cloned();
    let next = find_next_excluding(lessons, candidate.end, candidate.id).cloned();

    let before = previous.as_ref().map(|p| check_leg(p, candidate, policy));
    let after = next.as_ref().map(|n| check_leg(candidate, n, policy));
    let overlaps = find_overlaps(lessons, candidate.start, candidate.end, candidate.id);

    CandidateAssessment {
        previous,
        next,
        before,
        after,
        overlaps,
    }
}
