use crate::core::calculator::gaps::{GapCheck, GapStatus};
use crate::core::calculator::neighbors::{CandidateAssessment, assess_candidate};
use crate::core::calculator::travel::TravelPolicy;
use crate::db::pool::DbPool;
use crate::db::queries::{load_lessons_in_range, load_next_lesson, load_previous_lesson};
use crate::errors::AppResult;
use crate::models::lesson::Lesson;
use crate::ui::messages::{gap_verdict, info, warning};
use crate::utils::formatting::{format_km, format_margin, format_travel_time};

/// Checks a candidate booking against the stored lesson book.
pub struct CheckLogic;

impl CheckLogic {
    /// The closest neighbours are searched over the whole book; overlaps
    /// only over the days around the candidate.
    pub fn assess(
        pool: &DbPool,
        candidate: &Lesson,
        policy: &TravelPolicy,
    ) -> AppResult<CandidateAssessment> {
        let day = candidate.date();
        let from = day.pred_opt().unwrap_or(day);
        let to = candidate.end.date().succ_opt().unwrap_or(day);

        let mut lessons = load_lessons_in_range(pool, &from, &to)?;

        let neighbours = [
            load_previous_lesson(pool, &candidate.start, candidate.id)?,
            load_next_lesson(pool, &candidate.end, candidate.id)?,
        ];
        for n in neighbours.into_iter().flatten() {
            if !lessons.iter().any(|l| l.id == n.id) {
                lessons.push(n);
            }
        }

        Ok(assess_candidate(&lessons, candidate, policy))
    }

    pub fn print(candidate: &Lesson, assessment: &CandidateAssessment) {
        info(format!(
            "Checking {} {}–{} ({})",
            candidate.date_str(),
            candidate.start_str(),
            candidate.end_str(),
            candidate
                .meeting_point
                .map(|p| p.to_string())
                .unwrap_or_else(|| "meeting point unknown".into())
        ));

        for other in &assessment.overlaps {
            warning(format!(
                "Overlaps lesson #{} ({}, {}–{})",
                other.id,
                other.student_label(),
                other.start_str(),
                other.end_str()
            ));
        }

        match (&assessment.previous, &assessment.before) {
            (Some(prev), Some(check)) => gap_verdict(
                check.status(),
                format!(
                    "From #{} ({}, ends {}): {}",
                    prev.id,
                    prev.student_label(),
                    prev.end_str(),
                    describe(check)
                ),
            ),
            _ => info("No earlier lesson: nothing to reach before this one."),
        }

        match (&assessment.next, &assessment.after) {
            (Some(next), Some(check)) => gap_verdict(
                check.status(),
                format!(
                    "To #{} ({}, starts {}): {}",
                    next.id,
                    next.student_label(),
                    next.start_str(),
                    describe(check)
                ),
            ),
            _ => info("No later lesson: nothing to reach after this one."),
        }

        if assessment.has_issue() {
            warning(match assessment.worst_status() {
                GapStatus::Conflict => "You won't make it in time for at least one transfer.",
                _ => "At least one transfer is tight.",
            });
        }
    }
}

/// `"gap 20 min, travel 15 min (2.3 km) → OK, margin +5 min"`
pub fn describe(check: &GapCheck) -> String {
    let distance = check
        .distance_km
        .map(|km| format!(" ({})", format_km(km)))
        .unwrap_or_default();

    format!(
        "gap {}, travel {}{} → {}, margin {}",
        format_travel_time(check.gap_minutes),
        format_travel_time(check.travel_minutes),
        distance,
        check.status().label(),
        format_margin(check.margin_minutes())
    )
}
