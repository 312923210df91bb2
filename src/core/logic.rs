use crate::core::calculator::gaps::GapStatus;
use crate::core::calculator::timeline::{self, Timeline};
use crate::core::calculator::travel::TravelPolicy;
use crate::models::{day_report::DayReport, lesson::Lesson};
use chrono::NaiveDate;
use std::collections::BTreeMap;

pub struct Core;

impl Core {
    pub fn build_day_report(
        date: NaiveDate,
        lessons: &[Lesson],
        policy: &TravelPolicy,
    ) -> DayReport {
        day_report(date, timeline::build_timeline(lessons, policy))
    }

    /// One report per calendar day (by lesson start), in date order.
    ///
    /// The whole period is scanned as one timeline before splitting, so a
    /// drive across midnight belongs to the day it departs from.
    pub fn build_reports(lessons: &[Lesson], policy: &TravelPolicy) -> Vec<DayReport> {
        let full = timeline::build_timeline(lessons, policy);

        let mut by_day: BTreeMap<NaiveDate, Timeline> = BTreeMap::new();
        // position of each lesson inside its day
        let mut local_index = Vec::with_capacity(full.lessons.len());
        for l in &full.lessons {
            let day = by_day.entry(l.date()).or_default();
            local_index.push(day.lessons.len());
            day.lessons.push(l.clone());
        }

        for leg in &full.legs {
            let date = full.lessons[leg.from_index].date();
            if let Some(day) = by_day.get_mut(&date) {
                let mut leg = leg.clone();
                leg.from_index = local_index[leg.from_index];
                day.total_travel_minutes += leg.check.travel_minutes;
                day.legs.push(leg);
            }
        }

        by_day
            .into_iter()
            .map(|(date, t)| day_report(date, t))
            .collect()
    }
}

fn day_report(date: NaiveDate, timeline: Timeline) -> DayReport {
    DayReport {
        date,
        total_travel_minutes: timeline.total_travel_minutes,
        warnings: timeline.count(GapStatus::Warning),
        conflicts: timeline.count(GapStatus::Conflict),
        timeline,
    }
}
