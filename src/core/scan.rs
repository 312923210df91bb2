use crate::core::calculator::gaps::GapStatus;
use crate::core::calculator::timeline::{Timeline, TravelLeg, build_timeline};
use crate::core::calculator::travel::TravelPolicy;
use crate::core::schedule_file::load_schedule;
use crate::db::pool::DbPool;
use crate::db::queries::load_lessons;
use crate::errors::AppResult;
use crate::models::day_report::DayReport;
use crate::ui::messages::{header, info, success, travel_separator, warning};
use crate::utils::colors::{color_for_status, colorize_optional, colorize_status};
use crate::utils::formatting::{format_km, format_margin, format_travel_time};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use std::path::Path;

pub struct ScanLogic;

impl ScanLogic {
    pub fn scan_book(
        pool: &DbPool,
        bounds: Option<(NaiveDate, NaiveDate)>,
        policy: &TravelPolicy,
    ) -> AppResult<Timeline> {
        let lessons = load_lessons(pool, bounds)?;
        Ok(build_timeline(&lessons, policy))
    }

    pub fn scan_file(path: &Path, policy: &TravelPolicy) -> AppResult<Timeline> {
        let lessons = load_schedule(path)?;
        Ok(build_timeline(&lessons, policy))
    }

    /// Table of legs followed by a one-line summary.
    pub fn print_timeline(timeline: &Timeline) {
        if timeline.lessons.is_empty() {
            info("No lessons to scan.");
            return;
        }

        if timeline.legs.is_empty() {
            info(format!(
                "{} lesson(s), no back-to-back transfers to check.",
                timeline.lessons.len()
            ));
            return;
        }

        let mut table = Table::new(vec![
            Column::new("FROM", 22),
            Column::new("TO", 22),
            Column::new("GAP", 10),
            Column::new("TRAVEL", 10),
            Column::new("DIST", 9),
            Column::new("MARGIN", 9),
            Column::new("STATUS", 8),
        ]);

        for leg in &timeline.legs {
            table.add_row(leg_row(leg));
        }

        print!("{}", table.render());
        println!();
        Self::print_summary(timeline);
    }

    pub fn print_summary(timeline: &Timeline) {
        let warnings = timeline.count(GapStatus::Warning);
        let conflicts = timeline.count(GapStatus::Conflict);

        let msg = format!(
            "{} lesson(s), {} transfer(s), {} of driving: {} tight, {} conflict(s)",
            timeline.lessons.len(),
            timeline.legs.len(),
            format_travel_time(timeline.total_travel_minutes),
            warnings,
            conflicts
        );

        if conflicts > 0 || warnings > 0 {
            warning(msg);
        } else {
            success(msg);
        }
    }

    /// Lessons of one day with a travel separator between consecutive ones.
    pub fn print_day(report: &DayReport, separator_char: &str) {
        header(report.date.format("%Y-%m-%d (%a)"));

        for (i, lesson) in report.timeline.lessons.iter().enumerate() {
            println!(
                "#{:<4} {}–{}  {:<20} {}",
                lesson.id,
                lesson.start_str(),
                lesson.end_str(),
                lesson.student_label(),
                colorize_optional(lesson.address.as_deref().unwrap_or("-"))
            );

            if let Some(leg) = report.timeline.leg_after(i) {
                travel_separator(color_for_status(leg.status()), separator_line(leg));
            }
        }

        let rule_char = separator_char.chars().next().unwrap_or('-');
        println!("{}", rule_char.to_string().repeat(48));
        println!(
            "Travel: {} | tight: {} | conflicts: {}\n",
            format_travel_time(report.total_travel_minutes),
            report.warnings,
            report.conflicts
        );
    }
}

/// `"15 min · 2.3 km · OK (+5 min)"`
fn separator_line(leg: &TravelLeg) -> String {
    let mut parts = vec![format_travel_time(leg.check.travel_minutes)];
    if let Some(km) = leg.check.distance_km {
        parts.push(format_km(km));
    }
    parts.push(format!(
        "{} ({})",
        leg.status().label(),
        format_margin(leg.check.margin_minutes())
    ));
    parts.join(" · ")
}

fn leg_row(leg: &TravelLeg) -> Vec<String> {
    vec![
        format!("#{} {}", leg.from_id, leg.from_end.format("%m-%d %H:%M")),
        format!("#{} {}", leg.to_id, leg.to_start.format("%m-%d %H:%M")),
        format_travel_time(leg.check.gap_minutes),
        format_travel_time(leg.check.travel_minutes),
        leg.check.distance_km.map(format_km).unwrap_or_else(|| "-".into()),
        format_margin(leg.check.margin_minutes()),
        // keep the colored badge last: escape codes do not count in padding
        colorize_status(leg.status()),
    ]
}
