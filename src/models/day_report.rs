use crate::core::calculator::timeline::Timeline;
use chrono::NaiveDate;

#[derive(Debug, Default, Clone)]
pub struct DayReport {
    pub date: NaiveDate,
    pub timeline: Timeline,
    pub total_travel_minutes: i64,
    pub warnings: usize,
    pub conflicts: usize,
}
