// src/export/model.rs

use crate::core::calculator::timeline::Timeline;
use serde::Serialize;

/// Flat row describing one transfer between two lessons.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct LegExport {
    pub date: String,
    pub from_id: i64,
    pub from_student: String,
    pub from_end: String,
    pub to_id: i64,
    pub to_student: String,
    pub to_start: String,
    pub gap_minutes: i64,
    pub travel_minutes: i64,
    pub distance_km: Option<f64>,
    pub margin_minutes: i64,
    pub status: String,
}

pub fn legs_to_export(timeline: &Timeline) -> Vec<LegExport> {
    timeline
        .legs
        .iter()
        .map(|leg| LegExport {
            date: leg.from_end.format("%Y-%m-%d").to_string(),
            from_id: leg.from_id,
            from_student: leg.from_student.clone(),
            from_end: leg.from_end.format("%H:%M").to_string(),
            to_id: leg.to_id,
            to_student: leg.to_student.clone(),
            to_start: leg.to_start.format("%H:%M").to_string(),
            gap_minutes: leg.check.gap_minutes,
            travel_minutes: leg.check.travel_minutes,
            // two decimals are plenty for a straight-line estimate
            distance_km: leg.check.distance_km.map(|km| (km * 100.0).round() / 100.0),
            margin_minutes: leg.check.margin_minutes(),
            status: leg.status().as_str().to_string(),
        })
        .collect()
}
