//! Schedule files: lessons supplied from outside the local book.
//!
//! # JSON format
//!
//! Either a bare array or an object with a `lessons` array:
//!
//! ```json
//! [
//!   { "student": "Ana", "start": "2026-03-02 13:00", "end": "2026-03-02 14:00",
//!     "meeting_point": { "latitude": -23.55, "longitude": -46.63 } },
//!   { "student": "Bruno", "start": "2026-03-02 14:20", "end": "2026-03-02 15:20" }
//! ]
//! ```
//!
//! # CSV format
//!
//! ```csv
//! id,student,start,end,latitude,longitude,address,status
//! 1,Ana,2026-03-02 13:00,2026-03-02 14:00,-23.55,-46.63,Av. Paulista 1000,
//! 2,Bruno,2026-03-02 14:20,2026-03-02 15:20,,,,
//! ```
//!
//! Empty `latitude`/`longitude` mean "meeting point unknown"; an empty
//! `status` means scheduled.

use crate::errors::{AppError, AppResult};
use crate::models::coordinate::GeoCoordinate;
use crate::models::lesson::Lesson;
use crate::models::lesson_status::LessonStatus;
use crate::utils::time::parse_datetime;
use serde::Deserialize;
use std::io::Read;
use std::path::Path;

#[derive(Deserialize)]
#[serde(untagged)]
enum JsonSchedule {
    Bare(Vec<Lesson>),
    Wrapped { lessons: Vec<Lesson> },
}

#[derive(Deserialize)]
struct LessonRecord {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    student: Option<String>,
    start: String,
    end: String,
    #[serde(default)]
    latitude: Option<f64>,
    #[serde(default)]
    longitude: Option<f64>,
    #[serde(default)]
    address: Option<String>,
    #[serde(default)]
    status: Option<String>,
}

/// Load a schedule file; the format is chosen by extension (`.json`/`.csv`).
pub fn load_schedule(path: &Path) -> AppResult<Vec<Lesson>> {
    let ext = path
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .unwrap_or_default();

    let file = std::fs::File::open(path)?;
    let lessons = match ext.as_str() {
        "json" => load_json_reader(file)?,
        "csv" => load_csv_reader(file)?,
        other => {
            return Err(AppError::Schedule(format!(
                "unsupported schedule file extension '{}' (use .json or .csv)",
                other
            )));
        }
    };

    validate(&lessons)?;
    Ok(lessons)
}

pub fn load_json_reader<R: Read>(reader: R) -> AppResult<Vec<Lesson>> {
    let parsed: JsonSchedule = serde_json::from_reader(reader)?;
    Ok(match parsed {
        JsonSchedule::Bare(v) | JsonSchedule::Wrapped { lessons: v } => v,
    })
}

pub fn load_csv_reader<R: Read>(reader: R) -> AppResult<Vec<Lesson>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut out = Vec::new();

    for (i, result) in csv_reader.deserialize::<LessonRecord>().enumerate() {
        let row = result?;
        out.push(record_to_lesson(row, i + 1)?);
    }

    Ok(out)
}

fn record_to_lesson(r: LessonRecord, line: usize) -> AppResult<Lesson> {
    let start = parse_datetime(&r.start)
        .ok_or_else(|| AppError::Schedule(format!("row {line}: invalid start '{}'", r.start)))?;
    let end = parse_datetime(&r.end)
        .ok_or_else(|| AppError::Schedule(format!("row {line}: invalid end '{}'", r.end)))?;

    let meeting_point = match (r.latitude, r.longitude) {
        (Some(lat), Some(lon)) => {
            let point = GeoCoordinate::new(lat, lon);
            if !point.is_finite() {
                return Err(AppError::Schedule(format!(
                    "row {line}: coordinates must be finite numbers"
                )));
            }
            Some(point)
        }
        (None, None) => None,
        _ => {
            return Err(AppError::Schedule(format!(
                "row {line}: latitude and longitude must be given together"
            )));
        }
    };

    let status = match r.status.as_deref().map(str::trim) {
        None | Some("") => LessonStatus::Scheduled,
        Some(code) => LessonStatus::from_code(code)
            .ok_or_else(|| AppError::InvalidStatus(code.to_string()))?,
    };

    Ok(Lesson {
        id: r.id.unwrap_or(0),
        student: r.student.unwrap_or_default(),
        start,
        end,
        meeting_point,
        address: r.address.filter(|a| !a.trim().is_empty()),
        status,
        source: "file".to_string(),
        created_at: String::new(),
    })
}

/// Every lesson must end after it starts, at a finite meeting point.
pub fn validate(lessons: &[Lesson]) -> AppResult<()> {
    for l in lessons {
        if let Some(p) = l.meeting_point
            && !p.is_finite()
        {
            return Err(AppError::Schedule(format!(
                "lesson '{}' at {} has a non-finite meeting point",
                l.student_label(),
                l.start.format("%Y-%m-%d %H:%M")
            )));
        }

        if l.end <= l.start {
            return Err(AppError::InvalidLesson(format!(
                "lesson '{}' at {} ends before it starts",
                l.student_label(),
                l.start.format("%Y-%m-%d %H:%M")
            )));
        }
    }
    Ok(())
}
