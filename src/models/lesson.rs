use super::{coordinate::GeoCoordinate, lesson_status::LessonStatus};
use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Storage / display format for lesson instants.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Lesson {
    #[serde(default)]
    pub id: i64, // ⇔ lessons.id (0 = not stored yet)
    #[serde(default)]
    pub student: String, // ⇔ lessons.student
    #[serde(with = "lesson_datetime")]
    pub start: NaiveDateTime, // ⇔ lessons.start_at (TEXT "YYYY-MM-DD HH:MM")
    #[serde(with = "lesson_datetime")]
    pub end: NaiveDateTime, // ⇔ lessons.end_at
    #[serde(default)]
    pub meeting_point: Option<GeoCoordinate>, // ⇔ lessons.latitude / longitude
    #[serde(default)]
    pub address: Option<String>, // ⇔ lessons.address
    #[serde(default)]
    pub status: LessonStatus, // ⇔ lessons.status
    #[serde(default = "default_source")]
    pub source: String, // ⇔ lessons.source ('cli' | 'file')
    #[serde(default)]
    pub created_at: String, // ⇔ lessons.created_at (ISO8601)
}

fn default_source() -> String {
    "file".to_string()
}

impl Lesson {
    /// Build a lesson created from the CLI.
    /// - `id = 0` until the store assigns one
    /// - `status = scheduled`, `source = "cli"`, `created_at = now()`
    pub fn new(
        student: impl Into<String>,
        start: NaiveDateTime,
        end: NaiveDateTime,
        meeting_point: Option<GeoCoordinate>,
        address: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            student: student.into(),
            start,
            end,
            meeting_point,
            address,
            status: LessonStatus::Scheduled,
            source: "cli".to_string(),
            created_at: Local::now().to_rfc3339(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.start.date()
    }

    pub fn date_str(&self) -> String {
        self.start.format("%Y-%m-%d").to_string()
    }

    pub fn start_str(&self) -> String {
        self.start.format("%H:%M").to_string()
    }

    pub fn end_str(&self) -> String {
        self.end.format("%H:%M").to_string()
    }

    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }

    /// Student name, or a dash when the lesson has none.
    pub fn student_label(&self) -> &str {
        if self.student.trim().is_empty() {
            "-"
        } else {
            &self.student
        }
    }
}

/// (De)serialize instants as "YYYY-MM-DD HH:MM"; the ISO form with `T`
/// and optional seconds is accepted on input.
mod lesson_datetime {
    use super::DATETIME_FORMAT;
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub fn serialize<S>(dt: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&dt.format(DATETIME_FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        crate::utils::time::parse_datetime(&s)
            .ok_or_else(|| serde::de::Error::custom(format!("invalid date-time '{s}'")))
    }
}
