use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LessonStatus {
    #[default]
    Scheduled,
    Completed,
    Cancelled,
}

impl LessonStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LessonStatus::Scheduled => "scheduled",
            LessonStatus::Completed => "completed",
            LessonStatus::Cancelled => "cancelled",
        }
    }

    /// Convert enum → DB string
    pub fn to_db_str(&self) -> &'static str {
        self.as_str()
    }

    /// Convert DB string → enum
    pub fn from_db_str(s: &str) -> Option<Self> {
        match s {
            "scheduled" => Some(LessonStatus::Scheduled),
            "completed" => Some(LessonStatus::Completed),
            "cancelled" => Some(LessonStatus::Cancelled),
            _ => None,
        }
    }

    /// Helper: convert CLI/file input (any case, "canceled" accepted)
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "canceled" => Some(LessonStatus::Cancelled),
            other => LessonStatus::from_db_str(other),
        }
    }

    /// Cancelled lessons never take part in travel checks.
    pub fn is_active(&self) -> bool {
        !matches!(self, LessonStatus::Cancelled)
    }
}
