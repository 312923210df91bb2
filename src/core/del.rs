use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_lesson, delete_lessons_by_date, load_lesson, set_lesson_status};
use crate::errors::{AppError, AppResult};
use crate::models::lesson_status::LessonStatus;
use crate::ui::messages::{info, warning};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    /// Remove one lesson, or mark it cancelled so it stays in the book but
    /// no longer takes part in travel checks.
    pub fn apply_id(pool: &mut DbPool, id: i64, cancel: bool) -> AppResult<()> {
        let lesson = load_lesson(pool, id)?;

        let operation = if cancel {
            set_lesson_status(pool, id, LessonStatus::Cancelled)?;
            info(format!(
                "Cancelled lesson #{} ({} {})",
                id,
                lesson.date_str(),
                lesson.start_str()
            ));
            "cancel"
        } else {
            delete_lesson(pool, id)?;
            info(format!(
                "Deleted lesson #{} ({} {})",
                id,
                lesson.date_str(),
                lesson.start_str()
            ));
            "del"
        };

        Self::log(pool, operation, &format!("#{id}"), &lesson.date_str());
        Ok(())
    }

    /// Delete all lessons starting on `date`.
    pub fn apply_date(pool: &mut DbPool, date: NaiveDate) -> AppResult<usize> {
        let date_str = date.format("%Y-%m-%d").to_string();
        let n = delete_lessons_by_date(pool, &date)?;

        if n == 0 {
            return Err(AppError::NoLessonsForDate(date_str));
        }

        info(format!("Deleted {} lesson(s) for {}", n, date));
        Self::log(pool, "del", &date_str, &format!("{n} lesson(s) deleted"));
        Ok(n)
    }

    fn log(pool: &DbPool, operation: &str, target: &str, message: &str) {
        if let Err(e) = ttlog(&pool.conn, operation, target, message) {
            warning(format!("Failed to write internal log: {}", e));
        }
    }
}
