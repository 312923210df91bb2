//! Time utilities: parsing HH:MM and lesson instants.

use crate::errors::{AppError, AppResult};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

pub fn parse_time(t: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(t.trim(), "%H:%M").ok()
}

/// Accepts `YYYY-MM-DD HH:MM`, `YYYY-MM-DDTHH:MM` and both forms with seconds.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    const FORMATS: [&str; 4] = [
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%dT%H:%M:%S",
    ];
    let s = s.trim();
    FORMATS
        .iter()
        .find_map(|f| NaiveDateTime::parse_from_str(s, f).ok())
}

pub fn require_time(input: &str) -> AppResult<NaiveTime> {
    parse_time(input).ok_or_else(|| AppError::InvalidTime(input.to_string()))
}

/// Build the `(start, end)` instants of a lesson held on `date`.
/// An end time earlier than the start is rejected: lessons do not cross
/// midnight when entered from the CLI.
pub fn lesson_bounds(
    date: NaiveDate,
    start: &str,
    end: &str,
) -> AppResult<(NaiveDateTime, NaiveDateTime)> {
    let s = date.and_time(require_time(start)?);
    let e = date.and_time(require_time(end)?);

    if e <= s {
        return Err(AppError::InvalidLesson(format!(
            "end time {} must be after start time {}",
            end, start
        )));
    }

    Ok((s, e))
}
