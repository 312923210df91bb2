use crate::errors::{AppError, AppResult};
use chrono::{Datelike, NaiveDate};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").ok()
}

pub fn require_date(s: &str) -> AppResult<NaiveDate> {
    parse_date(s).ok_or_else(|| AppError::InvalidDate(s.to_string()))
}

/// First and last day covered by a single period token:
/// `YYYY-MM-DD`, `YYYY-MM` or `YYYY`.
pub fn period_bounds(p: &str) -> Result<(NaiveDate, NaiveDate), String> {
    let p = p.trim();

    // YYYY-MM-DD
    if let Some(d) = parse_date(p) {
        return Ok((d, d));
    }

    // YYYY-MM
    if let Ok(first) = NaiveDate::parse_from_str(&format!("{p}-01"), "%Y-%m-%d") {
        let last = last_day_of_month(first.year(), first.month())
            .ok_or_else(|| format!("Invalid period: {}", p))?;
        return Ok((first, last));
    }

    // YYYY
    if p.len() == 4
        && let Ok(year) = p.parse::<i32>()
        && let (Some(first), Some(last)) = (
            NaiveDate::from_ymd_opt(year, 1, 1),
            NaiveDate::from_ymd_opt(year, 12, 31),
        )
    {
        return Ok((first, last));
    }

    Err(format!("Invalid period: {}", p))
}

/// Resolve a `--period`/`--range` argument.
///
/// - `None` → current month
/// - `"all"` → `Ok(None)` (no bounds)
/// - `A:B` → from the first day of `A` to the last day of `B`
/// - anything else → a single `YYYY`, `YYYY-MM` or `YYYY-MM-DD` token
pub fn resolve_period(period: Option<&str>) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let Some(p) = period else {
        return current_month_bounds().map(Some);
    };

    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    if let Some((start_raw, end_raw)) = p.split_once(':') {
        let (start, _) = period_bounds(start_raw).map_err(AppError::InvalidDate)?;
        let (_, end) = period_bounds(end_raw).map_err(AppError::InvalidDate)?;
        if end < start {
            return Err(AppError::InvalidDate(format!(
                "range end {} is before range start {}",
                end, start
            )));
        }
        return Ok(Some((start, end)));
    }

    period_bounds(p).map(Some).map_err(AppError::InvalidDate)
}

pub fn current_month_bounds() -> AppResult<(NaiveDate, NaiveDate)> {
    let t = today();
    let first = NaiveDate::from_ymd_opt(t.year(), t.month(), 1)
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    let last = last_day_of_month(t.year(), t.month())
        .ok_or_else(|| AppError::InvalidDate(t.to_string()))?;
    Ok((first, last))
}

pub fn last_day_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    let (ny, nm) = if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    };
    NaiveDate::from_ymd_opt(ny, nm, 1)?.pred_opt()
}
