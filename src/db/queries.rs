use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::coordinate::GeoCoordinate;
use crate::models::lesson::{DATETIME_FORMAT, Lesson};
use crate::models::lesson_status::LessonStatus;
use chrono::{NaiveDate, NaiveDateTime};
use rusqlite::{Connection, Result, Row, params};

const SELECT_LESSONS: &str = "SELECT id, student, start_at, end_at, latitude, longitude, \
     IFNULL(address, '') AS address, source, created_at, status FROM lessons";

fn conversion_error(err: AppError) -> rusqlite::Error {
    rusqlite::Error::FromSqlConversionFailure(0, rusqlite::types::Type::Text, Box::new(err))
}

fn parse_stored(s: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(s, DATETIME_FORMAT)
        .map_err(|_| conversion_error(AppError::InvalidDate(s.to_string())))
}

pub fn map_row(row: &Row) -> Result<Lesson> {
    let start_raw: String = row.get("start_at")?;
    let end_raw: String = row.get("end_at")?;

    let latitude: Option<f64> = row.get("latitude")?;
    let longitude: Option<f64> = row.get("longitude")?;
    let meeting_point = match (latitude, longitude) {
        (Some(lat), Some(lon)) => Some(GeoCoordinate::new(lat, lon)),
        _ => None,
    };

    let address: String = row.get("address")?;

    let status_raw: String = row.get("status")?;
    let status = LessonStatus::from_db_str(&status_raw)
        .ok_or_else(|| conversion_error(AppError::InvalidStatus(status_raw.clone())))?;

    Ok(Lesson {
        id: row.get("id")?,
        student: row.get("student")?,
        start: parse_stored(&start_raw)?,
        end: parse_stored(&end_raw)?,
        meeting_point,
        address: if address.is_empty() {
            None
        } else {
            Some(address)
        },
        status,
        source: row.get("source")?,
        created_at: row.get("created_at")?,
    })
}

fn collect(
    conn: &Connection,
    sql: &str,
    args: &[&dyn rusqlite::ToSql],
) -> AppResult<Vec<Lesson>> {
    let mut stmt = conn.prepare(sql)?;
    let rows = stmt.query_map(args, map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

/// Insert a lesson and return its new id.
pub fn insert_lesson(conn: &Connection, lesson: &Lesson) -> AppResult<i64> {
    let (lat, lon) = match lesson.meeting_point {
        Some(p) => (Some(p.latitude), Some(p.longitude)),
        None => (None, None),
    };

    conn.execute(
        "INSERT INTO lessons
            (student, start_at, end_at, latitude, longitude, address, source, created_at, status)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)",
        params![
            lesson.student,
            lesson.start.format(DATETIME_FORMAT).to_string(),
            lesson.end.format(DATETIME_FORMAT).to_string(),
            lat,
            lon,
            lesson.address.clone().unwrap_or_default(),
            lesson.source,
            lesson.created_at,
            lesson.status.to_db_str(),
        ],
    )?;

    Ok(conn.last_insert_rowid())
}

pub fn load_lesson(pool: &DbPool, id: i64) -> AppResult<Lesson> {
    let sql = format!("{SELECT_LESSONS} WHERE id = ?1");
    collect(&pool.conn, &sql, &[&id])?
        .into_iter()
        .next()
        .ok_or(AppError::LessonNotFound(id))
}

/// Lessons starting between the first minute of `from` and the last minute
/// of `to`, ordered by start.
pub fn load_lessons_in_range(
    pool: &DbPool,
    from: &NaiveDate,
    to: &NaiveDate,
) -> AppResult<Vec<Lesson>> {
    let sql = format!(
        "{SELECT_LESSONS}
         WHERE substr(start_at, 1, 10) BETWEEN ?1 AND ?2
         ORDER BY start_at ASC, end_at ASC"
    );
    let from_s = from.format("%Y-%m-%d").to_string();
    let to_s = to.format("%Y-%m-%d").to_string();
    collect(&pool.conn, &sql, &[&from_s, &to_s])
}

pub fn load_all_lessons(pool: &DbPool) -> AppResult<Vec<Lesson>> {
    let sql = format!("{SELECT_LESSONS} ORDER BY start_at ASC, end_at ASC");
    collect(&pool.conn, &sql, &[])
}

/// Active lesson with the latest end at or before `start`, skipping
/// `exclude_id` (0 excludes nothing).
pub fn load_previous_lesson(
    pool: &DbPool,
    start: &NaiveDateTime,
    exclude_id: i64,
) -> AppResult<Option<Lesson>> {
    let sql = format!(
        "{SELECT_LESSONS}
         WHERE status != 'cancelled' AND end_at <= ?1 AND id != ?2
         ORDER BY end_at DESC
         LIMIT 1"
    );
    let start_s = start.format(DATETIME_FORMAT).to_string();
    Ok(collect(&pool.conn, &sql, params![start_s, exclude_id])?
        .into_iter()
        .next())
}

/// Active lesson with the earliest start at or after `end`, skipping
/// `exclude_id` (0 excludes nothing).
pub fn load_next_lesson(
    pool: &DbPool,
    end: &NaiveDateTime,
    exclude_id: i64,
) -> AppResult<Option<Lesson>> {
    let sql = format!(
        "{SELECT_LESSONS}
         WHERE status != 'cancelled' AND start_at >= ?1 AND id != ?2
         ORDER BY start_at ASC
         LIMIT 1"
    );
    let end_s = end.format(DATETIME_FORMAT).to_string();
    Ok(collect(&pool.conn, &sql, params![end_s, exclude_id])?
        .into_iter()
        .next())
}

/// `None` bounds load the whole book.
pub fn load_lessons(
    pool: &DbPool,
    bounds: Option<(NaiveDate, NaiveDate)>,
) -> AppResult<Vec<Lesson>> {
    match bounds {
        Some((from, to)) => load_lessons_in_range(pool, &from, &to),
        None => load_all_lessons(pool),
    }
}

pub fn delete_lesson(pool: &DbPool, id: i64) -> AppResult<()> {
    let n = pool
        .conn
        .execute("DELETE FROM lessons WHERE id = ?1", params![id])?;
    if n == 0 {
        return Err(AppError::LessonNotFound(id));
    }
    Ok(())
}

/// Delete every lesson starting on `date`; returns how many were removed.
pub fn delete_lessons_by_date(pool: &DbPool, date: &NaiveDate) -> AppResult<usize> {
    let date_s = date.format("%Y-%m-%d").to_string();
    let n = pool.conn.execute(
        "DELETE FROM lessons WHERE substr(start_at, 1, 10) = ?1",
        params![date_s],
    )?;
    Ok(n)
}

pub fn set_lesson_status(pool: &DbPool, id: i64, status: LessonStatus) -> AppResult<()> {
    let n = pool.conn.execute(
        "UPDATE lessons SET status = ?1 WHERE id = ?2",
        params![status.to_db_str(), id],
    )?;
    if n == 0 {
        return Err(AppError::LessonNotFound(id));
    }
    Ok(())
}
