use rlessongap::core::calculator::gaps::GapStatus;
use rlessongap::core::calculator::travel::TravelPolicy;
use rlessongap::core::check::CheckLogic;
use rlessongap::core::del::DeleteLogic;
use rlessongap::db::initialize::init_db;
use rlessongap::db::log::load_log;
use rlessongap::db::pool::DbPool;
use rlessongap::db::queries::{
    insert_lesson, load_lesson, load_lessons, load_lessons_in_range, set_lesson_status,
};
use rlessongap::errors::AppError;
use rlessongap::models::lesson_status::LessonStatus;

mod common;
use common::{dt, lesson, point};

fn book() -> DbPool {
    let pool = DbPool::in_memory().expect("in-memory db");
    init_db(&pool.conn).expect("schema");
    pool
}

#[test]
fn test_insert_and_load_roundtrip_fields() {
    let pool = book();
    let mut l = lesson(0, "2026-03-02 13:00", "2026-03-02 14:00", Some(point(-23.55, -46.63)));
    l.address = Some("Av. Paulista 1000".into());

    let id = insert_lesson(&pool.conn, &l).expect("insert");
    let stored = load_lesson(&pool, id).expect("load");

    assert_eq!(stored.id, id);
    assert_eq!(stored.start, l.start);
    assert_eq!(stored.end, l.end);
    assert_eq!(stored.meeting_point, l.meeting_point);
    assert_eq!(stored.address.as_deref(), Some("Av. Paulista 1000"));
    assert_eq!(stored.status, LessonStatus::Scheduled);
    assert_eq!(stored.source, "cli");
}

#[test]
fn test_lesson_without_point_or_address() {
    let pool = book();
    let id = insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-02 09:00", "2026-03-02 10:00", None),
    )
    .expect("insert");

    let stored = load_lesson(&pool, id).expect("load");
    assert!(stored.meeting_point.is_none());
    assert!(stored.address.is_none());
}

#[test]
fn test_schema_rejects_lesson_ending_before_start() {
    let pool = book();
    let backwards = lesson(0, "2026-03-02 10:00", "2026-03-02 09:00", None);
    assert!(insert_lesson(&pool.conn, &backwards).is_err());
}

#[test]
fn test_range_queries_are_ordered_and_bounded() {
    let pool = book();
    for (s, e) in [
        ("2026-03-03 09:00", "2026-03-03 10:00"),
        ("2026-03-01 15:00", "2026-03-01 16:00"),
        ("2026-03-01 08:00", "2026-03-01 09:00"),
        ("2026-04-01 08:00", "2026-04-01 09:00"),
    ] {
        insert_lesson(&pool.conn, &lesson(0, s, e, None)).expect("insert");
    }

    let march = load_lessons_in_range(
        &pool,
        &dt("2026-03-01 00:00").date(),
        &dt("2026-03-31 00:00").date(),
    )
    .expect("range");
    let starts: Vec<String> = march.iter().map(|l| l.start_str()).collect();
    assert_eq!(starts, vec!["08:00", "15:00", "09:00"]);

    assert_eq!(load_lessons(&pool, None).expect("all").len(), 4);
}

#[test]
fn test_missing_lesson_is_reported() {
    let pool = book();
    let err = load_lesson(&pool, 42).unwrap_err();
    assert!(matches!(err, AppError::LessonNotFound(42)));

    let err = set_lesson_status(&pool, 42, LessonStatus::Cancelled).unwrap_err();
    assert!(matches!(err, AppError::LessonNotFound(42)));
}

#[test]
fn test_check_uses_neighbours_from_the_book() {
    let pool = book();
    let centro = Some(point(-23.55, -46.63));
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-02 13:00", "2026-03-02 14:00", centro),
    )
    .expect("insert");
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-02 16:00", "2026-03-02 17:00", centro),
    )
    .expect("insert");

    let candidate = lesson(0, "2026-03-02 14:20", "2026-03-02 15:50", Some(point(-23.56, -46.65)));
    let a = CheckLogic::assess(&pool, &candidate, &TravelPolicy::default()).expect("assess");

    assert_eq!(a.before_status(), GapStatus::Ok);
    assert_eq!(a.after_status(), GapStatus::Conflict);
}

#[test]
fn test_check_sees_lesson_late_on_the_previous_day() {
    let pool = book();
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-01 23:00", "2026-03-01 23:55", None),
    )
    .expect("insert");

    let candidate = lesson(0, "2026-03-02 00:05", "2026-03-02 01:00", None);
    let a = CheckLogic::assess(&pool, &candidate, &TravelPolicy::default()).expect("assess");

    // 10 min gap, 15 min default travel
    assert!(a.previous.is_some());
    assert_eq!(a.before_status(), GapStatus::Conflict);
}

#[test]
fn test_cancel_and_delete() {
    let mut pool = book();
    let id = insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-02 13:00", "2026-03-02 14:00", None),
    )
    .expect("insert");
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-02 15:00", "2026-03-02 16:00", None),
    )
    .expect("insert");

    DeleteLogic::apply_id(&mut pool, id, true).expect("cancel");
    assert_eq!(
        load_lesson(&pool, id).expect("still stored").status,
        LessonStatus::Cancelled
    );

    let day = dt("2026-03-02 00:00").date();
    let removed = DeleteLogic::apply_date(&mut pool, day).expect("delete");
    assert_eq!(removed, 2);
    assert!(load_lessons(&pool, None).expect("all").is_empty());

    let err = DeleteLogic::apply_date(&mut pool, day).unwrap_err();
    assert!(matches!(err, AppError::NoLessonsForDate(_)));

    let ops: Vec<String> = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .map(|e| e.operation)
        .collect();
    assert!(ops.contains(&"cancel".to_string()));
    assert!(ops.contains(&"del".to_string()));
}

#[test]
fn test_migrations_run_once() {
    let pool = book();
    init_db(&pool.conn).expect("second run");

    let applied = load_log(&pool.conn)
        .expect("log")
        .into_iter()
        .filter(|e| e.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn test_check_finds_neighbours_days_away() {
    let pool = book();
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-01 08:00", "2026-03-01 09:00", Some(point(0.0, 0.0))),
    )
    .expect("insert");
    insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-06 08:00", "2026-03-06 09:00", Some(point(0.0, 0.0))),
    )
    .expect("insert");

    // the other side of the planet
    let candidate = lesson(0, "2026-03-03 10:00", "2026-03-03 11:00", Some(point(0.0, 180.0)));
    let a = CheckLogic::assess(&pool, &candidate, &TravelPolicy::default()).expect("assess");

    assert_eq!(a.previous.as_ref().map(|l| l.start), Some(dt("2026-03-01 08:00")));
    assert_eq!(a.next.as_ref().map(|l| l.start), Some(dt("2026-03-06 08:00")));
    assert_eq!(a.before_status(), GapStatus::Conflict);
    assert_eq!(a.after_status(), GapStatus::Conflict);
}

#[test]
fn test_check_skips_cancelled_and_itself_in_the_book() {
    let pool = book();
    let prev = insert_lesson(
        &pool.conn,
        &lesson(0, "2026-02-20 08:00", "2026-02-20 09:00", None),
    )
    .expect("insert");
    let cancelled = insert_lesson(
        &pool.conn,
        &lesson(0, "2026-02-25 08:00", "2026-02-25 09:00", None),
    )
    .expect("insert");
    set_lesson_status(&pool, cancelled, LessonStatus::Cancelled).expect("cancel");
    let own = insert_lesson(
        &pool.conn,
        &lesson(0, "2026-03-03 10:00", "2026-03-03 11:00", None),
    )
    .expect("insert");

    let mut candidate = lesson(0, "2026-03-03 10:00", "2026-03-03 11:00", None);
    candidate.id = own;
    let a = CheckLogic::assess(&pool, &candidate, &TravelPolicy::default()).expect("assess");

    assert_eq!(a.previous.as_ref().map(|l| l.id), Some(prev));
    assert!(a.next.is_none());
    assert!(a.overlaps.is_empty());
}
