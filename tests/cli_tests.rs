use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{BELA_VISTA, CENTRO, init_db_with_lessons, rlg, setup_test_db, temp_file, temp_out};

#[test]
fn test_estimate_between_points() {
    rlg()
        .args(["estimate", "--from", "0,0", "--to", "0,0.045"])
        .assert()
        .success()
        .stdout(contains("5.0 km"))
        .stdout(contains("20 min"));
}

#[test]
fn test_estimate_with_negative_coordinates_and_gap() {
    rlg()
        .args(["estimate", "--from", CENTRO, "--to", BELA_VISTA, "--gap", "20"])
        .assert()
        .success()
        .stdout(contains("2.3 km"))
        .stdout(contains("15 min"))
        .stdout(contains("OK, margin +5 min"));
}

#[test]
fn test_estimate_gap_conflict() {
    rlg()
        .args(["estimate", "--from", "0,0", "--to", "0,0.045", "--gap", "18"])
        .assert()
        .success()
        .stdout(contains("CONFLICT, margin -2 min"));
}

#[test]
fn test_estimate_without_destination_uses_default() {
    rlg()
        .args(["estimate", "--from", CENTRO])
        .assert()
        .success()
        .stdout(contains("unknown"))
        .stdout(contains("15 min"));
}

#[test]
fn test_estimate_rejects_bad_coordinate() {
    rlg()
        .args(["estimate", "--from", "north", "--to", "0,0"])
        .assert()
        .failure()
        .stderr(contains("Invalid coordinate"));
}

#[test]
fn test_add_reports_travel_from_previous_lesson() {
    let db_path = setup_test_db("add_reports_travel");
    init_db_with_lessons(&db_path);

    rlg()
        .args([
            "--db",
            &db_path,
            "add",
            "2026-03-02",
            "15:30",
            "16:30",
            "-s",
            "Carla",
            "--at",
            CENTRO,
        ])
        .assert()
        .success()
        .stdout(contains("Lesson #3 booked"))
        .stdout(contains("CONFLICT"))
        .stdout(contains("Booked anyway"));
}

#[test]
fn test_add_rejects_end_before_start() {
    let db_path = setup_test_db("add_end_before_start");

    rlg()
        .args(["--db", &db_path, "--test", "init"])
        .assert()
        .success();

    rlg()
        .args(["--db", &db_path, "add", "2026-03-02", "15:00", "14:00"])
        .assert()
        .failure()
        .stderr(contains("Invalid lesson"));
}

#[test]
fn test_list_shows_travel_separator() {
    let db_path = setup_test_db("list_separator");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "list", "--period", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("2026-03-02"))
        .stdout(contains("Ana"))
        .stdout(contains("Bruno"))
        .stdout(contains("15 min · 2.3 km · OK (+5 min)"));
}

#[test]
fn test_check_does_not_store_the_candidate() {
    let db_path = setup_test_db("check_dry_run");
    init_db_with_lessons(&db_path);

    rlg()
        .args([
            "--db",
            &db_path,
            "check",
            "2026-03-02",
            "15:25",
            "16:00",
            "--at",
            CENTRO,
        ])
        .assert()
        .success()
        .stdout(contains("From #2"))
        .stdout(contains("CONFLICT"));

    rlg()
        .args(["--db", &db_path, "list", "--period", "2026-03"])
        .assert()
        .success()
        .stdout(contains("15:25").not());
}

#[test]
fn test_scan_book_counts_conflicts() {
    let db_path = setup_test_db("scan_book");
    init_db_with_lessons(&db_path);

    rlg()
        .args([
            "--db", &db_path, "add", "2026-03-02", "15:30", "16:30", "--at", CENTRO,
        ])
        .assert()
        .success();

    rlg()
        .args(["--db", &db_path, "scan", "--period", "2026-03"])
        .assert()
        .success()
        .stdout(contains("3 lesson(s), 2 transfer(s), 30 min of driving"))
        .stdout(contains("1 conflict(s)"));
}

#[test]
fn test_scan_schedule_file() {
    let json = r#"[
      { "student": "Ana", "start": "2026-03-02 13:00", "end": "2026-03-02 14:00" },
      { "student": "Bruno", "start": "2026-03-02 14:05", "end": "2026-03-02 15:00" }
    ]"#;
    let path = temp_file("cli_scan_file", "json", json);

    rlg()
        .args(["scan", "--file", &path])
        .assert()
        .success()
        .stdout(contains("CONFLICT"))
        .stdout(contains("1 conflict(s)"));
}

#[test]
fn test_cancel_hides_lesson_from_checks() {
    let db_path = setup_test_db("cancel_lesson");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "del", "--id", "2", "--cancel"])
        .assert()
        .success()
        .stdout(contains("Lesson #2 has been cancelled."));

    rlg()
        .args(["--db", &db_path, "list", "--period", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Bruno").not())
        .stdout(contains("1 cancelled lesson(s) not shown."));
}

#[test]
fn test_delete_lesson_by_id() {
    let db_path = setup_test_db("delete_by_id");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "del", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .success()
        .stdout(contains("Lesson #1 has been deleted."));

    rlg()
        .args(["--db", &db_path, "del", "--id", "1"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("Lesson 1 not found"));
}

#[test]
fn test_delete_day_without_lessons_fails() {
    let db_path = setup_test_db("delete_empty_day");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "del", "2026-03-05"])
        .write_stdin("y\n")
        .assert()
        .failure()
        .stderr(contains("No lessons found for date 2026-03-05"));
}

#[test]
fn test_delete_day_declined_keeps_lessons() {
    let db_path = setup_test_db("delete_day_declined");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "del", "2026-03-02"])
        .write_stdin("n\n")
        .assert()
        .success()
        .stdout(contains("Operation cancelled."));

    rlg()
        .args(["--db", &db_path, "list", "--period", "2026-03-02"])
        .assert()
        .success()
        .stdout(contains("Ana"));
}

#[test]
fn test_export_csv_and_json() {
    let db_path = setup_test_db("export_legs");
    init_db_with_lessons(&db_path);

    let csv_out = temp_out("export_legs", "csv");
    rlg()
        .args([
            "--db", &db_path, "export", "--format", "csv", "--file", &csv_out, "--range",
            "2026-03", "--force",
        ])
        .assert()
        .success();

    let csv = fs::read_to_string(&csv_out).expect("csv written");
    assert!(csv.starts_with("date,from_id,from_student"));
    assert!(csv.contains("Ana"));
    assert!(csv.contains(",ok"));

    let json_out = temp_out("export_legs", "json");
    rlg()
        .args([
            "--db", &db_path, "export", "--format", "json", "--file", &json_out, "--range",
            "all", "--force",
        ])
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(&json_out).expect("json written")).expect("json");
    let rows = parsed.as_array().expect("array");
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["travel_minutes"], 15);
    assert_eq!(rows[0]["status"], "ok");
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("log_ops");
    init_db_with_lessons(&db_path);

    rlg()
        .args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("add"))
        .stdout(contains("migration_applied"));
}
