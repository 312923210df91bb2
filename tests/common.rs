#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDateTime;
use rlessongap::models::coordinate::GeoCoordinate;
use rlessongap::models::lesson::Lesson;
use std::env;
use std::fs;
use std::path::PathBuf;

/// Meeting points around Praça da Sé, about 2.3 km apart.
pub const CENTRO: &str = "-23.55,-46.63";
pub const BELA_VISTA: &str = "-23.56,-46.65";

pub fn rlg() -> Command {
    cargo_bin_cmd!("rlessongap")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rlessongap.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Write `content` to a temp file and return its path
pub fn temp_file(name: &str, ext: &str, content: &str) -> String {
    let p = temp_out(name, ext);
    fs::write(&p, content).expect("write temp file");
    p
}

pub fn dt(s: &str) -> NaiveDateTime {
    NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").expect("valid datetime")
}

pub fn point(lat: f64, lon: f64) -> GeoCoordinate {
    GeoCoordinate::new(lat, lon)
}

/// Lesson with an explicit id, `start`/`end` as "YYYY-MM-DD HH:MM".
pub fn lesson(id: i64, start: &str, end: &str, at: Option<GeoCoordinate>) -> Lesson {
    let mut l = Lesson::new(format!("student{id}"), dt(start), dt(end), at, None);
    l.id = id;
    l
}

/// Initialize DB and book a small day:
/// 13:00-14:00 Ana (centro), 14:20-15:20 Bruno (bela vista)
pub fn init_db_with_lessons(db_path: &str) {
    rlg()
        .args(["--db", db_path, "--test", "init"])
        .assert()
        .success();

    rlg()
        .args([
            "--db",
            db_path,
            "add",
            "2026-03-02",
            "13:00",
            "14:00",
            "-s",
            "Ana",
            "--at",
            CENTRO,
        ])
        .assert()
        .success();

    rlg()
        .args([
            "--db",
            db_path,
            "add",
            "2026-03-02",
            "14:20",
            "15:20",
            "-s",
            "Bruno",
            "--at",
            BELA_VISTA,
        ])
        .assert()
        .success();
}
