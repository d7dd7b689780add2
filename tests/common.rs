#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::env;
use std::fs;
use std::path::PathBuf;
use taskgrid::models::task::TaskRecord;

pub fn tg() -> Command {
    cargo_bin_cmd!("taskgrid")
}

/// Create a unique test DB path inside the system temp dir and remove any existing file
pub fn setup_test_db(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taskgrid.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    db_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> PathBuf {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_taskgrid_out.{}", name, ext));
    fs::remove_file(&path).ok();
    path
}

/// Initialize an empty grid in `db_path` via the CLI
pub fn init_db(db_path: &str) {
    tg().args(["--db", db_path, "--test", "init"])
        .assert()
        .success();
}

/// Set one cell via the CLI
pub fn set(db_path: &str, id: &str, field: &str, value: &str) {
    tg().args(["--db", db_path, "set", id, field, value])
        .assert()
        .success();
}

pub fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).expect("valid date")
}

/// A task in slot `id` with the given activity, priority and category
pub fn task(id: u32, activity: &str, priority: &str, category: &str) -> TaskRecord {
    TaskRecord {
        activity: activity.to_string(),
        priority: priority.to_string(),
        project_category: category.to_string(),
        ..TaskRecord::blank(id, day())
    }
}
