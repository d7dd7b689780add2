mod common;

use common::{init_db, set, setup_test_db, temp_out, tg};
use predicates::prelude::*;
use predicates::str::contains;
use std::fs;
use taskgrid::config::Config;

#[test]
fn test_init_creates_database() {
    let db_path = setup_test_db("cli_init");

    tg().args(["--db", &db_path, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Database initialized"))
        .stdout(contains("initialization completed"));

    assert!(std::path::Path::new(&db_path).exists());
}

#[test]
fn test_list_shows_fresh_grid() {
    let db_path = setup_test_db("cli_list_fresh");
    init_db(&db_path);

    tg().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Must do today"))
        .stdout(contains("Planned: 0.00 h | Actual: 0.00 h"))
        .stdout(contains("Progress: 0% (0 of 0 tasks done)"))
        .stdout(contains("Priorities: All"));
}

#[test]
fn test_set_computes_duration_and_totals() {
    let db_path = setup_test_db("cli_set");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Write report");
    set(&db_path, "1", "planned-start", "09:00");

    tg().args(["--db", &db_path, "set", "1", "planned-end", "10:30"])
        .assert()
        .success()
        .stdout(contains("planned 90 min"));

    tg().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Write report"))
        .stdout(contains("90"));

    tg().args(["--db", &db_path, "totals"])
        .assert()
        .success()
        .stdout(contains("Planned: 1.50 h"))
        .stdout(contains("Progress: 0% (0 of 1 tasks done)"));
}

#[test]
fn test_done_and_status_filters() {
    let db_path = setup_test_db("cli_done");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Write report");
    set(&db_path, "2", "activity", "Walk the dog");

    tg().args(["--db", &db_path, "done", "1"])
        .assert()
        .success()
        .stdout(contains("status: Done"));

    tg().args(["--db", &db_path, "list", "--status", "completed"])
        .assert()
        .success()
        .stdout(contains("Write report"))
        .stdout(contains("Walk the dog").not());

    tg().args(["--db", &db_path, "list", "--status", "pending"])
        .assert()
        .success()
        .stdout(contains("Walk the dog"))
        .stdout(contains("Write report").not());

    tg().args(["--db", &db_path, "totals"])
        .assert()
        .success()
        .stdout(contains("Progress: 50% (1 of 2 tasks done)"));
}

#[test]
fn test_start_and_stop_record_actual_times() {
    let db_path = setup_test_db("cli_start_stop");
    init_db(&db_path);

    set(&db_path, "3", "activity", "Deploy");

    tg().args(["--db", &db_path, "start", "3", "14:00"])
        .assert()
        .success()
        .stdout(contains("status: In Progress"));

    tg().args(["--db", &db_path, "stop", "3", "14:45"])
        .assert()
        .success()
        .stdout(contains("actual 45 min"));
}

#[test]
fn test_priority_filter_and_sort() {
    let db_path = setup_test_db("cli_filter_sort");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Zebra task");
    set(&db_path, "1", "priority", "High");
    set(&db_path, "2", "activity", "Alpha task");
    set(&db_path, "2", "priority", "Low");
    set(&db_path, "3", "activity", "Middle task");
    set(&db_path, "3", "priority", "high");

    tg().args(["--db", &db_path, "list", "--priority", "HIGH"])
        .assert()
        .success()
        .stdout(contains("Zebra task"))
        .stdout(contains("Middle task"))
        .stdout(contains("Alpha task").not())
        .stdout(contains("Priorities: All, High, Low, high"));

    let output = tg()
        .args(["--db", &db_path, "list", "--sort", "activity"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let alpha = stdout.find("Alpha task").unwrap();
    let middle = stdout.find("Middle task").unwrap();
    let zebra = stdout.find("Zebra task").unwrap();
    assert!(alpha < middle && middle < zebra);
}

#[test]
fn test_repeated_sort_flips_direction() {
    let db_path = setup_test_db("cli_sort_toggle");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Alpha task");
    set(&db_path, "2", "activity", "Zebra task");

    let output = tg()
        .args(["--db", &db_path, "list", "--sort", "activity", "--sort", "activity"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.find("Zebra task").unwrap() < stdout.find("Alpha task").unwrap());

    let output = tg()
        .args(["--db", &db_path, "list", "--sort", "date", "--sort", "activity"])
        .output()
        .unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.find("Alpha task").unwrap() < stdout.find("Zebra task").unwrap());
}

#[test]
fn test_relative_db_path_is_the_same_file_for_every_command() {
    let name = "cli_relative_db_taskgrid.sqlite";
    let resolved = Config::resolve_db_path(name);
    fs::remove_file(&resolved).ok();

    tg().args(["--db", name, "--test", "init"]).assert().success();
    assert!(resolved.exists());

    set(name, "1", "activity", "Same file");

    tg().args(["--db", name, "list"])
        .assert()
        .success()
        .stdout(contains("Same file"));

    fs::remove_file(&resolved).ok();
}

#[test]
fn test_set_rejects_bad_input() {
    let db_path = setup_test_db("cli_bad_input");
    init_db(&db_path);

    tg().args(["--db", &db_path, "set", "1", "planned-start", "25:99"])
        .assert()
        .failure()
        .stderr(contains("Invalid time format"));

    tg().args(["--db", &db_path, "set", "21", "activity", "Nowhere"])
        .assert()
        .failure()
        .stderr(contains("No task with id 21"));

    tg().args(["--db", &db_path, "list", "--status", "someday"])
        .assert()
        .failure()
        .stderr(contains("Invalid status filter"));
}

#[test]
fn test_export_and_import_between_databases() {
    let source = setup_test_db("cli_export_source");
    let target = setup_test_db("cli_export_target");
    let out = temp_out("cli_export", "csv");
    init_db(&source);
    init_db(&target);

    set(&source, "1", "activity", "Write report");
    set(&source, "1", "category", "Work");
    set(&source, "4", "activity", "Water plants");

    tg().args(["--db", &source, "export", "--file", out.to_str().unwrap(), "--force"])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Planned Duration (min)"));
    assert!(content.contains("Water plants"));

    tg().args(["--db", &target, "import", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("2 tasks imported successfully!"));

    tg().args(["--db", &target, "list", "--category", "work"])
        .assert()
        .success()
        .stdout(contains("Write report"))
        .stdout(contains("Water plants").not());

    fs::remove_file(&out).ok();
}

#[test]
fn test_failed_import_leaves_grid_untouched() {
    let db_path = setup_test_db("cli_bad_import");
    let input = temp_out("cli_bad_import", "csv");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Keep me");
    fs::write(&input, "Activity,Priority\nNew task,P1\n,P2\n").unwrap();

    tg().args(["--db", &db_path, "import", input.to_str().unwrap()])
        .assert()
        .failure()
        .stderr(contains("Row 3 is missing the required 'Activity' field."));

    tg().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Keep me"))
        .stdout(contains("New task").not());

    fs::remove_file(&input).ok();
}

#[test]
fn test_export_of_empty_grid_writes_nothing() {
    let db_path = setup_test_db("cli_empty_export");
    let out = temp_out("cli_empty_export", "xlsx");
    init_db(&db_path);

    tg().args(["--db", &db_path, "export", "--file", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(contains("There are no tasks to export."));

    assert!(!out.exists());
}

#[test]
fn test_reset_force_clears_grid() {
    let db_path = setup_test_db("cli_reset");
    init_db(&db_path);

    set(&db_path, "2", "activity", "Temporary");

    tg().args(["--db", &db_path, "reset", "--force"])
        .assert()
        .success()
        .stdout(contains("Grid reset"));

    tg().args(["--db", &db_path, "list"])
        .assert()
        .success()
        .stdout(contains("Temporary").not());
}

#[test]
fn test_log_records_operations() {
    let db_path = setup_test_db("cli_log");
    init_db(&db_path);

    set(&db_path, "1", "activity", "Logged");

    tg().args(["--db", &db_path, "log", "--print"])
        .assert()
        .success()
        .stdout(contains("init"))
        .stdout(contains("set"))
        .stdout(contains("activity = 'Logged'"));
}
