mod common;

use common::day;
use serde_json::json;
use taskgrid::core::store::{RecordStore, STORAGE_KEY, reconcile};
use taskgrid::db::pool::DbPool;
use taskgrid::db::storage::{read_slot, write_slot};
use taskgrid::models::field::{EditableField, FieldUpdate};
use taskgrid::models::status::Status;
use taskgrid::models::task::{NUM_TASK_ROWS, TaskRecord};

fn count_log(pool: &DbPool, operation: &str) -> i64 {
    pool.conn
        .query_row(
            "SELECT COUNT(*) FROM log WHERE operation = ?1",
            [operation],
            |r| r.get(0),
        )
        .expect("count log rows")
}

#[test]
fn test_new_store_has_twenty_blank_rows() {
    let store = RecordStore::new(day());
    let records = store.records();

    assert_eq!(records.len(), NUM_TASK_ROWS);
    for (i, t) in records.iter().enumerate() {
        assert_eq!(t.id, i as u32 + 1);
        assert_eq!(t.date, "2025-03-10");
        assert!(t.is_blank());
        assert_eq!(t.status(), Status::NotStarted);
    }
}

#[test]
fn test_update_recomputes_planned_duration() {
    let mut store = RecordStore::new(day());

    assert!(store.update_field(3, FieldUpdate::PlannedStart("09:00".into())));
    assert_eq!(store.get(3).unwrap().planned_duration, "");

    assert!(store.update_field(3, FieldUpdate::PlannedEnd("10:30".into())));
    assert_eq!(store.get(3).unwrap().planned_duration, "90");

    assert!(store.update_field(3, FieldUpdate::PlannedEnd(String::new())));
    assert_eq!(store.get(3).unwrap().planned_duration, "");
}

#[test]
fn test_update_actual_times_drives_status() {
    let mut store = RecordStore::new(day());
    store.update_field(1, FieldUpdate::Activity("Deploy".into()));
    store.update_field(1, FieldUpdate::ActualStart("14:00".into()));

    let t = store.get(1).unwrap();
    assert_eq!(t.status(), Status::InProgress);
    assert_eq!(t.actual_duration, "");

    store.update_field(1, FieldUpdate::ActualEnd("13:00".into()));
    assert_eq!(store.get(1).unwrap().actual_duration, "0");

    store.update_field(1, FieldUpdate::Done(true));
    assert_eq!(store.get(1).unwrap().status(), Status::Done);
}

#[test]
fn test_update_unknown_id_changes_nothing() {
    let mut store = RecordStore::new(day());
    let before = store.clone();

    assert!(!store.update_field(21, FieldUpdate::Activity("ghost".into())));
    assert!(!store.update_field(0, FieldUpdate::Done(true)));
    assert_eq!(store, before);
}

#[test]
fn test_update_touches_only_the_target_row() {
    let mut store = RecordStore::new(day());
    store.update_field(5, FieldUpdate::Activity("Read".into()));

    for t in store.records() {
        assert_eq!(t.activity.is_empty(), t.id != 5);
    }
}

#[test]
fn test_field_parse_validates_input() {
    assert_eq!(
        FieldUpdate::parse(EditableField::PlannedStart, "9:05").unwrap(),
        FieldUpdate::PlannedStart("09:05".into())
    );
    assert_eq!(
        FieldUpdate::parse(EditableField::ActualEnd, "").unwrap(),
        FieldUpdate::ActualEnd(String::new())
    );
    assert_eq!(
        FieldUpdate::parse(EditableField::Done, "yes").unwrap(),
        FieldUpdate::Done(true)
    );
    assert!(FieldUpdate::parse(EditableField::PlannedEnd, "24:00").is_err());
    assert!(FieldUpdate::parse(EditableField::Date, "10/03/2025").is_err());
    assert!(FieldUpdate::parse(EditableField::Done, "maybe").is_err());
}

#[test]
fn test_replace_all_renumbers_and_truncates() {
    let mut store = RecordStore::new(day());
    let incoming: Vec<TaskRecord> = (0..25)
        .map(|i| TaskRecord {
            activity: format!("task {i}"),
            ..TaskRecord::blank(100 + i, day())
        })
        .collect();

    store.replace_all(incoming);

    let records = store.records();
    assert_eq!(records.len(), NUM_TASK_ROWS);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].activity, "task 0");
    assert_eq!(records[19].id, 20);
    assert_eq!(records[19].activity, "task 19");
}

#[test]
fn test_replace_all_pads_with_blank_rows() {
    let mut store = RecordStore::new(day());
    let mut first = TaskRecord::blank(7, day());
    first.activity = "Only one".into();
    first.date = String::new();

    store.replace_all(vec![first]);

    let records = store.records();
    assert_eq!(records[0].activity, "Only one");
    assert_eq!(records[0].date, "2025-03-10");
    assert!(records[1..].iter().all(|t| t.is_blank()));
}

#[test]
fn test_reset_clears_every_row() {
    let mut store = RecordStore::new(day());
    store.update_field(2, FieldUpdate::Activity("Plan".into()));
    store.reset();

    assert_eq!(store, RecordStore::new(day()));
}

#[test]
fn test_reconcile_coerces_and_recomputes() {
    let value = json!([
        {
            "id": 99,
            "activity": 42,
            "priority": null,
            "done": "yes",
            "plannedStart": "09:00",
            "plannedEnd": "09:30",
            "plannedDuration": "999",
            "projectCategory": ["not", "text"],
            "unknownField": true
        },
        "not an object",
        { "activity": "Third", "done": true, "date": "2024-12-31" }
    ]);

    let records = reconcile(&value, day());

    assert_eq!(records.len(), NUM_TASK_ROWS);
    assert_eq!(records[0].id, 1);
    assert_eq!(records[0].activity, "42");
    assert_eq!(records[0].priority, "");
    assert!(!records[0].done);
    assert_eq!(records[0].planned_duration, "30");
    assert_eq!(records[0].project_category, "");
    assert_eq!(records[0].date, "2025-03-10");

    assert!(records[1].is_blank());
    assert_eq!(records[1].id, 2);

    assert_eq!(records[2].activity, "Third");
    assert!(records[2].done);
    assert_eq!(records[2].date, "2024-12-31");
}

#[test]
fn test_reconcile_ignores_extra_entries_and_non_arrays() {
    let many: Vec<_> = (0..30).map(|i| json!({ "activity": format!("t{i}") })).collect();
    let records = reconcile(&json!(many), day());
    assert_eq!(records.len(), NUM_TASK_ROWS);
    assert_eq!(records[19].activity, "t19");

    let records = reconcile(&json!({ "activity": "not a list" }), day());
    assert!(records.iter().all(|t| t.is_blank()));
}

#[test]
fn test_load_without_saved_grid_starts_fresh() {
    let pool = DbPool::in_memory().unwrap();
    let store = RecordStore::load(&pool.conn, day());

    assert_eq!(store, RecordStore::new(day()));
}

#[test]
fn test_save_then_load() {
    let pool = DbPool::in_memory().unwrap();
    let mut store = RecordStore::new(day());
    store.update_field(1, FieldUpdate::Activity("Persist me".into()));
    store.update_field(1, FieldUpdate::PlannedStart("08:00".into()));
    store.update_field(1, FieldUpdate::PlannedEnd("08:20".into()));
    store.update_field(4, FieldUpdate::Done(true));

    assert!(store.save(&pool.conn));

    let loaded = RecordStore::load(&pool.conn, day());
    assert_eq!(loaded, store);
    assert_eq!(loaded.get(1).unwrap().planned_duration, "20");
}

#[test]
fn test_saved_snapshot_uses_camel_case_keys() {
    let pool = DbPool::in_memory().unwrap();
    RecordStore::new(day()).save(&pool.conn);

    let raw = read_slot(&pool.conn, STORAGE_KEY).unwrap().expect("slot written");
    assert!(raw.contains("\"plannedDuration\""));
    assert!(raw.contains("\"projectCategory\""));
}

#[test]
fn test_corrupt_snapshot_falls_back_to_fresh_grid() {
    let pool = DbPool::in_memory().unwrap();
    write_slot(&pool.conn, STORAGE_KEY, "{ this is not json").unwrap();

    assert!(RecordStore::try_load(&pool.conn, day()).is_err());

    let store = RecordStore::load(&pool.conn, day());
    assert_eq!(store, RecordStore::new(day()));
    assert_eq!(count_log(&pool, "load_failed"), 1);
}

#[test]
fn test_write_slot_overwrites() {
    let pool = DbPool::in_memory().unwrap();
    write_slot(&pool.conn, "k", "one").unwrap();
    write_slot(&pool.conn, "k", "two").unwrap();

    assert_eq!(read_slot(&pool.conn, "k").unwrap().as_deref(), Some("two"));
    assert_eq!(read_slot(&pool.conn, "missing").unwrap(), None);
}
