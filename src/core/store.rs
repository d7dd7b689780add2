//! The fixed-size collection of task records and its persistence boundary.

use crate::core::duration::duration;
use crate::db::log::ttlog;
use crate::db::storage;
use crate::errors::AppResult;
use crate::models::field::FieldUpdate;
use crate::models::task::{NUM_TASK_ROWS, TaskRecord, initial_records};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use rusqlite::Connection;
use serde_json::Value;

/// Key of the storage slot holding the JSON snapshot of the grid.
pub const STORAGE_KEY: &str = "todos";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordStore {
    records: Vec<TaskRecord>,
    today: NaiveDate,
}

impl RecordStore {
    /// A grid of blank rows dated `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            records: initial_records(today),
            today,
        }
    }

    /// Load the persisted grid.
    ///
    /// Any read or decode failure is reported and logged, and a fresh grid is
    /// returned in its place.
    pub fn load(conn: &Connection, today: NaiveDate) -> Self {
        match Self::try_load(conn, today) {
            Ok(store) => store,
            Err(e) => {
                warning(format!("Failed to load saved tasks, starting fresh: {e}"));
                if let Err(log_err) = ttlog(conn, "load_failed", STORAGE_KEY, &e.to_string()) {
                    warning(format!("Failed to write internal log: {log_err}"));
                }
                Self::new(today)
            }
        }
    }

    pub fn try_load(conn: &Connection, today: NaiveDate) -> AppResult<Self> {
        let records = match storage::read_slot(conn, STORAGE_KEY)? {
            Some(raw) => {
                let value: Value = serde_json::from_str(&raw)?;
                reconcile(&value, today)
            }
            None => initial_records(today),
        };
        Ok(Self { records, today })
    }

    /// Persist the whole grid as one snapshot.
    ///
    /// Returns false when nothing was written; failures are reported and
    /// logged rather than propagated.
    pub fn save(&self, conn: &Connection) -> bool {
        if self.records.is_empty() {
            return false;
        }
        match self.try_save(conn) {
            Ok(()) => true,
            Err(e) => {
                warning(format!("Failed to save tasks: {e}"));
                if let Err(log_err) = ttlog(conn, "save_failed", STORAGE_KEY, &e.to_string()) {
                    warning(format!("Failed to write internal log: {log_err}"));
                }
                false
            }
        }
    }

    pub fn try_save(&self, conn: &Connection) -> AppResult<()> {
        let json = serde_json::to_string(&self.records)?;
        storage::write_slot(conn, STORAGE_KEY, &json)
    }

    pub fn records(&self) -> &[TaskRecord] {
        &self.records
    }

    pub fn get(&self, id: u32) -> Option<&TaskRecord> {
        self.records.iter().find(|t| t.id == id)
    }

    /// Replace the record `id` with a copy carrying `update`.
    ///
    /// Returns false, leaving the grid untouched, when no record has that id.
    pub fn update_field(&mut self, id: u32, update: FieldUpdate) -> bool {
        match self.records.iter().position(|t| t.id == id) {
            Some(idx) => {
                self.records[idx] = apply_update(&self.records[idx], update);
                true
            }
            None => false,
        }
    }

    /// Seed `records` onto a fresh template, slot by slot.
    ///
    /// Ids are renumbered from 1; rows beyond the grid size are dropped.
    pub fn replace_all(&mut self, records: Vec<TaskRecord>) {
        let mut fresh = initial_records(self.today);
        for (slot, record) in records.into_iter().take(NUM_TASK_ROWS).enumerate() {
            let date = if record.date.trim().is_empty() {
                fresh[slot].date.clone()
            } else {
                record.date
            };
            fresh[slot] = TaskRecord {
                id: slot as u32 + 1,
                date,
                ..record
            };
        }
        self.records = fresh;
    }

    pub fn reset(&mut self) {
        self.replace_all(Vec::new());
    }
}

/// Copy of `record` with `update` applied and the affected duration
/// recomputed.
pub fn apply_update(record: &TaskRecord, update: FieldUpdate) -> TaskRecord {
    let mut next = record.clone();
    let mut planned_changed = false;
    let mut actual_changed = false;

    match update {
        FieldUpdate::Date(v) => next.date = v,
        FieldUpdate::Activity(v) => next.activity = v,
        FieldUpdate::Priority(v) => next.priority = v,
        FieldUpdate::Done(v) => next.done = v,
        FieldUpdate::ProjectCategory(v) => next.project_category = v,
        FieldUpdate::PlannedStart(v) => {
            next.planned_start = v;
            planned_changed = true;
        }
        FieldUpdate::PlannedEnd(v) => {
            next.planned_end = v;
            planned_changed = true;
        }
        FieldUpdate::ActualStart(v) => {
            next.actual_start = v;
            actual_changed = true;
        }
        FieldUpdate::ActualEnd(v) => {
            next.actual_end = v;
            actual_changed = true;
        }
    }

    if planned_changed {
        next.planned_duration = duration(&next.planned_start, &next.planned_end);
    }
    if actual_changed {
        next.actual_duration = duration(&next.actual_start, &next.actual_end);
    }

    next
}

/// Rebuild the grid from a persisted JSON value.
///
/// Entries are matched to slots by position and merged field by field onto
/// blank rows; ids always come from the position and durations are derived
/// again from their start and end times. Anything that is not an array
/// yields a blank grid.
pub fn reconcile(value: &Value, today: NaiveDate) -> Vec<TaskRecord> {
    let mut records = initial_records(today);

    let Some(entries) = value.as_array() else {
        return records;
    };

    for (slot, entry) in entries.iter().take(NUM_TASK_ROWS).enumerate() {
        let Some(obj) = entry.as_object() else {
            continue;
        };
        let base = &mut records[slot];

        let text = |key: &str, fallback: &str| -> String {
            match obj.get(key) {
                Some(Value::String(s)) => s.clone(),
                Some(Value::Number(n)) => n.to_string(),
                _ => fallback.to_string(),
            }
        };

        base.date = text("date", &base.date);
        base.activity = text("activity", "");
        base.priority = text("priority", "");
        base.project_category = text("projectCategory", "");
        base.planned_start = text("plannedStart", "");
        base.planned_end = text("plannedEnd", "");
        base.actual_start = text("actualStart", "");
        base.actual_end = text("actualEnd", "");
        base.done = obj.get("done").and_then(Value::as_bool).unwrap_or(false);
        base.planned_duration = duration(&base.planned_start, &base.planned_end);
        base.actual_duration = duration(&base.actual_start, &base.actual_end);
    }

    records
}
