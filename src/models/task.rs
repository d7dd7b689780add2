use super::status::Status;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Number of fixed rows in the daily grid.
pub const NUM_TASK_ROWS: usize = 20;

/// One row of the daily grid.
///
/// Times are kept as the `HH:MM` text the user typed; durations are minutes
/// rendered as text and are only ever written by the store after a time edit.
/// The serialized names are the camelCase keys of the persisted JSON snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskRecord {
    pub id: u32,
    pub date: String,
    pub activity: String,
    pub priority: String,
    pub done: bool,
    pub planned_duration: String,
    pub planned_start: String,
    pub planned_end: String,
    pub actual_start: String,
    pub actual_end: String,
    pub actual_duration: String,
    pub project_category: String,
}

impl TaskRecord {
    /// An unused row for slot `id`, dated `date`.
    pub fn blank(id: u32, date: NaiveDate) -> Self {
        Self {
            id,
            date: date.format("%Y-%m-%d").to_string(),
            activity: String::new(),
            priority: String::new(),
            done: false,
            planned_duration: String::new(),
            planned_start: String::new(),
            planned_end: String::new(),
            actual_start: String::new(),
            actual_end: String::new(),
            actual_duration: String::new(),
            project_category: String::new(),
        }
    }

    pub fn status(&self) -> Status {
        if self.done {
            Status::Done
        } else if !self.actual_start.is_empty() {
            Status::InProgress
        } else {
            Status::NotStarted
        }
    }

    /// True when the row carries a task description.
    pub fn has_activity(&self) -> bool {
        !self.activity.trim().is_empty()
    }

    /// A template row nobody has touched yet; such rows survive every filter.
    pub fn is_blank(&self) -> bool {
        self.activity.is_empty()
            && self.priority.is_empty()
            && self.planned_start.is_empty()
            && self.actual_start.is_empty()
            && self.project_category.is_empty()
    }
}

/// A fresh grid of [`NUM_TASK_ROWS`] blank rows numbered from 1.
pub fn initial_records(date: NaiveDate) -> Vec<TaskRecord> {
    (1..=NUM_TASK_ROWS as u32)
        .map(|id| TaskRecord::blank(id, date))
        .collect()
}
