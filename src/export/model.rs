// src/export/model.rs

use crate::models::task::TaskRecord;
use serde::Serialize;

/// How a column is written to (and read back from) a spreadsheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Number,
    Date,
    Time,
    Text,
}

pub const COL_ID: &str = "ID";
pub const COL_DATE: &str = "Date";
pub const COL_ACTIVITY: &str = "Activity";
pub const COL_PRIORITY: &str = "Priority";
pub const COL_STATUS: &str = "Status";
pub const COL_PLANNED_DURATION: &str = "Planned Duration (min)";
pub const COL_PLANNED_START: &str = "Planned Start";
pub const COL_PLANNED_END: &str = "Planned End";
pub const COL_ACTUAL_START: &str = "Actual Start";
pub const COL_ACTUAL_END: &str = "Actual End";
pub const COL_ACTUAL_DURATION: &str = "Actual Duration (min)";
pub const COL_CATEGORY: &str = "Project Category";

/// Sheet layout: header label, column width hint (characters), cell kind.
pub const COLUMNS: [(&str, f64, ColumnKind); 12] = [
    (COL_ID, 5.0, ColumnKind::Number),
    (COL_DATE, 12.0, ColumnKind::Date),
    (COL_ACTIVITY, 40.0, ColumnKind::Text),
    (COL_PRIORITY, 10.0, ColumnKind::Text),
    (COL_STATUS, 15.0, ColumnKind::Text),
    (COL_PLANNED_DURATION, 20.0, ColumnKind::Number),
    (COL_PLANNED_START, 15.0, ColumnKind::Time),
    (COL_PLANNED_END, 15.0, ColumnKind::Time),
    (COL_ACTUAL_START, 15.0, ColumnKind::Time),
    (COL_ACTUAL_END, 15.0, ColumnKind::Time),
    (COL_ACTUAL_DURATION, 20.0, ColumnKind::Number),
    (COL_CATEGORY, 30.0, ColumnKind::Text),
];

/// Flat row written for each exported task.
#[derive(Serialize, Clone, Debug, PartialEq, Eq)]
pub struct TaskExport {
    #[serde(rename = "ID")]
    pub id: u32,
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Activity")]
    pub activity: String,
    #[serde(rename = "Priority")]
    pub priority: String,
    #[serde(rename = "Status")]
    pub status: String,
    #[serde(rename = "Planned Duration (min)")]
    pub planned_duration: String,
    #[serde(rename = "Planned Start")]
    pub planned_start: String,
    #[serde(rename = "Planned End")]
    pub planned_end: String,
    #[serde(rename = "Actual Start")]
    pub actual_start: String,
    #[serde(rename = "Actual End")]
    pub actual_end: String,
    #[serde(rename = "Actual Duration (min)")]
    pub actual_duration: String,
    #[serde(rename = "Project Category")]
    pub project_category: String,
}

impl From<&TaskRecord> for TaskExport {
    fn from(t: &TaskRecord) -> Self {
        Self {
            id: t.id,
            date: t.date.clone(),
            activity: t.activity.clone(),
            priority: t.priority.clone(),
            status: t.status().as_str().to_string(),
            planned_duration: t.planned_duration.clone(),
            planned_start: t.planned_start.clone(),
            planned_end: t.planned_end.clone(),
            actual_start: t.actual_start.clone(),
            actual_end: t.actual_end.clone(),
            actual_duration: t.actual_duration.clone(),
            project_category: t.project_category.clone(),
        }
    }
}

/// Cell values in [`COLUMNS`] order.
pub(crate) fn task_to_row(e: &TaskExport) -> [String; 12] {
    [
        e.id.to_string(),
        e.date.clone(),
        e.activity.clone(),
        e.priority.clone(),
        e.status.clone(),
        e.planned_duration.clone(),
        e.planned_start.clone(),
        e.planned_end.clone(),
        e.actual_start.clone(),
        e.actual_end.clone(),
        e.actual_duration.clone(),
        e.project_category.clone(),
    ]
}

/// Rows eligible for export: those with a non-blank activity.
pub fn exportable(records: &[TaskRecord]) -> Vec<TaskExport> {
    records
        .iter()
        .filter(|t| t.has_activity())
        .map(TaskExport::from)
        .collect()
}
