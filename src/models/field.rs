use crate::errors::{AppError, AppResult};
use crate::utils::{date, time};
use clap::ValueEnum;

/// Columns a user may edit. Durations and the id are derived and absent here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum EditableField {
    Date,
    Activity,
    Priority,
    Done,
    PlannedStart,
    PlannedEnd,
    ActualStart,
    ActualEnd,
    Category,
}

impl EditableField {
    pub fn as_str(&self) -> &'static str {
        match self {
            EditableField::Date => "date",
            EditableField::Activity => "activity",
            EditableField::Priority => "priority",
            EditableField::Done => "done",
            EditableField::PlannedStart => "planned-start",
            EditableField::PlannedEnd => "planned-end",
            EditableField::ActualStart => "actual-start",
            EditableField::ActualEnd => "actual-end",
            EditableField::Category => "category",
        }
    }
}

/// A single field-level edit of a task record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Date(String),
    Activity(String),
    Priority(String),
    Done(bool),
    PlannedStart(String),
    PlannedEnd(String),
    ActualStart(String),
    ActualEnd(String),
    ProjectCategory(String),
}

impl FieldUpdate {
    /// Build an update from raw command-line input.
    ///
    /// Times must be `HH:MM` (normalised to two-digit hours) or empty to
    /// clear the cell; dates must be `YYYY-MM-DD`.
    pub fn parse(field: EditableField, raw: &str) -> AppResult<Self> {
        let value = raw.trim();

        let update = match field {
            EditableField::Date => {
                let d = date::parse_date(value)
                    .ok_or_else(|| AppError::InvalidDate(value.to_string()))?;
                FieldUpdate::Date(d.format("%Y-%m-%d").to_string())
            }
            EditableField::Activity => FieldUpdate::Activity(value.to_string()),
            EditableField::Priority => FieldUpdate::Priority(value.to_string()),
            EditableField::Category => FieldUpdate::ProjectCategory(value.to_string()),
            EditableField::Done => FieldUpdate::Done(parse_flag(value).ok_or_else(|| {
                AppError::InvalidValue {
                    field: field.as_str().to_string(),
                    value: value.to_string(),
                }
            })?),
            EditableField::PlannedStart => FieldUpdate::PlannedStart(clock_value(value)?),
            EditableField::PlannedEnd => FieldUpdate::PlannedEnd(clock_value(value)?),
            EditableField::ActualStart => FieldUpdate::ActualStart(clock_value(value)?),
            EditableField::ActualEnd => FieldUpdate::ActualEnd(clock_value(value)?),
        };

        Ok(update)
    }
}

fn clock_value(value: &str) -> AppResult<String> {
    if value.is_empty() {
        return Ok(String::new());
    }
    time::parse_time(value)
        .map(time::format_time)
        .ok_or_else(|| AppError::InvalidTime(value.to_string()))
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "yes" | "y" | "1" | "x" => Some(true),
        "false" | "no" | "n" | "0" | "" => Some(false),
        _ => None,
    }
}
