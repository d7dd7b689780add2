use super::status::Status;
use super::task::TaskRecord;
use crate::errors::{AppError, AppResult};
use clap::ValueEnum;
use std::str::FromStr;

/// Literal accepted by every filter to mean "no restriction".
pub const ALL: &str = "All";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    /// Not started or in progress.
    Pending,
    Completed,
    Exact(Status),
}

impl StatusFilter {
    pub fn matches(&self, status: Status) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Pending => status.is_pending(),
            StatusFilter::Completed => status == Status::Done,
            StatusFilter::Exact(s) => *s == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = AppError;

    fn from_str(s: &str) -> AppResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(StatusFilter::All),
            "pending" => Ok(StatusFilter::Pending),
            "completed" => Ok(StatusFilter::Completed),
            other => Status::from_label(other)
                .map(StatusFilter::Exact)
                .ok_or_else(|| AppError::InvalidStatus(s.to_string())),
        }
    }
}

/// The three filter menus of the grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Filters {
    pub status: StatusFilter,
    pub priority: String,
    pub category: String,
}

impl Default for Filters {
    fn default() -> Self {
        Self {
            status: StatusFilter::All,
            priority: ALL.to_string(),
            category: ALL.to_string(),
        }
    }
}

/// Columns the grid can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SortKey {
    Date,
    Activity,
    Priority,
    PlannedDuration,
    PlannedStart,
    PlannedEnd,
    ActualStart,
    ActualEnd,
    ActualDuration,
    Category,
}

impl SortKey {
    pub fn is_numeric(&self) -> bool {
        matches!(self, SortKey::PlannedDuration | SortKey::ActualDuration)
    }

    /// Whether a blank cell of this column sorts after every filled one.
    /// A blank planned duration counts as zero minutes instead.
    pub fn blanks_last(&self) -> bool {
        !matches!(self, SortKey::PlannedDuration)
    }

    pub fn value<'a>(&self, t: &'a TaskRecord) -> &'a str {
        match self {
            SortKey::Date => &t.date,
            SortKey::Activity => &t.activity,
            SortKey::Priority => &t.priority,
            SortKey::PlannedDuration => &t.planned_duration,
            SortKey::PlannedStart => &t.planned_start,
            SortKey::PlannedEnd => &t.planned_end,
            SortKey::ActualStart => &t.actual_start,
            SortKey::ActualEnd => &t.actual_end,
            SortKey::ActualDuration => &t.actual_duration,
            SortKey::Category => &t.project_category,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SortConfig {
    pub key: Option<SortKey>,
    pub direction: SortDirection,
}

impl SortConfig {
    pub fn by(key: SortKey, direction: SortDirection) -> Self {
        Self {
            key: Some(key),
            direction,
        }
    }

    /// Header-click behaviour: ascending first, a second click on the same
    /// column flips to descending, anything else starts over ascending.
    pub fn toggled(&self, key: SortKey) -> Self {
        let direction = if self.key == Some(key) && self.direction == SortDirection::Ascending {
            SortDirection::Descending
        } else {
            SortDirection::Ascending
        };
        Self::by(key, direction)
    }
}
