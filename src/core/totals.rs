//! Aggregates shown above the grid.

use crate::core::duration::minutes_value;
use crate::models::task::TaskRecord;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Totals {
    pub planned_hours: f64,
    pub actual_hours: f64,
}

/// Planned and actual time across every row, in hours.
pub fn totals(records: &[TaskRecord]) -> Totals {
    let (planned, actual) = records.iter().fold((0.0, 0.0), |(p, a), t| {
        (
            p + minutes_value(&t.planned_duration),
            a + minutes_value(&t.actual_duration),
        )
    });

    Totals {
        planned_hours: planned / 60.0,
        actual_hours: actual / 60.0,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percent: u32,
}

/// Share of tasks with an activity that are done, rounded to a whole percent.
pub fn progress(records: &[TaskRecord]) -> Progress {
    let relevant: Vec<&TaskRecord> = records.iter().filter(|t| t.has_activity()).collect();
    let total = relevant.len();
    let completed = relevant.iter().filter(|t| t.done).count();

    let percent = if total > 0 {
        ((completed as f64 / total as f64) * 100.0).round() as u32
    } else {
        0
    };

    Progress {
        completed,
        total,
        percent,
    }
}
