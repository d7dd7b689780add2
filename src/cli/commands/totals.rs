use crate::cli::commands::open_store;
use crate::config::Config;
use crate::core::totals::{progress, totals};
use crate::errors::AppResult;
use crate::models::task::TaskRecord;
use crate::utils::time::format_hours;

pub fn handle(cfg: &Config) -> AppResult<()> {
    let (_pool, store) = open_store(cfg)?;
    print_summary(store.records());
    Ok(())
}

/// Planned/actual hours and completion, as shown under the grid.
pub(crate) fn print_summary(records: &[TaskRecord]) {
    let t = totals(records);
    let p = progress(records);

    println!(
        "Planned: {} | Actual: {}",
        format_hours(t.planned_hours),
        format_hours(t.actual_hours)
    );
    println!(
        "Progress: {}% ({} of {} tasks done)",
        p.percent, p.completed, p.total
    );
}
