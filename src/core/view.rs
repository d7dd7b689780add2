//! Filter and sort pipeline producing the rows shown in the grid.

use crate::core::duration::minutes_value;
use crate::models::task::TaskRecord;
use crate::models::view::{ALL, Filters, SortConfig, SortDirection, SortKey};
use std::cmp::Ordering;

/// The displayed subset of `records`: filtered, then sorted when a sort key
/// is set. The store itself is never reordered.
pub fn view<'a>(records: &'a [TaskRecord], filters: &Filters, sort: &SortConfig) -> Vec<&'a TaskRecord> {
    let mut rows: Vec<&TaskRecord> = records.iter().filter(|t| matches(t, filters)).collect();

    if let Some(key) = sort.key {
        // stable: equal rows keep their grid order
        rows.sort_by(|a, b| compare(a, b, key, sort.direction));
    }

    rows
}

/// Whether a single record passes the three filters. Blank template rows
/// always pass so they stay editable.
pub fn matches(t: &TaskRecord, filters: &Filters) -> bool {
    if t.is_blank() {
        return true;
    }

    filters.status.matches(t.status())
        && text_matches(&filters.priority, &t.priority)
        && text_matches(&filters.category, &t.project_category)
}

fn text_matches(filter: &str, value: &str) -> bool {
    let filter = filter.trim();
    if filter.is_empty() || filter.eq_ignore_ascii_case(ALL) {
        return true;
    }
    value.trim().to_lowercase() == filter.to_lowercase()
}

fn compare(a: &TaskRecord, b: &TaskRecord, key: SortKey, direction: SortDirection) -> Ordering {
    // rows without an activity sink to the bottom in either direction
    match (a.has_activity(), b.has_activity()) {
        (false, false) => return Ordering::Equal,
        (false, true) => return Ordering::Greater,
        (true, false) => return Ordering::Less,
        (true, true) => {}
    }

    let (av, bv) = (key.value(a), key.value(b));

    // blank cells of the sort column also go last, whatever the direction
    if key.blanks_last() {
        match (av.trim().is_empty(), bv.trim().is_empty()) {
            (true, true) => return Ordering::Equal,
            (true, false) => return Ordering::Greater,
            (false, true) => return Ordering::Less,
            (false, false) => {}
        }
    }

    let ordering = if key.is_numeric() {
        minutes_value(av)
            .partial_cmp(&minutes_value(bv))
            .unwrap_or(Ordering::Equal)
    } else {
        av.cmp(bv)
    };

    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Filter menu entries: `All` followed by each distinct priority in the
/// order it first appears.
pub fn available_priorities(records: &[TaskRecord]) -> Vec<String> {
    facet(records.iter().map(|t| t.priority.as_str()))
}

pub fn available_categories(records: &[TaskRecord]) -> Vec<String> {
    facet(records.iter().map(|t| t.project_category.as_str()))
}

fn facet<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut out = vec![ALL.to_string()];
    for v in values.map(str::trim).filter(|v| !v.is_empty()) {
        if !out[1..].iter().any(|seen| seen == v) {
            out.push(v.to_string());
        }
    }
    out
}
