//! Cell status lookups over selections and loading markers.

use chrono::NaiveDate;

use crate::models::{LoadingMarker, Selection, SelectionStatus};

/// Matches on the full (task, day, status) triple; a cell may hold several
/// statuses at once.
pub fn has_status(
    selections: &[Selection],
    task_id: i64,
    date: NaiveDate,
    status: SelectionStatus,
) -> bool {
    selections
        .iter()
        .any(|s| s.matches(task_id, date) && s.status == status)
}

pub fn is_any_loading(loading: &[LoadingMarker]) -> bool {
    !loading.is_empty()
}

pub fn is_loading(loading: &[LoadingMarker], task_id: i64, date: NaiveDate) -> bool {
    loading.iter().any(|l| l.matches(task_id, date))
}

pub fn filter_by_status(selections: &[Selection], statuses: &[SelectionStatus]) -> Vec<Selection> {
    selections
        .iter()
        .filter(|s| statuses.contains(&s.status))
        .cloned()
        .collect()
}

pub fn has_imported_data(selections: &[Selection]) -> bool {
    selections.iter().any(|s| s.status.is_from_import())
}
