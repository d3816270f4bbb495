//! Helpers for the import flow.

use crate::models::{ImportInfo, LogEntry, Selection, TypeOfWork};

/// Used whenever the catalog cannot resolve the chosen type of work.
pub const DEFAULT_TYPE_OF_WORK: &str = "PROG";

/// Entries backing the given selections, in entry order.
pub fn entries_for_selections(entries: &[LogEntry], selections: &[Selection]) -> Vec<LogEntry> {
    entries
        .iter()
        .filter(|e| selections.iter().any(|s| s.matches(e.task_id, e.date)))
        .cloned()
        .collect()
}

/// Work place and type of work must both be chosen; the work-from-home start
/// date is only required when working from home.
pub fn is_import_metadata_ready(info: &ImportInfo) -> bool {
    match (info.is_work_from_home, info.selected_type_of_work_index) {
        (Some(true), Some(_)) => info.work_from_home_start.is_some(),
        (Some(false), Some(_)) => true,
        _ => false,
    }
}

pub fn selected_type_of_work_key(info: &ImportInfo, catalog: &[TypeOfWork]) -> String {
    info.selected_type_of_work_index
        .and_then(|index| catalog.get(index))
        .and_then(|tow| tow.key.clone())
        .unwrap_or_else(|| DEFAULT_TYPE_OF_WORK.to_string())
}
