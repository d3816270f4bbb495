//! Sums and lookups over log entries.
//!
//! Entries may repeat for one (task, day), so every total is a sum.

use chrono::NaiveDate;

use crate::models::LogEntry;

/// First entry for the cell, if any.
pub fn log_info(entries: &[LogEntry], task_id: i64, date: NaiveDate) -> Option<LogEntry> {
    entries.iter().find(|e| e.matches(task_id, date)).cloned()
}

pub fn total_hours_for_day(entries: &[LogEntry], date: NaiveDate) -> f64 {
    entries.iter().filter(|e| e.is_on(date)).map(|e| e.hours).sum()
}

pub fn total_hours_for_task(entries: &[LogEntry], task_id: i64) -> f64 {
    entries
        .iter()
        .filter(|e| e.task_id == task_id)
        .map(|e| e.hours)
        .sum()
}

/// Sum over every loaded entry. The loader already scopes entries to the
/// displayed month, so dates are not filtered here.
pub fn total_for_month(entries: &[LogEntry]) -> f64 {
    entries.iter().map(|e| e.hours).sum()
}

/// `Some(true)` when the day was worked from home only, `None` when home and
/// office entries are mixed, `Some(false)` otherwise (including no entries).
pub fn is_work_from_home(entries: &[LogEntry], date: NaiveDate) -> Option<bool> {
    let mut from_home = false;
    let mut from_office = false;
    for entry in entries.iter().filter(|e| e.is_on(date)) {
        if entry.is_work_from_home {
            from_home = true;
        } else {
            from_office = true;
        }
    }

    if from_home && from_office {
        None
    } else {
        Some(from_home)
    }
}
