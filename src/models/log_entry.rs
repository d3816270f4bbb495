use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Hours logged on one task for one day.
///
/// Several entries may share the same `(task_id, date)` pair (split hours), so
/// anything that aggregates must sum rather than look up a single entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogEntry {
    pub task_id: i64,
    pub date: NaiveDate, // day-level; time of day never matters
    pub hours: f64,
    #[serde(default)]
    pub is_work_from_home: bool,
}

impl LogEntry {
    pub fn new(task_id: i64, date: NaiveDate, hours: f64, is_work_from_home: bool) -> Self {
        Self {
            task_id,
            date,
            hours,
            is_work_from_home,
        }
    }

    pub fn is_on(&self, date: NaiveDate) -> bool {
        self.date == date
    }

    pub fn matches(&self, task_id: i64, date: NaiveDate) -> bool {
        self.task_id == task_id && self.date == date
    }
}
