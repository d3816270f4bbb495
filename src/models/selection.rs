use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Interaction state of a grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SelectionStatus {
    Selected,
    Imported,
    Updated,
}

impl SelectionStatus {
    /// Imported and updated cells both come from an import run.
    pub fn is_from_import(&self) -> bool {
        matches!(self, SelectionStatus::Imported | SelectionStatus::Updated)
    }
}

/// A status record for a cell, independent of whether a log entry backs it.
///
/// Selections live in a list: the same cell may carry several statuses at once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub task_id: i64,
    pub day: NaiveDate,
    pub status: SelectionStatus,
}

impl Selection {
    pub fn new(task_id: i64, day: NaiveDate, status: SelectionStatus) -> Self {
        Self {
            task_id,
            day,
            status,
        }
    }

    pub fn matches(&self, task_id: i64, day: NaiveDate) -> bool {
        self.task_id == task_id && self.day == day
    }
}

/// A cell whose backing entry is being saved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoadingMarker {
    pub task_id: i64,
    pub day: NaiveDate,
}

impl LoadingMarker {
    pub fn new(task_id: i64, day: NaiveDate) -> Self {
        Self { task_id, day }
    }

    pub fn matches(&self, task_id: i64, day: NaiveDate) -> bool {
        self.task_id == task_id && self.day == day
    }
}
