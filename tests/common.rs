#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::NaiveDate;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

use rtimegrid::models::{LoadingMarker, LogEntry, Selection, SelectionStatus};
use rtimegrid::state::RegistrationState;

/// The binary with `HOME` pointed away from the developer's own config.
pub fn rtg() -> Command {
    let mut cmd = cargo_bin_cmd!("rtimegrid");
    cmd.env("HOME", env!("CARGO_TARGET_TMPDIR"));
    cmd
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// Fresh session showing June 2025, with "today" in the middle of it.
pub fn june_state() -> RegistrationState {
    let state = RegistrationState::new(d(2025, 6, 16));
    state.month.set(d(2025, 6, 1));
    state
}

pub fn entry(task_id: i64, date: NaiveDate, hours: f64, wfh: bool) -> LogEntry {
    LogEntry::new(task_id, date, hours, wfh)
}

pub fn selection(task_id: i64, day: NaiveDate, status: SelectionStatus) -> Selection {
    Selection::new(task_id, day, status)
}

pub fn markers(n: usize) -> Vec<LoadingMarker> {
    (0..n)
        .map(|i| LoadingMarker::new(100 + i as i64, d(2025, 6, 2)))
        .collect()
}

pub fn selections(n: usize) -> Vec<Selection> {
    (0..n)
        .map(|i| selection(100, d(2025, 6, 2 + i as u32), SelectionStatus::Selected))
        .collect()
}

/// Write `json` as a snapshot file inside a fresh temp dir.
pub fn write_snapshot(json: &str) -> (TempDir, String) {
    let dir = TempDir::new().expect("temp dir");
    let path: PathBuf = dir.path().join("snapshot.json");
    fs::write(&path, json).expect("write snapshot");
    (dir, path.to_string_lossy().to_string())
}

/// A June 2025 month with an office day, a home day, a mixed day and a
/// holiday clash, two imported cells and a type-of-work catalog.
pub const JUNE_SNAPSHOT: &str = r#"{
    "month": "2025-06-01",
    "today": "2025-06-16",
    "display_weekend": false,
    "log_entries": [
        { "task_id": 101, "date": "2025-06-02", "hours": 8.0, "is_work_from_home": false },
        { "task_id": 101, "date": "2025-06-03", "hours": 6.0, "is_work_from_home": true },
        { "task_id": 102, "date": "2025-06-03", "hours": 2.0, "is_work_from_home": true },
        { "task_id": 101, "date": "2025-06-04", "hours": 4.0, "is_work_from_home": true },
        { "task_id": 102, "date": "2025-06-04", "hours": 4.0, "is_work_from_home": false },
        { "task_id": 101, "date": "2025-06-05", "hours": 4.0 },
        { "task_id": 193, "date": "2025-06-05", "hours": 4.0 }
    ],
    "selections": [
        { "task_id": 101, "day": "2025-06-02", "status": "imported" },
        { "task_id": 102, "day": "2025-06-03", "status": "updated" }
    ],
    "import_info": { "is_work_from_home": false, "selected_type_of_work_index": 1 },
    "types_of_work": [
        { "key": "PROG", "name": "Programming" },
        { "key": "MEET", "name": "Meetings" }
    ],
    "favorites": [ { "task_number": 102 } ]
}"#;
