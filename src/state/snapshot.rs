//! Read-only JSON snapshot of every root container.
//!
//! Produced by the data collaborator; the CLI uses it to seed a session.

use std::fs;
use std::path::Path;

use chrono::NaiveDate;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::errors::{AppError, AppResult};
use crate::models::{
    EnteringMode, FavoriteTask, ImportInfo, LoadingMarker, LogEntry, Selection, TypeOfWork,
};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StateSnapshot {
    pub month: Option<NaiveDate>,
    pub today: Option<NaiveDate>,
    pub display_weekend: Option<bool>,
    pub entering_mode: EnteringMode,
    pub logs_loading: bool,
    pub log_entries: Vec<LogEntry>,
    pub selections: Vec<Selection>,
    pub loading: Vec<LoadingMarker>,
    pub import_info: ImportInfo,
    pub types_of_work: Vec<TypeOfWork>,
    pub favorites: Vec<FavoriteTask>,
}

impl StateSnapshot {
    pub fn from_json(json: &str) -> AppResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Err(AppError::Snapshot(format!(
                "snapshot file not found: {}",
                path.display()
            )));
        }

        let content = fs::read_to_string(path)?;
        let snapshot = Self::from_json(&content)?;
        debug!(
            "loaded snapshot {}: {} log entries, {} selections, {} loading markers",
            path.display(),
            snapshot.log_entries.len(),
            snapshot.selections.len(),
            snapshot.loading.len()
        );
        Ok(snapshot)
    }
}
