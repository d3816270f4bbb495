//! Root state containers of one registration session.
//!
//! # Responsibility
//! - Hold the authoritative mutable facts the derived views read.
//! - Group them in one explicit struct owned by the application shell.
//!
//! # Invariants
//! - Nothing in `core` mutates these containers; only collaborators do.
//! - Wholesale replacement from a snapshot is a single batch.

pub mod snapshot;

use chrono::NaiveDate;

use crate::models::{
    EnteringMode, FavoriteTask, ImportInfo, LoadingMarker, LogEntry, Selection, TypeOfWork,
};
use crate::reactive::{State, batch};
use crate::utils::date;

pub use snapshot::StateSnapshot;

#[derive(Clone, Debug)]
pub struct RegistrationState {
    /// Entries loaded for the displayed month.
    pub log_entries: State<Vec<LogEntry>>,
    /// True while the month's entries are being fetched.
    pub logs_loading: State<bool>,
    pub selections: State<Vec<Selection>>,
    /// Cells whose entries are being saved.
    pub loading: State<Vec<LoadingMarker>>,
    /// Any day of the displayed month.
    pub month: State<NaiveDate>,
    pub entering_mode: State<EnteringMode>,
    pub display_weekend: State<bool>,
    pub import_info: State<ImportInfo>,
    pub types_of_work: State<Vec<TypeOfWork>>,
    pub favorites: State<Vec<FavoriteTask>>,
    /// Present real-world date; the shell moves it forward.
    pub today: State<NaiveDate>,
}

impl RegistrationState {
    /// Empty session showing the month of `today`.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            log_entries: State::default(),
            logs_loading: State::new(false),
            selections: State::default(),
            loading: State::default(),
            month: State::new(date::start_of_month(today)),
            entering_mode: State::default(),
            display_weekend: State::new(false),
            import_info: State::default(),
            types_of_work: State::default(),
            favorites: State::default(),
            today: State::new(today),
        }
    }

    pub fn from_snapshot(snapshot: StateSnapshot, today: NaiveDate) -> Self {
        let state = Self::new(today);
        state.apply(snapshot);
        state
    }

    /// Replaces every container with the snapshot's values as one batch.
    /// Absent `month`/`today`/`display_weekend` keep their current values.
    pub fn apply(&self, snapshot: StateSnapshot) {
        batch(|| {
            if let Some(today) = snapshot.today {
                self.today.set(today);
            }
            if let Some(month) = snapshot.month {
                self.month.set(month);
            }
            if let Some(display_weekend) = snapshot.display_weekend {
                self.display_weekend.set(display_weekend);
            }
            self.entering_mode.set(snapshot.entering_mode);
            self.logs_loading.set(snapshot.logs_loading);
            self.log_entries.set(snapshot.log_entries);
            self.selections.set(snapshot.selections);
            self.loading.set(snapshot.loading);
            self.import_info.set(snapshot.import_info);
            self.types_of_work.set(snapshot.types_of_work);
            self.favorites.set(snapshot.favorites);
        });
    }
}
