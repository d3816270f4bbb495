//! Derived views over a [`RegistrationState`].
//!
//! Month-level views are built once in [`GridViews::new`]. Cell-level views
//! (`total_hours_for_day`, `is_log_invalid`, ...) are factories: each call
//! returns a fresh [`Derived`] that lives as long as the caller keeps it.

use chrono::NaiveDate;

use crate::core::days::{self, DateRange};
use crate::core::logic::Core;
use crate::core::{calculator, favorites, hint, import, status, totals, validity};
use crate::models::{LogEntry, MonthSummary, Selection, SelectionStatus};
use crate::reactive::{Derived, Readable, derived, derived2, derived4, derived5};
use crate::state::RegistrationState;

pub struct GridViews {
    state: RegistrationState,

    pub days_range: Derived<Vec<NaiveDate>>,
    pub displayed_date_range: Derived<DateRange>,
    pub total_for_month_needed: Derived<f64>,
    pub total_for_month: Derived<f64>,
    pub is_any_log_loading: Derived<bool>,
    pub is_grid_read_only: Derived<bool>,
    pub hint_message: Derived<String>,
    pub has_imported_data: Derived<bool>,
    pub selected: Derived<Vec<Selection>>,
    pub imported: Derived<Vec<Selection>>,
    pub affected_logs_during_import: Derived<Vec<Selection>>,
    pub imported_entries: Derived<Vec<LogEntry>>,
    pub affected_entries_during_import: Derived<Vec<LogEntry>>,
    pub is_import_metadata_ready: Derived<bool>,
    pub selected_type_of_work_key: Derived<String>,
    pub favorite_task_ids: Derived<Vec<i64>>,
    pub month_summary: Derived<MonthSummary>,
}

impl GridViews {
    pub fn new(state: &RegistrationState) -> Self {
        let days_range = derived2(&state.month, &state.display_weekend, |month, weekend| {
            days::days_range(*month, *weekend)
        });
        let displayed_date_range = state.month.map(|month| days::displayed_date_range(*month));

        let total_for_month_needed = state
            .month
            .map(|month| calculator::expected::calculate_required(*month));
        let total_for_month = state.log_entries.map(|entries| totals::total_for_month(entries));

        let is_any_log_loading = state.loading.map(|loading| status::is_any_loading(loading));
        let is_grid_read_only = derived2(&state.month, &state.today, |month, today| {
            validity::is_grid_read_only(*month, *today)
        });

        let hint_message = derived5(
            &is_grid_read_only,
            &state.logs_loading,
            &state.selections,
            &state.loading,
            &state.entering_mode,
            |past, logs_loading, selections, loading, mode| {
                hint::hint_message(*past, *logs_loading, selections, loading, *mode)
            },
        );

        let has_imported_data = state
            .selections
            .map(|selections| status::has_imported_data(selections));
        let selected = state.selections.map(|selections| {
            status::filter_by_status(selections, &[SelectionStatus::Selected])
        });
        let imported = state.selections.map(|selections| {
            status::filter_by_status(selections, &[SelectionStatus::Imported])
        });
        let affected_logs_during_import = state.selections.map(|selections| {
            status::filter_by_status(
                selections,
                &[SelectionStatus::Imported, SelectionStatus::Updated],
            )
        });

        let imported_entries = derived2(&imported, &state.log_entries, |imported, entries| {
            import::entries_for_selections(entries, imported)
        });
        let affected_entries_during_import = derived2(
            &affected_logs_during_import,
            &state.log_entries,
            |affected, entries| import::entries_for_selections(entries, affected),
        );

        let is_import_metadata_ready = state
            .import_info
            .map(|info| import::is_import_metadata_ready(info));
        let selected_type_of_work_key =
            derived2(&state.import_info, &state.types_of_work, |info, catalog| {
                import::selected_type_of_work_key(info, catalog)
            });

        let favorite_task_ids = state
            .favorites
            .map(|favs| favorites::favorite_task_ids(favs));

        let month_summary = derived4(
            &state.month,
            &total_for_month,
            &total_for_month_needed,
            &is_grid_read_only,
            |month, total, required, read_only| {
                Core::summary_from_totals(*month, *total, *required, *read_only)
            },
        );

        Self {
            state: state.clone(),
            days_range,
            displayed_date_range,
            total_for_month_needed,
            total_for_month,
            is_any_log_loading,
            is_grid_read_only,
            hint_message,
            has_imported_data,
            selected,
            imported,
            affected_logs_during_import,
            imported_entries,
            affected_entries_during_import,
            is_import_metadata_ready,
            selected_type_of_work_key,
            favorite_task_ids,
            month_summary,
        }
    }

    pub fn log_info(&self, task_id: i64, date: NaiveDate) -> Derived<Option<LogEntry>> {
        derived(&self.state.log_entries, move |entries| {
            totals::log_info(entries, task_id, date)
        })
    }

    pub fn total_hours_for_day(&self, date: NaiveDate) -> Derived<f64> {
        derived(&self.state.log_entries, move |entries| {
            totals::total_hours_for_day(entries, date)
        })
    }

    pub fn total_hours_for_task(&self, task_id: i64) -> Derived<f64> {
        derived(&self.state.log_entries, move |entries| {
            totals::total_hours_for_task(entries, task_id)
        })
    }

    pub fn is_work_from_home(&self, date: NaiveDate) -> Derived<Option<bool>> {
        derived(&self.state.log_entries, move |entries| {
            totals::is_work_from_home(entries, date)
        })
    }

    pub fn is_log_selected(&self, task_id: i64, date: NaiveDate) -> Derived<bool> {
        self.cell_status(task_id, date, SelectionStatus::Selected)
    }

    pub fn is_log_imported(&self, task_id: i64, date: NaiveDate) -> Derived<bool> {
        self.cell_status(task_id, date, SelectionStatus::Imported)
    }

    pub fn is_log_updated(&self, task_id: i64, date: NaiveDate) -> Derived<bool> {
        self.cell_status(task_id, date, SelectionStatus::Updated)
    }

    fn cell_status(&self, task_id: i64, date: NaiveDate, wanted: SelectionStatus) -> Derived<bool> {
        derived(&self.state.selections, move |selections| {
            status::has_status(selections, task_id, date, wanted)
        })
    }

    pub fn is_log_loading(&self, task_id: i64, date: NaiveDate) -> Derived<bool> {
        derived(&self.state.loading, move |loading| {
            status::is_loading(loading, task_id, date)
        })
    }

    pub fn is_log_invalid(&self, task_id: i64, date: NaiveDate) -> Derived<bool> {
        derived(&self.state.log_entries, move |entries| {
            validity::is_log_invalid(entries, task_id, date)
        })
    }

    pub fn is_task_favorite(&self, task_id: i64) -> Derived<bool> {
        derived(&self.favorite_task_ids, move |ids| {
            favorites::is_task_favorite(ids, task_id)
        })
    }

    /// Root containers these views read.
    pub fn state(&self) -> &RegistrationState {
        &self.state
    }
}
