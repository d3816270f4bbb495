use std::cell::RefCell;
use std::rc::Rc;

use chrono::{Datelike, Weekday};
use rtimegrid::core::logic::Core;
use rtimegrid::core::{GridViews, totals, validity};
use rtimegrid::models::{FavoriteTask, SelectionStatus};
use rtimegrid::reactive::{Readable, batch};

mod common;
use common::{d, entry, june_state, markers, selection};

#[test]
fn weekday_range_is_the_full_range_minus_weekends() {
    let state = june_state();
    let views = GridViews::new(&state);

    let weekdays = views.days_range.get();
    state.display_weekend.set(true);
    let all = views.days_range.get();

    assert_eq!(all.len(), 30);
    assert_eq!(weekdays.len(), 21);
    assert_eq!(all.first(), Some(&d(2025, 6, 1)));
    assert_eq!(all.last(), Some(&d(2025, 6, 30)));
    assert!(weekdays.iter().all(|day| all.contains(day)));

    let excluded: Vec<_> = all.iter().filter(|day| !weekdays.contains(day)).collect();
    assert_eq!(excluded.len(), 9);
    assert!(
        excluded
            .iter()
            .all(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
    );
}

#[test]
fn displayed_range_follows_the_month_cursor() {
    let state = june_state();
    let views = GridViews::new(&state);

    let range = views.displayed_date_range.get();
    assert_eq!(range.start_date, d(2025, 6, 1));
    assert_eq!(range.end_date, d(2025, 6, 30));

    state.month.set(d(2024, 2, 14));
    let range = views.displayed_date_range.get();
    assert_eq!(range.start_date, d(2024, 2, 1));
    assert_eq!(range.end_date, d(2024, 2, 29));
    assert!(range.contains(d(2024, 2, 29)));
}

#[test]
fn totals_sum_repeated_entries() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);
    let per_day = views.total_hours_for_day(day);
    let per_task = views.total_hours_for_task(101);

    assert_eq!(per_day.get(), 0.0);
    assert_eq!(views.total_for_month.get(), 0.0);

    state.log_entries.set(vec![
        entry(101, day, 3.5, false),
        entry(101, day, 1.5, false),
        entry(102, day, 2.0, true),
        entry(101, d(2025, 6, 3), 8.0, false),
    ]);

    assert_eq!(per_day.get(), 7.0);
    assert_eq!(per_task.get(), 13.0);
    assert_eq!(views.total_for_month.get(), 15.0);
}

#[test]
fn log_info_returns_the_first_matching_entry() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);
    state
        .log_entries
        .set(vec![entry(101, day, 3.0, false), entry(101, day, 5.0, true)]);

    let found = views.log_info(101, day).get();
    assert_eq!(found.map(|e| e.hours), Some(3.0));
    assert_eq!(views.log_info(101, d(2025, 6, 3)).get(), None);
    assert_eq!(views.log_info(999, day).get(), None);
}

#[test]
fn work_from_home_is_a_tri_state() {
    let day = d(2025, 6, 2);
    let other = d(2025, 6, 3);

    assert_eq!(totals::is_work_from_home(&[], day), Some(false));
    assert_eq!(
        totals::is_work_from_home(&[entry(1, day, 8.0, true)], day),
        Some(true)
    );
    assert_eq!(
        totals::is_work_from_home(&[entry(1, day, 8.0, false)], day),
        Some(false)
    );
    assert_eq!(
        totals::is_work_from_home(&[entry(1, day, 4.0, true), entry(2, day, 4.0, false)], day),
        None
    );
    // Entries of other days do not count.
    assert_eq!(
        totals::is_work_from_home(&[entry(1, day, 4.0, true), entry(2, other, 4.0, false)], day),
        Some(true)
    );
}

#[test]
fn required_hours_are_eight_per_weekday() {
    let state = june_state();
    let views = GridViews::new(&state);

    assert_eq!(views.total_for_month_needed.get(), 168.0);
    state.month.set(d(2024, 2, 1));
    assert_eq!(views.total_for_month_needed.get(), 21.0 * 8.0);
}

#[test]
fn holiday_next_to_a_task_marks_the_task_invalid() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 5);
    let invalid = views.is_log_invalid(101, day);

    state.log_entries.set(vec![entry(101, day, 4.0, false)]);
    assert!(!invalid.get());

    state.log_entries.update(|entries| entries.push(entry(194, day, 4.0, false)));
    assert!(invalid.get());
    assert!(!views.is_log_invalid(194, day).get());
    assert!(!views.is_log_invalid(193, day).get());
    // No entry for the task itself.
    assert!(!views.is_log_invalid(102, day).get());
    // Holiday on another day.
    assert!(!views.is_log_invalid(101, d(2025, 6, 6)).get());
}

#[test]
fn holiday_tasks_are_never_invalid() {
    let day = d(2025, 6, 5);
    let entries = vec![entry(193, day, 4.0, false), entry(194, day, 4.0, false)];
    for task in validity::HOLIDAY_TASK_IDS {
        assert!(!validity::is_log_invalid(&entries, task, day));
    }
}

#[test]
fn only_past_months_are_read_only() {
    let state = june_state();
    let views = GridViews::new(&state);

    assert!(!views.is_grid_read_only.get());
    state.month.set(d(2025, 5, 31));
    assert!(views.is_grid_read_only.get());
    state.month.set(d(2025, 7, 1));
    assert!(!views.is_grid_read_only.get());

    // Moving "today" into the next year locks the displayed month.
    state.today.set(d(2026, 1, 2));
    assert!(views.is_grid_read_only.get());
}

#[test]
fn cell_status_matches_task_day_and_status() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);

    state.selections.set(vec![
        selection(101, day, SelectionStatus::Selected),
        selection(101, day, SelectionStatus::Imported),
        selection(102, day, SelectionStatus::Updated),
    ]);

    assert!(views.is_log_selected(101, day).get());
    assert!(views.is_log_imported(101, day).get());
    assert!(!views.is_log_updated(101, day).get());
    assert!(views.is_log_updated(102, day).get());
    assert!(!views.is_log_selected(102, day).get());
    assert!(!views.is_log_selected(101, d(2025, 6, 3)).get());
}

#[test]
fn selection_subsets_filter_by_status() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);

    assert!(!views.has_imported_data.get());
    state.selections.set(vec![
        selection(101, day, SelectionStatus::Selected),
        selection(102, day, SelectionStatus::Imported),
        selection(103, day, SelectionStatus::Updated),
    ]);

    assert!(views.has_imported_data.get());
    assert_eq!(views.selected.get().len(), 1);
    assert_eq!(views.imported.get()[0].task_id, 102);
    let affected: Vec<i64> = views
        .affected_logs_during_import
        .get()
        .iter()
        .map(|s| s.task_id)
        .collect();
    assert_eq!(affected, vec![102, 103]);
}

#[test]
fn loading_markers_drive_loading_views() {
    let state = june_state();
    let views = GridViews::new(&state);
    let cell = views.is_log_loading(100, d(2025, 6, 2));

    assert!(!views.is_any_log_loading.get());
    assert!(!cell.get());

    state.loading.set(markers(2));
    assert!(views.is_any_log_loading.get());
    assert!(cell.get());
    assert!(!views.is_log_loading(100, d(2025, 6, 3)).get());
}

#[test]
fn favorites_project_task_numbers() {
    let state = june_state();
    let views = GridViews::new(&state);
    let is_fav = views.is_task_favorite(102);

    assert!(!is_fav.get());
    state.favorites.set(vec![
        FavoriteTask { task_number: 101 },
        FavoriteTask { task_number: 102 },
    ]);

    assert_eq!(views.favorite_task_ids.get(), vec![101, 102]);
    assert!(is_fav.get());
    assert!(!views.is_task_favorite(103).get());
}

#[test]
fn month_summary_combines_totals() {
    let state = june_state();
    let views = GridViews::new(&state);
    state.log_entries.set(vec![
        entry(101, d(2025, 6, 2), 8.0, false),
        entry(101, d(2025, 6, 3), 8.5, false),
    ]);

    let summary = views.month_summary.get();
    assert_eq!(summary.month, d(2025, 6, 1));
    assert_eq!(summary.total_hours, 16.5);
    assert_eq!(summary.required_hours, 168.0);
    assert_eq!(summary.balance, 16.5 - 168.0);
    assert!(!summary.read_only);
    assert_eq!(
        summary,
        Core::summary_from_totals(d(2025, 6, 17), 16.5, 168.0, false)
    );
}

#[test]
fn cell_views_notify_once_per_batch() {
    let state = june_state();
    let views = GridViews::new(&state);
    let day = d(2025, 6, 2);
    let total = views.total_hours_for_day(day);
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = seen.clone();
    let _sub = total.subscribe(move |v| sink.borrow_mut().push(*v));

    batch(|| {
        state.log_entries.update(|e| e.push(entry(101, day, 2.0, false)));
        state.log_entries.update(|e| e.push(entry(102, day, 3.0, false)));
        state.selections.set(vec![selection(101, day, SelectionStatus::Selected)]);
    });
    // Another day changes: the total for `day` stays 5 and is not republished.
    state
        .log_entries
        .update(|e| e.push(entry(101, d(2025, 6, 3), 1.0, false)));

    assert_eq!(*seen.borrow(), vec![5.0]);
}

#[test]
fn views_are_deterministic_without_changes() {
    let state = june_state();
    let views = GridViews::new(&state);
    state
        .log_entries
        .set(vec![entry(101, d(2025, 6, 2), 8.0, false)]);

    assert_eq!(views.days_range.get(), views.days_range.get());
    assert_eq!(views.month_summary.get(), views.month_summary.get());
    assert_eq!(views.hint_message.get(), views.hint_message.get());
    let evaluations = views.month_summary.evaluations();
    let _ = views.month_summary.get();
    assert_eq!(views.month_summary.evaluations(), evaluations);
}
