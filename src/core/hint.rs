//! Contextual hint shown under the grid.
//!
//! The branches are checked in a fixed priority order and the first match
//! wins:
//! 1. month is loading
//! 2. cells are being saved
//! 3. hours are being entered
//! 4. one cell selected
//! 5. several cells selected
//! 6. past month
//! 7. idle

use crate::models::{EnteringMode, LoadingMarker, Selection};

pub const LOADING_MESSAGE: &str = "Loading data. Please wait.";
pub const SAVING_MESSAGE: &str = "Data is saving. Please wait.";
pub const SINGLE_SELECTION_MESSAGE: &str = "Hit CTRL+ENTER to edit. Or hold CTRL (or CMD) and click on other cells to select more. Or hold SHIFT and click on other cell to select the range of dates";
pub const PAST_MONTH_MESSAGE: &str =
    "You are not allowed to change data in the past, but you can look at it and be proud of your work!";
pub const IDLE_MESSAGE: &str = "Double click on a cell to edit. Use value 0 to delete the entry";

/// From this many cells in flight the hint spells out the count.
pub const BULK_SAVE_THRESHOLD: usize = 5;

pub fn hint_message(
    past_month: bool,
    logs_loading: bool,
    selections: &[Selection],
    loading: &[LoadingMarker],
    mode: EnteringMode,
) -> String {
    if logs_loading {
        return LOADING_MESSAGE.to_string();
    }

    if !loading.is_empty() {
        if loading.len() < BULK_SAVE_THRESHOLD {
            return SAVING_MESSAGE.to_string();
        }
        return format!(
            "{} entries are updating. This might take a while, so hold on!",
            loading.len()
        );
    }

    if mode.is_entering_hours() {
        return format!(
            "You are editing {} entries. Hit ENTER to submit or ESC to cancel. Use value 0 to delete the entry",
            selections.len()
        );
    }

    match selections.len() {
        0 => {}
        1 => return SINGLE_SELECTION_MESSAGE.to_string(),
        n => return format!("{n} days selected. Hit CTRL+ENTER to edit or ESC to cancel"),
    }

    if past_month {
        return PAST_MONTH_MESSAGE.to_string();
    }

    IDLE_MESSAGE.to_string()
}
