use chrono::NaiveDate;

use crate::models::LogEntry;
use crate::utils::date;

/// Holiday tasks. Logging one of them next to a regular task on the same day
/// makes the regular cell invalid.
pub const HOLIDAY_TASK_IDS: [i64; 2] = [193, 194];

pub fn is_holiday_task(task_id: i64) -> bool {
    HOLIDAY_TASK_IDS.contains(&task_id)
}

/// A regular task's cell is invalid when it has an entry on a day that also
/// carries a holiday entry. Holiday cells are never invalid.
pub fn is_log_invalid(entries: &[LogEntry], task_id: i64, date: NaiveDate) -> bool {
    if is_holiday_task(task_id) {
        return false;
    }

    let mut day = entries.iter().filter(|e| e.is_on(date));
    let has_task_log = day.clone().any(|e| e.task_id == task_id);
    has_task_log && day.any(|e| is_holiday_task(e.task_id))
}

/// Past months can be viewed but not edited.
pub fn is_grid_read_only(month: NaiveDate, today: NaiveDate) -> bool {
    date::is_before_month_of(month, today)
}
