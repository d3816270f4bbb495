use chrono::NaiveDate;

use crate::utils::date;

/// Hours expected for every weekday.
///
/// Fixed placeholder until required hours come from a real source; not
/// configurable on purpose.
pub const HOURS_PER_WORKDAY: f64 = 8.0;

/// Required = weekdays of the month × `HOURS_PER_WORKDAY`.
/// Public holidays are not subtracted.
pub fn calculate_required(month: NaiveDate) -> f64 {
    date::weekdays_of_month(month).len() as f64 * HOURS_PER_WORKDAY
}
