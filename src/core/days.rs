//! Which days the grid shows.

use chrono::NaiveDate;
use serde::Serialize;

use crate::utils::date;

/// Bounds of the displayed month, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, day: NaiveDate) -> bool {
        self.start_date <= day && day <= self.end_date
    }
}

/// All days of `month`; Saturdays and Sundays only with `include_weekends`.
pub fn days_range(month: NaiveDate, include_weekends: bool) -> Vec<NaiveDate> {
    if include_weekends {
        date::all_days_of_month(month)
    } else {
        date::weekdays_of_month(month)
    }
}

pub fn displayed_date_range(month: NaiveDate) -> DateRange {
    DateRange {
        start_date: date::start_of_month(month),
        end_date: date::end_of_month(month),
    }
}
