use chrono::NaiveDate;

use crate::core::calculator::balance;
use crate::models::MonthSummary;
use crate::utils::date;

pub struct Core;

impl Core {
    /// Summary of the month containing `month`. The balance is derived from
    /// the two totals.
    pub fn summary_from_totals(
        month: NaiveDate,
        total_hours: f64,
        required_hours: f64,
        read_only: bool,
    ) -> MonthSummary {
        MonthSummary {
            month: date::start_of_month(month),
            total_hours,
            required_hours,
            balance: balance::calculate_balance(total_hours, required_hours),
            read_only,
        }
    }
}
