use chrono::NaiveDate;
use serde::Serialize;

/// Month-level totals shown above the grid.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MonthSummary {
    pub month: NaiveDate,
    pub total_hours: f64,
    pub required_hours: f64,
    pub balance: f64,
    pub read_only: bool,
}
