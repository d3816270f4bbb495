use chrono::{Datelike, NaiveDate, Weekday};

pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap_or(date)
}

pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    let (year, month) = if date.month() == 12 {
        (date.year() + 1, 1)
    } else {
        (date.year(), date.month() + 1)
    };

    NaiveDate::from_ymd_opt(year, month, 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

/// Every day of the month containing `date`, first to last.
pub fn all_days_of_month(date: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_month(date);
    start
        .iter_days()
        .take_while(|d| d.month() == start.month())
        .collect()
}

pub fn weekdays_of_month(date: NaiveDate) -> Vec<NaiveDate> {
    all_days_of_month(date)
        .into_iter()
        .filter(|d| !is_weekend(*d))
        .collect()
}

/// True when `month` lies in a calendar month before the one containing `today`.
pub fn is_before_month_of(month: NaiveDate, today: NaiveDate) -> bool {
    month < start_of_month(today)
}

pub fn parse_date(s: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok()
}

/// Accepts `YYYY-MM` or a full `YYYY-MM-DD`; returns the first of the month.
pub fn parse_month(s: &str) -> Option<NaiveDate> {
    if let Some(d) = parse_date(s) {
        return Some(start_of_month(d));
    }
    NaiveDate::parse_from_str(&format!("{}-01", s.trim()), "%Y-%m-%d").ok()
}

pub fn month_label(date: NaiveDate) -> String {
    date.format("%B %Y").to_string()
}
