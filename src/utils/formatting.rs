//! Formatting utilities used for CLI outputs.

pub fn pad_right(s: &str, width: usize) -> String {
    format!("{:<width$}", s, width = width)
}

pub fn pad_left(s: &str, width: usize) -> String {
    format!("{:>width$}", s, width = width)
}

/// Hours with up to two decimals, trailing zeros dropped: `7.5h`, `8h`.
pub fn hours2readable(hours: f64, want_sign: bool) -> String {
    let sign = if hours > 0.0 && want_sign { "+" } else { "" };
    let rounded = (hours * 100.0).round() / 100.0;
    let text = format!("{:.2}", rounded);
    let text = text.trim_end_matches('0').trim_end_matches('.');
    format!("{sign}{text}h")
}

/// Work-from-home tri-state as shown in the day table.
pub fn describe_work_place(is_work_from_home: Option<bool>) -> &'static str {
    match is_work_from_home {
        Some(true) => "home",
        Some(false) => "office",
        None => "mixed",
    }
}

pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
