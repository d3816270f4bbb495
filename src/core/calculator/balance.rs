/// Positive when more hours were logged than required.
pub fn calculate_balance(total_hours: f64, required_hours: f64) -> f64 {
    total_hours - required_hours
}
