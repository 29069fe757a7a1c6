/// Confidence arrives as a fraction of 1; the card shows a percentage
/// with exactly one decimal place ("0.873" -> "87.3%").
pub fn format_confidence(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// Rejection rate is shown exactly as stored, with the sign appended.
pub fn format_percent(value: &str) -> String {
    format!("{}%", value)
}

/// Weights carry a fixed unit suffix.
pub fn format_weight_kg(value: &str) -> String {
    format!("{} kg", value)
}
