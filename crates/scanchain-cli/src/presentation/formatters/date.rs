use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Format a stored date as a long calendar date ("January 5, 2024").
///
/// Values that do not parse as a date come back unchanged; a bad date
/// never fails the render.
pub fn format_long_date(raw: &str) -> String {
    match parse_date(raw) {
        Some(date) => date.format("%B %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

fn parse_date(raw: &str) -> Option<NaiveDate> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S") {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_date() {
        assert_eq!(format_long_date("2024-01-05"), "January 5, 2024");
    }

    #[test]
    fn test_rfc3339_timestamp() {
        assert_eq!(format_long_date("2024-01-04T09:30:00Z"), "January 4, 2024");
    }

    #[test]
    fn test_timestamp_without_zone() {
        assert_eq!(format_long_date("2024-12-25T08:00:00"), "December 25, 2024");
    }

    #[test]
    fn test_unparseable_value_falls_back_to_raw() {
        assert_eq!(format_long_date("last tuesday"), "last tuesday");
        assert_eq!(format_long_date("2024-13-40"), "2024-13-40");
    }
}
