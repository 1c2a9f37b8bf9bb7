use chrono::{DateTime, Local};

/// Renders an ISO-8601 timestamp for display in the local timezone.
///
/// Returns the empty string when `iso` does not parse. Purely presentational;
/// the stored value is never touched.
pub fn format_timestamp(iso: &str) -> String {
    match DateTime::parse_from_rfc3339(iso) {
        Ok(parsed) => parsed
            .with_timezone(&Local)
            .format("%b %d, %Y, %H:%M")
            .to_string(),
        Err(_) => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::format_timestamp;

    #[test]
    fn formats_valid_timestamp() {
        // Mid-month noon UTC so the month survives any local offset.
        let formatted = format_timestamp("2024-03-15T12:00:00Z");
        assert!(formatted.contains("Mar"));
        assert!(formatted.contains("2024"));
    }

    #[test]
    fn unparseable_input_yields_empty_string() {
        assert_eq!(format_timestamp("not a date"), "");
        assert_eq!(format_timestamp(""), "");
        assert_eq!(format_timestamp("2024-13-99"), "");
    }
}
