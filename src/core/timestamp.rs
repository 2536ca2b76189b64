//! Registration-time rendering.

use crate::constants;
use chrono::{DateTime, Datelike, TimeZone, Utc};
use std::fmt::Display;

/// Render a millisecond epoch string as `DD-MM-YYYY HH:MM:SS` in `tz`.
///
/// Malformed input, or a date outside years 1..=9999 in `tz`, yields
/// `Invalid timestamp: <raw>`.
pub fn format_registration_time<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    let local = parse_millis(raw)
        .map(|dt| dt.with_timezone(tz))
        .filter(|dt| (1..=9999).contains(&dt.year()));
    match local {
        Some(dt) => dt.format(constants::REGISTRATION_TIME_FORMAT).to_string(),
        None => format!("Invalid timestamp: {}", raw),
    }
}

/// Render a record's raw registration time; the `Not found` placeholder
/// passes through untouched.
pub fn render_registration_time<Tz>(raw: &str, tz: &Tz) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    if raw == constants::NOT_FOUND {
        return raw.to_string();
    }
    format_registration_time(raw, tz)
}

fn parse_millis(raw: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = raw.trim().parse().ok()?;
    DateTime::<Utc>::from_timestamp_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    #[test]
    fn test_format_utc() {
        assert_eq!(
            format_registration_time("1700000000000", &Utc),
            "14-11-2023 22:13:20"
        );
    }

    #[test]
    fn test_format_fixed_offset() {
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_registration_time("1700000000000", &cest),
            "15-11-2023 00:13:20"
        );
    }

    #[test]
    fn test_fractional_seconds_are_not_rounded_up() {
        assert_eq!(
            format_registration_time("1700000000999", &Utc),
            "14-11-2023 22:13:20"
        );
    }

    #[test]
    fn test_surrounding_whitespace_is_accepted() {
        assert_eq!(
            format_registration_time(" 0 ", &Utc),
            "01-01-1970 00:00:00"
        );
    }

    #[test]
    fn test_invalid_input() {
        assert_eq!(
            format_registration_time("not-a-number", &Utc),
            "Invalid timestamp: not-a-number"
        );
        assert_eq!(
            format_registration_time("1.5e12", &Utc),
            "Invalid timestamp: 1.5e12"
        );
        assert_eq!(format_registration_time("", &Utc), "Invalid timestamp: ");
    }

    #[test]
    fn test_out_of_range_is_invalid() {
        let raw = i64::MAX.to_string();
        assert_eq!(
            format_registration_time(&raw, &Utc),
            format!("Invalid timestamp: {}", raw)
        );
    }

    #[test]
    fn test_years_beyond_four_digits_are_invalid() {
        assert_eq!(
            format_registration_time("300000000000000", &Utc),
            "Invalid timestamp: 300000000000000"
        );
        assert_eq!(
            format_registration_time("-100000000000000", &Utc),
            "Invalid timestamp: -100000000000000"
        );
    }

    #[test]
    fn test_year_bounds_follow_target_zone() {
        // 9999-12-31T23:30:00Z is already year 10000 at UTC+2
        let raw = "253402299000000";
        assert_eq!(format_registration_time(raw, &Utc), "31-12-9999 23:30:00");
        let cest = FixedOffset::east_opt(2 * 3600).unwrap();
        assert_eq!(
            format_registration_time(raw, &cest),
            format!("Invalid timestamp: {}", raw)
        );
    }

    #[test]
    fn test_not_found_passes_through() {
        assert_eq!(render_registration_time("Not found", &Utc), "Not found");
        assert_eq!(
            render_registration_time("1700000000000", &Utc),
            "14-11-2023 22:13:20"
        );
    }
}
