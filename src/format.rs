//! Small helpers around recorded facts: compact duration rendering and the
//! packed duration/date strings the surrounding logging commands accept.

use chrono::{Duration, NaiveDate};

use crate::component::split_digits;
use crate::error::{BoundsError, Result};

/// Formats a duration as `"H:MM"` (e.g. `"1:07"`), the compact form used
/// when reporting a logged fact. The sign is dropped.
pub fn format_delta(delta: Duration) -> String {
    let minutes = delta.num_minutes().abs();
    format!("{}:{:02}", minutes / 60, minutes % 60)
}

/// Parses a packed duration string (`"130"`, `"1:30"`, `"90"` meaning 0:90)
/// with the same digit-splitting rule the bounds grammar uses.
pub fn parse_delta(s: &str) -> Result<Duration> {
    let s = s.trim();
    if s.is_empty() {
        return Err(BoundsError::Malformed { token: s.to_string() });
    }
    let (hours, minutes) = split_digits(s)?;
    Ok(Duration::minutes(i64::from(hours) * 60 + i64::from(minutes)))
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| BoundsError::Malformed { token: s.to_string() })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_delta_renders_hours_and_padded_minutes() {
        assert_eq!(format_delta(Duration::minutes(75)), "1:15");
        assert_eq!(format_delta(Duration::minutes(7)), "0:07");
        assert_eq!(format_delta(Duration::minutes(0)), "0:00");
        assert_eq!(format_delta(Duration::minutes(-95)), "1:35");
    }

    #[test]
    fn parse_delta_reads_packed_and_colon_forms() {
        assert_eq!(parse_delta("130").unwrap(), Duration::minutes(90));
        assert_eq!(parse_delta("1:30").unwrap(), Duration::minutes(90));
        assert_eq!(parse_delta("90").unwrap(), Duration::minutes(90));
        assert_eq!(parse_delta("5").unwrap(), Duration::minutes(5));
        assert!(parse_delta("").is_err());
        assert!(parse_delta("abc").is_err());
    }

    #[test]
    fn parse_date_reads_iso_dates() {
        assert_eq!(parse_date("2014-01-31").unwrap(), NaiveDate::from_ymd_opt(2014, 1, 31).unwrap());
        assert!(parse_date("31.01.2014").is_err());
    }
}
