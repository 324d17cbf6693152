//! Time parsing for timetables and departure queries.
//!
//! Timetables carry times of day as "HH:MM" strings. Departure queries carry
//! a full timestamp as "yyyyMMddHHmm" (e.g. "202410181530").

use chrono::{NaiveDateTime, NaiveTime};

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeError {
    reason: &'static str,
}

impl TimeError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// Parse a time of day in "HH:MM" format.
///
/// # Examples
///
/// ```
/// use subway_server::domain::parse_hhmm;
///
/// assert!(parse_hhmm("05:30").is_ok());
/// assert!(parse_hhmm("23:59").is_ok());
///
/// assert!(parse_hhmm("0530").is_err());
/// assert!(parse_hhmm("24:00").is_err());
/// ```
pub fn parse_hhmm(s: &str) -> Result<NaiveTime, TimeError> {
    if s.len() != 5 {
        return Err(TimeError::new("expected HH:MM format"));
    }

    let bytes = s.as_bytes();

    if bytes[2] != b':' {
        return Err(TimeError::new("expected colon at position 2"));
    }

    let hour =
        parse_two_digits(&bytes[0..2]).ok_or_else(|| TimeError::new("invalid hour digits"))?;
    if hour > 23 {
        return Err(TimeError::new("hour must be 0-23"));
    }

    let minute =
        parse_two_digits(&bytes[3..5]).ok_or_else(|| TimeError::new("invalid minute digits"))?;
    if minute > 59 {
        return Err(TimeError::new("minute must be 0-59"));
    }

    NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(|| TimeError::new("invalid time"))
}

/// Parse a departure timestamp in "yyyyMMddHHmm" format.
///
/// # Examples
///
/// ```
/// use subway_server::domain::parse_departure;
///
/// let departure = parse_departure("202410181530").unwrap();
/// assert_eq!(departure.to_string(), "2024-10-18 15:30:00");
///
/// assert!(parse_departure("2024-10-18").is_err());
/// assert!(parse_departure("202413011530").is_err());
/// ```
pub fn parse_departure(s: &str) -> Result<NaiveDateTime, TimeError> {
    // chrono's %Y accepts signs and longer years; only plain digits are allowed.
    if s.len() != 12 || !s.bytes().all(|b| b.is_ascii_digit()) {
        return Err(TimeError::new("expected yyyyMMddHHmm format"));
    }

    NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M")
        .map_err(|_| TimeError::new("date or time out of range"))
}

fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    match bytes {
        [a, b] if a.is_ascii_digit() && b.is_ascii_digit() => {
            Some(u32::from(a - b'0') * 10 + u32::from(b - b'0'))
        }
        _ => None,
    }
}

/// Serde adapter for `NaiveTime` as "HH:MM".
pub(crate) mod hhmm {
    use chrono::NaiveTime;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(time: &NaiveTime, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&time.format("%H:%M").to_string())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<NaiveTime, D::Error> {
        let s = String::deserialize(deserializer)?;
        super::parse_hhmm(&s).map_err(serde::de::Error::custom)
    }
}
