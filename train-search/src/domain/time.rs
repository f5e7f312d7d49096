//! Schedule time handling.
//!
//! The timetable provides times as "HH:MM:SS" strings with no date
//! component. This module provides a time-of-day type for comparing and
//! ordering those times.

use chrono::{Duration, NaiveTime, Timelike};
use std::fmt;

/// Error returned when parsing an invalid time string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid time: {reason}")]
pub struct TimeParseError {
    reason: &'static str,
}

impl TimeParseError {
    fn new(reason: &'static str) -> Self {
        Self { reason }
    }
}

/// A time of day from the timetable.
///
/// Timetable times carry no date and no timezone; only relative ordering
/// and differences within a day are meaningful.
///
/// # Examples
///
/// ```
/// use train_search::domain::ScheduleTime;
///
/// let time = ScheduleTime::parse_hms("14:30:00").unwrap();
/// assert_eq!(time.to_string(), "14:30:00");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScheduleTime(NaiveTime);

impl ScheduleTime {
    /// Parse a time from "HH:MM:SS" format.
    ///
    /// The input must be exactly 8 characters, zero-padded, 24-hour.
    ///
    /// # Examples
    ///
    /// ```
    /// use train_search::domain::ScheduleTime;
    ///
    /// // Valid times
    /// assert!(ScheduleTime::parse_hms("00:00:00").is_ok());
    /// assert!(ScheduleTime::parse_hms("23:59:59").is_ok());
    ///
    /// // Invalid formats
    /// assert!(ScheduleTime::parse_hms("8:00:00").is_err());
    /// assert!(ScheduleTime::parse_hms("08:00").is_err());
    /// assert!(ScheduleTime::parse_hms("25:00:00").is_err());
    /// ```
    pub fn parse_hms(s: &str) -> Result<Self, TimeParseError> {
        // Must be exactly 8 characters: HH:MM:SS
        if s.len() != 8 {
            return Err(TimeParseError::new("expected HH:MM:SS format"));
        }

        let bytes = s.as_bytes();

        // Check colon positions
        if bytes[2] != b':' || bytes[5] != b':' {
            return Err(TimeParseError::new("expected colons at positions 2 and 5"));
        }

        // Parse hours
        let hour = parse_two_digits(&bytes[0..2])
            .ok_or_else(|| TimeParseError::new("invalid hour digits"))?;
        if hour > 23 {
            return Err(TimeParseError::new("hour must be 0-23"));
        }

        // Parse minutes
        let minute = parse_two_digits(&bytes[3..5])
            .ok_or_else(|| TimeParseError::new("invalid minute digits"))?;
        if minute > 59 {
            return Err(TimeParseError::new("minute must be 0-59"));
        }

        // Parse seconds
        let second = parse_two_digits(&bytes[6..8])
            .ok_or_else(|| TimeParseError::new("invalid second digits"))?;
        if second > 59 {
            return Err(TimeParseError::new("second must be 0-59"));
        }

        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or_else(|| TimeParseError::new("invalid time"))?;

        Ok(Self(time))
    }

    /// Returns the hour (0-23).
    pub fn hour(&self) -> u32 {
        self.0.hour()
    }

    /// Returns the minute (0-59).
    pub fn minute(&self) -> u32 {
        self.0.minute()
    }

    /// Returns the second (0-59).
    pub fn second(&self) -> u32 {
        self.0.second()
    }

    /// Returns the duration between two times.
    ///
    /// Returns a negative duration if `other` is after `self`.
    pub fn signed_duration_since(&self, other: Self) -> Duration {
        self.0.signed_duration_since(other.0)
    }
}

impl fmt::Debug for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ScheduleTime({:02}:{:02}:{:02})",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

impl fmt::Display for ScheduleTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hour(),
            self.minute(),
            self.second()
        )
    }
}

/// Parse two ASCII digit bytes into a u32.
fn parse_two_digits(bytes: &[u8]) -> Option<u32> {
    if bytes.len() != 2 {
        return None;
    }
    let d1 = (bytes[0] as char).to_digit(10)?;
    let d2 = (bytes[1] as char).to_digit(10)?;
    Some(d1 * 10 + d2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_valid_times() {
        let t = ScheduleTime::parse_hms("00:00:00").unwrap();
        assert_eq!(t.hour(), 0);
        assert_eq!(t.minute(), 0);
        assert_eq!(t.second(), 0);

        let t = ScheduleTime::parse_hms("23:59:59").unwrap();
        assert_eq!(t.hour(), 23);
        assert_eq!(t.minute(), 59);
        assert_eq!(t.second(), 59);

        let t = ScheduleTime::parse_hms("14:30:05").unwrap();
        assert_eq!(t.hour(), 14);
        assert_eq!(t.minute(), 30);
        assert_eq!(t.second(), 5);
    }

    #[test]
    fn parse_invalid_format() {
        // Wrong length
        assert!(ScheduleTime::parse_hms("143000").is_err());
        assert!(ScheduleTime::parse_hms("14:30").is_err());
        assert!(ScheduleTime::parse_hms("14:30:000").is_err());
        assert!(ScheduleTime::parse_hms("").is_err());

        // Not zero-padded
        assert!(ScheduleTime::parse_hms("8:00:00").is_err());

        // Wrong separators
        assert!(ScheduleTime::parse_hms("14-30-00").is_err());
        assert!(ScheduleTime::parse_hms("14.30.00").is_err());

        // Non-digit characters
        assert!(ScheduleTime::parse_hms("ab:cd:ef").is_err());
        assert!(ScheduleTime::parse_hms("1a:30:00").is_err());
    }

    #[test]
    fn parse_invalid_values() {
        // Hour out of range
        assert!(ScheduleTime::parse_hms("24:00:00").is_err());
        assert!(ScheduleTime::parse_hms("25:00:00").is_err());

        // Minute out of range
        assert!(ScheduleTime::parse_hms("12:60:00").is_err());
        assert!(ScheduleTime::parse_hms("12:99:00").is_err());

        // Second out of range
        assert!(ScheduleTime::parse_hms("12:00:60").is_err());
    }

    #[test]
    fn display_format() {
        assert_eq!(
            ScheduleTime::parse_hms("00:00:00").unwrap().to_string(),
            "00:00:00"
        );
        assert_eq!(
            ScheduleTime::parse_hms("09:05:03").unwrap().to_string(),
            "09:05:03"
        );
        assert_eq!(
            ScheduleTime::parse_hms("23:59:59").unwrap().to_string(),
            "23:59:59"
        );
    }

    #[test]
    fn ordering() {
        let t1 = ScheduleTime::parse_hms("10:00:00").unwrap();
        let t2 = ScheduleTime::parse_hms("10:00:01").unwrap();
        let t3 = ScheduleTime::parse_hms("11:00:00").unwrap();

        assert!(t1 < t2);
        assert!(t2 < t3);
        assert!(t3 > t1);
    }

    #[test]
    fn duration_between() {
        let t1 = ScheduleTime::parse_hms("10:00:00").unwrap();
        let t2 = ScheduleTime::parse_hms("12:30:00").unwrap();

        let dur = t2.signed_duration_since(t1);
        assert_eq!(dur, Duration::hours(2) + Duration::minutes(30));

        let dur_neg = t1.signed_duration_since(t2);
        assert_eq!(dur_neg, -(Duration::hours(2) + Duration::minutes(30)));
    }

    #[test]
    fn equality() {
        let t1 = ScheduleTime::parse_hms("14:30:00").unwrap();
        let t2 = ScheduleTime::parse_hms("14:30:00").unwrap();
        let t3 = ScheduleTime::parse_hms("14:30:01").unwrap();

        assert_eq!(t1, t2);
        assert_ne!(t1, t3);
    }

    #[test]
    fn hash_consistent() {
        use std::collections::HashSet;

        let mut set = HashSet::new();
        set.insert(ScheduleTime::parse_hms("14:30:00").unwrap());

        assert!(set.contains(&ScheduleTime::parse_hms("14:30:00").unwrap()));
        assert!(!set.contains(&ScheduleTime::parse_hms("14:30:01").unwrap()));
    }
}
