//! Wall-clock values: `TimeOfDay` and `Interval`.
//!
//! Both are immutable once built. An `Interval` caches the minute offsets of its
//! boundaries so sorting and slicing never recompute them.

use std::fmt;
use std::str::FromStr;

use chrono::{Duration, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SlotError};

/// Number of minutes in a day. Minute offsets are always strictly below this.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// A time of day with minute precision, `00:00` through `23:59`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    hour: u32,
    minute: u32,
}

impl TimeOfDay {
    /// Build a time of day, rejecting `hour > 23` or `minute > 59`.
    pub fn new(hour: u32, minute: u32) -> Result<Self> {
        if hour > 23 || minute > 59 {
            return Err(SlotError::InvalidTimeOfDay(format!(
                "{hour}:{minute:02} is outside 00:00-23:59"
            )));
        }
        Ok(Self { hour, minute })
    }

    pub fn hour(&self) -> u32 {
        self.hour
    }

    pub fn minute(&self) -> u32 {
        self.minute
    }

    pub fn minutes_since_midnight(&self) -> u32 {
        minutes_since_midnight(*self)
    }
}

/// Minutes elapsed since midnight: `hour * 60 + minute`, in `[0, 1439]`.
pub fn minutes_since_midnight(t: TimeOfDay) -> u32 {
    t.hour * 60 + t.minute
}

/// Inverse of [`minutes_since_midnight`].
///
/// # Errors
/// Returns `SlotError::InvalidTimeOfDay` for `m >= 1440`. The end-of-day
/// boundary (24:00) has no `TimeOfDay` representation.
pub fn time_from_minutes(m: u32) -> Result<TimeOfDay> {
    if m >= MINUTES_PER_DAY {
        return Err(SlotError::InvalidTimeOfDay(format!(
            "{m} minutes since midnight is past the end of the day"
        )));
    }
    TimeOfDay::new(m / 60, m % 60)
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour, self.minute)
    }
}

impl FromStr for TimeOfDay {
    type Err = SlotError;

    /// Parse a 24-hour `"HH:MM"` string.
    fn from_str(s: &str) -> Result<Self> {
        let parsed = NaiveTime::parse_from_str(s.trim(), "%H:%M")
            .map_err(|e| SlotError::InvalidTimeOfDay(format!("'{s}': {e}")))?;
        Ok(parsed.into())
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = SlotError;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(t: TimeOfDay) -> Self {
        t.to_string()
    }
}

/// Seconds and sub-second precision are truncated.
impl From<NaiveTime> for TimeOfDay {
    fn from(t: NaiveTime) -> Self {
        Self {
            hour: t.hour(),
            minute: t.minute(),
        }
    }
}

impl From<TimeOfDay> for NaiveTime {
    fn from(t: TimeOfDay) -> Self {
        NaiveTime::MIN + Duration::minutes(i64::from(t.minutes_since_midnight()))
    }
}

/// A span of the day from `start` to `stop`, with cached minute offsets.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "IntervalDoc", into = "IntervalDoc")]
pub struct Interval {
    start: TimeOfDay,
    stop: TimeOfDay,
    start_minutes: u32,
    stop_minutes: u32,
}

impl Interval {
    /// Build an interval. Zero-length intervals are allowed.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidInterval` if `start` is after `stop`.
    pub fn new(start: TimeOfDay, stop: TimeOfDay) -> Result<Self> {
        let start_minutes = minutes_since_midnight(start);
        let stop_minutes = minutes_since_midnight(stop);
        if start_minutes > stop_minutes {
            return Err(SlotError::InvalidInterval(format!(
                "{start}-{stop} ends before it starts"
            )));
        }
        Ok(Self {
            start,
            stop,
            start_minutes,
            stop_minutes,
        })
    }

    /// Build an interval from two `"HH:MM"` strings.
    pub fn parse(start: &str, stop: &str) -> Result<Self> {
        Self::new(start.parse()?, stop.parse()?)
    }

    pub(crate) fn from_minutes(start: u32, stop: u32) -> Result<Self> {
        Self::new(time_from_minutes(start)?, time_from_minutes(stop)?)
    }

    pub fn start(&self) -> TimeOfDay {
        self.start
    }

    pub fn stop(&self) -> TimeOfDay {
        self.stop
    }

    pub fn start_minutes(&self) -> u32 {
        self.start_minutes
    }

    pub fn stop_minutes(&self) -> u32 {
        self.stop_minutes
    }

    pub fn duration_minutes(&self) -> u32 {
        self.stop_minutes - self.start_minutes
    }

    /// True when `other` lies entirely within `self` (boundaries inclusive).
    pub fn contains(&self, other: &Interval) -> bool {
        self.start_minutes <= other.start_minutes && other.stop_minutes <= self.stop_minutes
    }

    /// True when the two intervals share more than a boundary point.
    ///
    /// Touching intervals never overlap, and neither does a zero-length
    /// interval, even one lying strictly inside `other`.
    pub fn overlaps(&self, other: &Interval) -> bool {
        self.start_minutes < other.stop_minutes && other.start_minutes < self.stop_minutes
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.stop)
    }
}

/// Wire shape of an [`Interval`]; derived minute fields are never read from input.
#[derive(Serialize, Deserialize)]
struct IntervalDoc {
    start: TimeOfDay,
    stop: TimeOfDay,
}

impl TryFrom<IntervalDoc> for Interval {
    type Error = SlotError;

    fn try_from(doc: IntervalDoc) -> Result<Self> {
        Interval::new(doc.start, doc.stop)
    }
}

impl From<Interval> for IntervalDoc {
    fn from(i: Interval) -> Self {
        IntervalDoc {
            start: i.start,
            stop: i.stop,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minutes_roundtrip_at_day_edges() {
        let midnight = TimeOfDay::new(0, 0).unwrap();
        let last = TimeOfDay::new(23, 59).unwrap();
        assert_eq!(minutes_since_midnight(midnight), 0);
        assert_eq!(minutes_since_midnight(last), 1439);
        assert_eq!(time_from_minutes(1439).unwrap(), last);
    }

    #[test]
    fn end_of_day_boundary_is_rejected() {
        assert!(matches!(
            time_from_minutes(1440),
            Err(SlotError::InvalidTimeOfDay(_))
        ));
    }

    #[test]
    fn naive_time_conversion_truncates_seconds() {
        let t = NaiveTime::from_hms_opt(14, 40, 59).unwrap();
        let tod = TimeOfDay::from(t);
        assert_eq!(tod.to_string(), "14:40");
        assert_eq!(NaiveTime::from(tod), NaiveTime::from_hms_opt(14, 40, 0).unwrap());
    }
}
