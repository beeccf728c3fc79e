use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::Serialize;

use crate::error::CoreError;

pub const MINUTES_PER_HOUR: u64 = 60;
pub const MINUTES_PER_DAY: u64 = 24 * MINUTES_PER_HOUR;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Meridiem {
    #[serde(rename = "AM")]
    Am,
    #[serde(rename = "PM")]
    Pm,
}

impl fmt::Display for Meridiem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Meridiem::Am => f.write_str("AM"),
            Meridiem::Pm => f.write_str("PM"),
        }
    }
}

/// A time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct ClockTime {
    minutes: u64,
}

impl ClockTime {
    pub fn from_minutes(minutes: u64) -> Self {
        Self {
            minutes: minutes % MINUTES_PER_DAY,
        }
    }

    pub fn minutes_since_midnight(&self) -> u64 {
        self.minutes
    }

    /// Hour on the 12-hour dial (1..=12) together with AM/PM.
    pub fn hour12(&self) -> (u64, Meridiem) {
        let hour24 = self.minutes / MINUTES_PER_HOUR;
        let meridiem = if hour24 < 12 { Meridiem::Am } else { Meridiem::Pm };
        let hour = match hour24 % 12 {
            0 => 12,
            h => h,
        };
        (hour, meridiem)
    }

    pub fn minute(&self) -> u64 {
        self.minutes % MINUTES_PER_HOUR
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (hour, meridiem) = self.hour12();
        write!(f, "{}:{:02} {}", hour, self.minute(), meridiem)
    }
}

impl FromStr for ClockTime {
    type Err = CoreError;

    /// Parse `H:MM AM` / `H:MM PM`. AM/PM is case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidTime {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let mut parts = s.split_whitespace();
        let (Some(hm), Some(suffix), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(invalid("expected 'H:MM AM' or 'H:MM PM'"));
        };

        let meridiem = match suffix.to_ascii_uppercase().as_str() {
            "AM" => Meridiem::Am,
            "PM" => Meridiem::Pm,
            _ => return Err(invalid("suffix must be AM or PM")),
        };

        let (hour, minute) =
            split_hours_minutes(hm).ok_or_else(|| invalid("expected digits as H:MM"))?;
        if !(1..=12).contains(&hour) {
            return Err(invalid("hour must be between 1 and 12"));
        }
        if minute >= MINUTES_PER_HOUR {
            return Err(invalid("minute must be between 0 and 59"));
        }

        let hour24 = match meridiem {
            Meridiem::Am => hour % 12,
            Meridiem::Pm => hour % 12 + 12,
        };
        Ok(Self::from_minutes(hour24 * MINUTES_PER_HOUR + minute))
    }
}

/// A span written as `H:MM` where the hour count is unbounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duration {
    hours: u64,
    minutes: u64,
}

impl Duration {
    pub fn total_minutes(&self) -> u64 {
        self.hours * MINUTES_PER_HOUR + self.minutes
    }
}

impl FromStr for Duration {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = |reason: &str| CoreError::InvalidDuration {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (hours, minutes) =
            split_hours_minutes(s.trim()).ok_or_else(|| invalid("expected digits as H:MM"))?;
        if minutes >= MINUTES_PER_HOUR {
            return Err(invalid("minutes must be between 0 and 59"));
        }
        hours
            .checked_mul(MINUTES_PER_HOUR)
            .and_then(|m| m.checked_add(minutes))
            .filter(|total| *total <= u64::MAX - MINUTES_PER_DAY)
            .ok_or_else(|| invalid("duration is too long"))?;
        Ok(Self { hours, minutes })
    }
}

fn split_hours_minutes(s: &str) -> Option<(u64, u64)> {
    let (h, m) = s.split_once(':')?;
    Some((parse_digits(h)?, parse_digits(m)?))
}

fn parse_digits(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Parse a weekday name, ignoring case and surrounding whitespace.
pub fn parse_weekday(s: &str) -> Result<Weekday, CoreError> {
    s.trim()
        .parse::<Weekday>()
        .map_err(|_| CoreError::UnknownWeekday(s.to_string()))
}

/// Move `day` forward by `days`, wrapping around the week.
pub fn advance_weekday(day: Weekday, days: u64) -> Weekday {
    (0..days % 7).fold(day, |d, _| d.succ())
}

/// Full English name in title case.
pub fn weekday_name(day: Weekday) -> &'static str {
    match day {
        Weekday::Mon => "Monday",
        Weekday::Tue => "Tuesday",
        Weekday::Wed => "Wednesday",
        Weekday::Thu => "Thursday",
        Weekday::Fri => "Friday",
        Weekday::Sat => "Saturday",
        Weekday::Sun => "Sunday",
    }
}

/// `(next day)` or `(N days later)`; nothing when no day boundary was crossed.
pub fn days_later_label(days: u64) -> Option<String> {
    match days {
        0 => None,
        1 => Some("(next day)".to_string()),
        n => Some(format!("({n} days later)")),
    }
}

/// Outcome of adding a duration to a clock time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSum {
    #[serde(serialize_with = "serialize_display")]
    pub time: ClockTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub day: Option<&'static str>,
    pub days_later: u64,
}

fn serialize_display<S: serde::Serializer>(t: &ClockTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(t)
}

impl fmt::Display for TimeSum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.time)?;
        if let Some(day) = self.day {
            write!(f, ", {day}")?;
        }
        if let Some(label) = days_later_label(self.days_later) {
            write!(f, " {label}")?;
        }
        Ok(())
    }
}

/// Add `duration` to `start`, advancing `day` by the number of midnights crossed.
pub fn sum_time(start: ClockTime, duration: Duration, day: Option<Weekday>) -> TimeSum {
    let total = start.minutes_since_midnight() + duration.total_minutes();
    let days_later = total / MINUTES_PER_DAY;
    TimeSum {
        time: ClockTime::from_minutes(total),
        day: day.map(|d| weekday_name(advance_weekday(d, days_later))),
        days_later,
    }
}

/// Parse the inputs and add them.
///
/// ```
/// use abacus_core::clock::add_time;
/// assert_eq!(add_time("3:00 PM", "3:10", None).unwrap(), "6:10 PM");
/// assert_eq!(
///     add_time("11:43 PM", "24:20", Some("tueSday")).unwrap(),
///     "12:03 AM, Thursday (2 days later)"
/// );
/// ```
pub fn add_time(start: &str, duration: &str, day: Option<&str>) -> Result<String, CoreError> {
    compute(start, duration, day).map(|sum| sum.to_string())
}

/// Like [`add_time`] but returns the structured result.
pub fn compute(start: &str, duration: &str, day: Option<&str>) -> Result<TimeSum, CoreError> {
    let start: ClockTime = start.parse()?;
    let duration: Duration = duration.parse()?;
    let day = day.map(parse_weekday).transpose()?;
    Ok(sum_time(start, duration, day))
}
