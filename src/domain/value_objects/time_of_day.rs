//! # Time of Day
//!
//! Minute-resolution wall-clock time used by office schedules.
//!
//! The type understands windows that wrap past midnight (e.g. 22:00-02:00),
//! which is the tricky part of the open-hours evaluation.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error produced when parsing a time-of-day string.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseTimeError {
    /// The input was not in `HH:MM` form.
    #[error("invalid time format: {0:?}, expected HH:MM")]
    InvalidFormat(String),

    /// A component was outside its valid range.
    #[error("time component out of range: {0:?}")]
    OutOfRange(String),
}

/// A wall-clock time with minute resolution.
///
/// # Examples
///
/// ```
/// use exchange_locator::domain::value_objects::time_of_day::TimeOfDay;
///
/// let open: TimeOfDay = "22:00".parse().unwrap();
/// let close: TimeOfDay = "02:00".parse().unwrap();
///
/// // 23:30 falls inside the overnight window 22:00-02:00.
/// let late: TimeOfDay = "23:30".parse().unwrap();
/// assert!(late.is_within(open, close));
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(try_from = "String", into = "String")]
pub struct TimeOfDay {
    minutes: u16,
}

impl TimeOfDay {
    /// Midnight, 00:00.
    pub const MIDNIGHT: Self = Self { minutes: 0 };

    /// Creates a time from hour and minute components.
    ///
    /// # Errors
    ///
    /// Returns [`ParseTimeError::OutOfRange`] when `hour > 23` or
    /// `minute > 59`.
    pub fn new(hour: u8, minute: u8) -> Result<Self, ParseTimeError> {
        if hour > 23 || minute > 59 {
            return Err(ParseTimeError::OutOfRange(format!("{hour:02}:{minute:02}")));
        }
        Ok(Self {
            minutes: u16::from(hour) * 60 + u16::from(minute),
        })
    }

    /// Returns the hour component (0-23).
    #[must_use]
    pub const fn hour(&self) -> u8 {
        (self.minutes / 60) as u8
    }

    /// Returns the minute component (0-59).
    #[must_use]
    pub const fn minute(&self) -> u8 {
        (self.minutes % 60) as u8
    }

    /// Inclusive containment check with overnight wraparound.
    ///
    /// When `to < from` the window spans midnight and covers
    /// `[from, 24:00) ∪ [00:00, to]`; otherwise it is the plain inclusive
    /// interval `[from, to]`.
    #[must_use]
    pub fn is_within(self, from: Self, to: Self) -> bool {
        if to < from {
            self >= from || self <= to
        } else {
            self >= from && self <= to
        }
    }
}

impl fmt::Display for TimeOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for TimeOfDay {
    type Err = ParseTimeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) = s
            .split_once(':')
            .ok_or_else(|| ParseTimeError::InvalidFormat(s.to_string()))?;
        let hour: u8 = hour
            .parse()
            .map_err(|_| ParseTimeError::InvalidFormat(s.to_string()))?;
        let minute: u8 = minute
            .parse()
            .map_err(|_| ParseTimeError::InvalidFormat(s.to_string()))?;
        Self::new(hour, minute)
    }
}

impl TryFrom<String> for TimeOfDay {
    type Error = ParseTimeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TimeOfDay> for String {
    fn from(value: TimeOfDay) -> Self {
        value.to_string()
    }
}
