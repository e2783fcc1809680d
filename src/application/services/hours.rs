//! # Working Hours Evaluation
//!
//! Maps a reference instant onto an office's weekly schedule.

use crate::domain::entities::{Office, WorkingHour};
use crate::domain::value_objects::{TimeOfDay, Weekday};
use chrono::{DateTime, Datelike, Timelike, Utc};

/// Evaluates open/closed state against office schedules.
#[derive(Debug, Clone, Copy, Default)]
pub struct WorkingHoursEvaluator;

impl WorkingHoursEvaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Returns true if the office is open at `instant`.
    ///
    /// Closed when the weekday has no active schedule entry, when the time
    /// falls outside the (possibly overnight) working window, or when it
    /// falls inside the entry's break window.
    #[must_use]
    pub fn is_open(&self, office: &Office, instant: DateTime<Utc>) -> bool {
        self.today_hours(office, instant)
            .map(|entry| entry.is_open_at(time_of(instant)))
            .unwrap_or(false)
    }

    /// Returns the schedule entry for `instant`'s weekday regardless of
    /// open/closed state, for display purposes.
    #[must_use]
    pub fn today_hours<'a>(
        &self,
        office: &'a Office,
        instant: DateTime<Utc>,
    ) -> Option<&'a WorkingHour> {
        office.working_hour_for(weekday_of(instant))
    }
}

fn weekday_of(instant: DateTime<Utc>) -> Weekday {
    Weekday::from(instant.weekday())
}

#[allow(clippy::cast_possible_truncation)]
fn time_of(instant: DateTime<Utc>) -> TimeOfDay {
    // Hour and minute always fit in u8; construction cannot fail.
    TimeOfDay::new(instant.hour() as u8, instant.minute() as u8)
        .unwrap_or(TimeOfDay::MIDNIGHT)
}
