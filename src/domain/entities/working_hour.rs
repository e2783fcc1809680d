//! # Working Hours
//!
//! One office's schedule entry for a single weekday.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::{TimeOfDay, Weekday};

/// An optional mid-day break inside a working window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreakWindow {
    from: TimeOfDay,
    to: TimeOfDay,
}

impl BreakWindow {
    /// Creates a break window.
    #[must_use]
    pub const fn new(from: TimeOfDay, to: TimeOfDay) -> Self {
        Self { from, to }
    }

    /// Returns the break start.
    #[must_use]
    pub const fn from(&self) -> TimeOfDay {
        self.from
    }

    /// Returns the break end.
    #[must_use]
    pub const fn to(&self) -> TimeOfDay {
        self.to
    }
}

/// A weekday schedule entry.
///
/// The working window may wrap past midnight (`to < from`, e.g.
/// 22:00-02:00). A break window, when present, must lie inside the working
/// window and closes the office even though the main window covers it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WorkingHour {
    weekday: Weekday,
    from: TimeOfDay,
    to: TimeOfDay,
    break_window: Option<BreakWindow>,
    is_active: bool,
}

impl WorkingHour {
    /// Creates an active schedule entry without a break.
    #[must_use]
    pub const fn new(weekday: Weekday, from: TimeOfDay, to: TimeOfDay) -> Self {
        Self {
            weekday,
            from,
            to,
            break_window: None,
            is_active: true,
        }
    }

    /// Attaches a break window, validating it lies inside the working window.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::BreakOutsideWorkingWindow`] when either break
    /// endpoint falls outside the working window.
    pub fn with_break(mut self, break_window: BreakWindow) -> Result<Self, DomainError> {
        let inside = break_window.from().is_within(self.from, self.to)
            && break_window.to().is_within(self.from, self.to);
        if !inside {
            return Err(DomainError::BreakOutsideWorkingWindow {
                break_from: break_window.from().to_string(),
                break_to: break_window.to().to_string(),
            });
        }
        self.break_window = Some(break_window);
        Ok(self)
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the weekday this entry covers.
    #[must_use]
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// Returns the opening time.
    #[must_use]
    pub const fn from_time(&self) -> TimeOfDay {
        self.from
    }

    /// Returns the closing time.
    #[must_use]
    pub const fn to_time(&self) -> TimeOfDay {
        self.to
    }

    /// Returns the break window, if any.
    #[must_use]
    pub const fn break_window(&self) -> Option<BreakWindow> {
        self.break_window
    }

    /// Returns true if this entry is in force.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if the office is open at the given time under this
    /// entry.
    ///
    /// Inactive entries are never open. The working window is inclusive and
    /// wraps past midnight when `to < from`; a break window (same
    /// wraparound rule) forces closed inside it.
    #[must_use]
    pub fn is_open_at(&self, time: TimeOfDay) -> bool {
        if !self.is_active {
            return false;
        }
        if !time.is_within(self.from, self.to) {
            return false;
        }
        if let Some(break_window) = self.break_window {
            if time.is_within(break_window.from(), break_window.to()) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn t(s: &str) -> TimeOfDay {
        s.parse().unwrap()
    }

    #[test]
    fn open_within_plain_window() {
        let entry = WorkingHour::new(Weekday::Monday, t("09:00"), t("18:00"));
        assert!(entry.is_open_at(t("09:00")));
        assert!(entry.is_open_at(t("12:30")));
        assert!(entry.is_open_at(t("18:00")));
        assert!(!entry.is_open_at(t("08:59")));
        assert!(!entry.is_open_at(t("18:01")));
    }

    #[test]
    fn overnight_window_spans_midnight() {
        let entry = WorkingHour::new(Weekday::Friday, t("22:00"), t("02:00"));
        assert!(entry.is_open_at(t("23:30")));
        assert!(entry.is_open_at(t("01:00")));
        assert!(!entry.is_open_at(t("03:00")));
    }

    #[test]
    fn break_window_closes_the_office() {
        let entry = WorkingHour::new(Weekday::Monday, t("09:00"), t("18:00"))
            .with_break(BreakWindow::new(t("13:00"), t("14:00")))
            .unwrap();
        assert!(entry.is_open_at(t("12:59")));
        assert!(!entry.is_open_at(t("13:30")));
        assert!(!entry.is_open_at(t("13:00")));
        assert!(!entry.is_open_at(t("14:00")));
        assert!(entry.is_open_at(t("14:01")));
    }

    #[test]
    fn break_outside_window_rejected() {
        let result = WorkingHour::new(Weekday::Monday, t("09:00"), t("18:00"))
            .with_break(BreakWindow::new(t("19:00"), t("20:00")));
        assert!(matches!(
            result,
            Err(DomainError::BreakOutsideWorkingWindow { .. })
        ));
    }

    #[test]
    fn break_inside_overnight_window_accepted() {
        let entry = WorkingHour::new(Weekday::Saturday, t("22:00"), t("02:00"))
            .with_break(BreakWindow::new(t("00:00"), t("00:30")))
            .unwrap();
        assert!(!entry.is_open_at(t("00:15")));
        assert!(entry.is_open_at(t("23:00")));
    }

    #[test]
    fn inactive_entry_is_never_open() {
        let entry =
            WorkingHour::new(Weekday::Monday, t("09:00"), t("18:00")).with_active(false);
        assert!(!entry.is_open_at(t("12:00")));
    }
}
