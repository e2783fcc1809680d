//! # Domain Enums
//!
//! Enumeration types for domain concepts.
//!
//! - [`RateDirection`] - which side of a two-way exchange rate applies
//! - [`Weekday`] - schedule weekday
//! - [`SortPreference`] - result ordering requested by the caller
//!
//! All enums implement `Debug`, `Clone`, `Copy`, `PartialEq`, `Eq`, `Hash`,
//! `Display`, `FromStr`, and Serde traits.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Error returned when parsing an enum from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {0} value: {1:?}")]
pub struct ParseEnumError(pub &'static str, pub String);

/// The side of a two-way rate that applies to a conversion.
///
/// Rates are stored anchored on the reference currency: `Buy` means the
/// office is buying the foreign currency from the client, `Sell` means it
/// is selling the foreign currency to the client.
///
/// # Examples
///
/// ```
/// use exchange_locator::domain::value_objects::enums::RateDirection;
///
/// assert_eq!(RateDirection::Buy.opposite(), RateDirection::Sell);
/// assert_eq!(RateDirection::Buy.to_string(), "BUY");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum RateDirection {
    /// The office buys foreign currency from the client.
    Buy = 0,
    /// The office sells foreign currency to the client.
    Sell = 1,
}

impl RateDirection {
    /// Returns the opposite direction.
    #[inline]
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Buy => Self::Sell,
            Self::Sell => Self::Buy,
        }
    }

    /// Returns true for the buy side.
    #[inline]
    #[must_use]
    pub const fn is_buy(self) -> bool {
        matches!(self, Self::Buy)
    }

    /// Returns true for the sell side.
    #[inline]
    #[must_use]
    pub const fn is_sell(self) -> bool {
        matches!(self, Self::Sell)
    }
}

impl fmt::Display for RateDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Buy => write!(f, "BUY"),
            Self::Sell => write!(f, "SELL"),
        }
    }
}

impl FromStr for RateDirection {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "BUY" => Ok(Self::Buy),
            "SELL" => Ok(Self::Sell),
            _ => Err(ParseEnumError("RateDirection", s.to_string())),
        }
    }
}

/// Day of week for office schedules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
#[repr(u8)]
pub enum Weekday {
    /// Monday.
    Monday = 0,
    /// Tuesday.
    Tuesday = 1,
    /// Wednesday.
    Wednesday = 2,
    /// Thursday.
    Thursday = 3,
    /// Friday.
    Friday = 4,
    /// Saturday.
    Saturday = 5,
    /// Sunday.
    Sunday = 6,
}

impl Weekday {
    /// All weekdays in order, Monday first.
    pub const ALL: [Self; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Monday => "MONDAY",
            Self::Tuesday => "TUESDAY",
            Self::Wednesday => "WEDNESDAY",
            Self::Thursday => "THURSDAY",
            Self::Friday => "FRIDAY",
            Self::Saturday => "SATURDAY",
            Self::Sunday => "SUNDAY",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Weekday {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "MONDAY" => Ok(Self::Monday),
            "TUESDAY" => Ok(Self::Tuesday),
            "WEDNESDAY" => Ok(Self::Wednesday),
            "THURSDAY" => Ok(Self::Thursday),
            "FRIDAY" => Ok(Self::Friday),
            "SATURDAY" => Ok(Self::Saturday),
            "SUNDAY" => Ok(Self::Sunday),
            _ => Err(ParseEnumError("Weekday", s.to_string())),
        }
    }
}

impl From<chrono::Weekday> for Weekday {
    fn from(value: chrono::Weekday) -> Self {
        match value {
            chrono::Weekday::Mon => Self::Monday,
            chrono::Weekday::Tue => Self::Tuesday,
            chrono::Weekday::Wed => Self::Wednesday,
            chrono::Weekday::Thu => Self::Thursday,
            chrono::Weekday::Fri => Self::Friday,
            chrono::Weekday::Sat => Self::Saturday,
            chrono::Weekday::Sun => Self::Sunday,
        }
    }
}

/// Result ordering requested by the caller.
///
/// When several ordering flags are supplied in one request, `nearest` wins
/// over `popular`, which wins over `most searched`; with no flag at all the
/// results come back nearest-first.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum SortPreference {
    /// Ascending distance from the search center.
    #[default]
    Nearest = 0,
    /// Featured first, then verified, then oldest (most established).
    Popular = 1,
    /// Featured first, then verified, then newest (trending).
    MostSearched = 2,
}

impl SortPreference {
    /// Resolves the request flags into a single preference.
    #[must_use]
    pub fn from_flags(nearest: bool, popular: bool, most_searched: bool) -> Self {
        if nearest {
            Self::Nearest
        } else if popular {
            Self::Popular
        } else if most_searched {
            Self::MostSearched
        } else {
            Self::Nearest
        }
    }
}

impl fmt::Display for SortPreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nearest => write!(f, "NEAREST"),
            Self::Popular => write!(f, "POPULAR"),
            Self::MostSearched => write!(f, "MOST_SEARCHED"),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn rate_direction_opposite() {
        assert_eq!(RateDirection::Buy.opposite(), RateDirection::Sell);
        assert_eq!(RateDirection::Sell.opposite(), RateDirection::Buy);
    }

    #[test]
    fn rate_direction_predicates() {
        assert!(RateDirection::Buy.is_buy());
        assert!(!RateDirection::Buy.is_sell());
        assert!(RateDirection::Sell.is_sell());
    }

    #[test]
    fn rate_direction_parse_is_case_insensitive() {
        assert_eq!("buy".parse::<RateDirection>().unwrap(), RateDirection::Buy);
        assert_eq!(
            "SELL".parse::<RateDirection>().unwrap(),
            RateDirection::Sell
        );
        assert!("hold".parse::<RateDirection>().is_err());
    }

    #[test]
    fn weekday_display_and_parse_round_trip() {
        for day in Weekday::ALL {
            let parsed: Weekday = day.to_string().parse().unwrap();
            assert_eq!(parsed, day);
        }
    }

    #[test]
    fn weekday_from_chrono() {
        assert_eq!(Weekday::from(chrono::Weekday::Mon), Weekday::Monday);
        assert_eq!(Weekday::from(chrono::Weekday::Sun), Weekday::Sunday);
    }

    #[test]
    fn sort_preference_priority() {
        assert_eq!(
            SortPreference::from_flags(true, true, true),
            SortPreference::Nearest
        );
        assert_eq!(
            SortPreference::from_flags(false, true, true),
            SortPreference::Popular
        );
        assert_eq!(
            SortPreference::from_flags(false, false, true),
            SortPreference::MostSearched
        );
        assert_eq!(
            SortPreference::from_flags(false, false, false),
            SortPreference::Nearest
        );
    }
}
