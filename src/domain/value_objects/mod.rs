//! # Value Objects
//!
//! Immutable types with validation and domain semantics.
//!
//! ## Identity Types
//!
//! - [`OfficeId`], [`CurrencyId`]: UUID-based identifiers
//!
//! ## Geometry and Time
//!
//! - [`GeoPoint`]: validated coordinate with haversine distance
//! - [`TimeOfDay`]: minute-resolution clock time with overnight wraparound
//!
//! ## Numeric Types
//!
//! - [`Rate`]: strictly positive decimal exchange rate
//!
//! ## Domain Enums
//!
//! - [`RateDirection`]: Buy or Sell side of a two-way rate
//! - [`Weekday`], [`SortPreference`]

pub mod enums;
pub mod geo_point;
pub mod ids;
pub mod rate;
pub mod time_of_day;

pub use enums::{RateDirection, SortPreference, Weekday};
pub use geo_point::GeoPoint;
pub use ids::{CurrencyId, OfficeId};
pub use rate::Rate;
pub use time_of_day::TimeOfDay;
