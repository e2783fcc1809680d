//! # Domain Entities
//!
//! Core business entities with identity and lifecycle.
//!
//! - [`Office`](office::Office): an exchange office with location, rates,
//!   and schedule
//! - [`Currency`](currency::Currency): a currency with code and symbol
//! - [`OfficeRate`](office_rate::OfficeRate): one office's two-way rate for
//!   a currency pair
//! - [`WorkingHour`](working_hour::WorkingHour): one weekday schedule entry

pub mod currency;
pub mod office;
pub mod office_rate;
pub mod working_hour;

pub use currency::Currency;
pub use office::{Office, OfficeBuilder};
pub use office_rate::OfficeRate;
pub use working_hour::{BreakWindow, WorkingHour};
