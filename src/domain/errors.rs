//! # Domain Errors
//!
//! Invariant violations raised while constructing domain values.

use crate::domain::value_objects::enums::Weekday;
use rust_decimal::Decimal;
use thiserror::Error;

/// Error type for domain invariant violations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// A coordinate component is outside its valid range.
    #[error("invalid coordinate: {field} = {value} is out of range")]
    InvalidCoordinate {
        /// The offending component, `latitude` or `longitude`.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// An exchange rate was zero or negative.
    #[error("rate must be positive, got {0}")]
    NonPositiveRate(Decimal),

    /// A currency code was empty or blank.
    #[error("currency code must not be empty")]
    EmptyCurrencyCode,

    /// An office declared two active schedule entries for one weekday.
    #[error("duplicate active working hours for {0}")]
    DuplicateWorkingHour(Weekday),

    /// A schedule break window falls outside the working window.
    #[error("break window {break_from}-{break_to} must lie inside the working window")]
    BreakOutsideWorkingWindow {
        /// Start of the rejected break window.
        break_from: String,
        /// End of the rejected break window.
        break_to: String,
    },
}

/// Result type for domain operations.
pub type DomainResult<T> = Result<T, DomainError>;
