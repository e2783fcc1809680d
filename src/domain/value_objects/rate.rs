//! # Rate Value Object
//!
//! A strictly positive decimal exchange rate.

use crate::domain::errors::DomainError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// A strictly positive exchange rate.
///
/// Both sides of a two-way rate (buy and sell) are independently positive;
/// this type enforces that at construction so the evaluators never divide
/// by zero or multiply by a negative.
///
/// # Examples
///
/// ```
/// use exchange_locator::domain::value_objects::rate::Rate;
/// use rust_decimal::Decimal;
///
/// let rate = Rate::new(Decimal::new(1025, 2)).unwrap();
/// assert_eq!(rate.get(), Decimal::new(1025, 2));
///
/// assert!(Rate::new(Decimal::ZERO).is_err());
/// ```
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Rate(Decimal);

impl Rate {
    /// Creates a rate, rejecting zero and negative values.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NonPositiveRate`] when `value <= 0`.
    pub fn new(value: Decimal) -> Result<Self, DomainError> {
        if value <= Decimal::ZERO {
            return Err(DomainError::NonPositiveRate(value));
        }
        Ok(Self(value))
    }

    /// Returns the underlying decimal value.
    #[must_use]
    pub const fn get(&self) -> Decimal {
        self.0
    }
}

impl fmt::Display for Rate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
