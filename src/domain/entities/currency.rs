//! # Currency Entity
//!
//! A currency with an ISO-like code and display symbol.

use crate::domain::errors::DomainError;
use crate::domain::value_objects::CurrencyId;
use std::fmt;

/// A currency known to the system.
///
/// Codes are normalized to uppercase at construction so lookups are
/// case-insensitive. Exactly one currency in the system is designated the
/// canonical reference currency; that designation lives in the currency
/// lookup, not on the entity itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Currency {
    id: CurrencyId,
    code: String,
    symbol: String,
}

impl Currency {
    /// Creates a currency with a fresh identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCurrencyCode`] when the code is empty or
    /// blank.
    pub fn new(code: impl Into<String>, symbol: impl Into<String>) -> Result<Self, DomainError> {
        Self::with_id(CurrencyId::new_v4(), code, symbol)
    }

    /// Creates a currency with an explicit identifier.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::EmptyCurrencyCode`] when the code is empty or
    /// blank.
    pub fn with_id(
        id: CurrencyId,
        code: impl Into<String>,
        symbol: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let code = code.into().trim().to_uppercase();
        if code.is_empty() {
            return Err(DomainError::EmptyCurrencyCode);
        }
        Ok(Self {
            id,
            code,
            symbol: symbol.into(),
        })
    }

    /// Returns the currency identifier.
    #[must_use]
    pub const fn id(&self) -> CurrencyId {
        self.id
    }

    /// Returns the uppercase currency code.
    #[must_use]
    pub fn code(&self) -> &str {
        &self.code
    }

    /// Returns the display symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.code, self.symbol)
    }
}
