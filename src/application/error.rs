//! # Application Errors
//!
//! The typed failure set of the nearby-search pipeline.
//!
//! Every stage of the pipeline short-circuits with one of these variants;
//! no partial results are ever returned on failure. Missing rates for an
//! individual office are not errors — they degrade that office's result
//! instead.
//!
//! # Error Kinds
//!
//! ```text
//! SearchError
//! ├── InvalidSearchParameters  - user input, named field, never retried
//! ├── CurrencyNotFound         - unknown currency code or id
//! ├── UnsupportedCrossCurrencyPair - neither side is the reference currency
//! ├── ReferenceCurrencyUnconfigured - system misconfiguration, operator fix
//! ├── StoreUnavailable         - transient infrastructure failure, retryable
//! └── Timeout                  - deadline exceeded, retryable
//! ```

use crate::infrastructure::persistence::StoreError;
use thiserror::Error;

/// Error type for nearby-search operations.
#[derive(Debug, Clone, Error)]
pub enum SearchError {
    /// A request parameter is out of range.
    #[error("invalid search parameters: {field}: {message}")]
    InvalidSearchParameters {
        /// The offending field.
        field: &'static str,
        /// What was wrong with it.
        message: String,
    },

    /// A currency code or id did not resolve.
    #[error("currency not found: {0}")]
    CurrencyNotFound(String),

    /// Neither side of the requested pair is the reference currency.
    #[error("unsupported cross-currency pair: {base}/{target}")]
    UnsupportedCrossCurrencyPair {
        /// Requested base currency code.
        base: String,
        /// Requested target currency code.
        target: String,
    },

    /// No currency carries the reference designation.
    #[error("reference currency is not configured")]
    ReferenceCurrencyUnconfigured,

    /// The office store failed.
    #[error("office store unavailable: {0}")]
    StoreUnavailable(String),

    /// The spatial query exceeded its deadline.
    #[error("spatial query timed out after {0}ms")]
    Timeout(u64),
}

impl SearchError {
    /// Creates an invalid-parameter error naming the offending field.
    #[must_use]
    pub fn invalid_parameter(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidSearchParameters {
            field,
            message: message.into(),
        }
    }

    /// Creates a currency-not-found error.
    #[must_use]
    pub fn currency_not_found(reference: impl Into<String>) -> Self {
        Self::CurrencyNotFound(reference.into())
    }

    /// Creates a cross-currency-pair error.
    #[must_use]
    pub fn cross_currency_pair(base: impl Into<String>, target: impl Into<String>) -> Self {
        Self::UnsupportedCrossCurrencyPair {
            base: base.into(),
            target: target.into(),
        }
    }

    /// Returns true if the caller may safely retry.
    #[must_use]
    pub const fn is_retryable(&self) -> bool {
        matches!(self, Self::StoreUnavailable(_) | Self::Timeout(_))
    }

    /// Returns true if this is a user-input validation error.
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::InvalidSearchParameters { .. })
    }

    /// Returns true if this indicates an operator-side misconfiguration or
    /// infrastructure failure rather than bad input.
    #[must_use]
    pub const fn is_server_side(&self) -> bool {
        matches!(
            self,
            Self::ReferenceCurrencyUnconfigured | Self::StoreUnavailable(_) | Self::Timeout(_)
        )
    }
}

impl From<StoreError> for SearchError {
    fn from(error: StoreError) -> Self {
        Self::StoreUnavailable(error.to_string())
    }
}

/// Result type for nearby-search operations.
pub type SearchResult<T> = Result<T, SearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_parameter_names_the_field() {
        let err = SearchError::invalid_parameter("latitude", "must be within [-90, 90]");
        assert!(err.to_string().contains("latitude"));
        assert!(err.is_validation());
        assert!(!err.is_retryable());
    }

    #[test]
    fn currency_not_found_shows_code() {
        let err = SearchError::currency_not_found("XYZ");
        assert!(err.to_string().contains("XYZ"));
        assert!(!err.is_server_side());
    }

    #[test]
    fn cross_currency_pair_shows_both_sides() {
        let err = SearchError::cross_currency_pair("USD", "EUR");
        assert!(err.to_string().contains("USD"));
        assert!(err.to_string().contains("EUR"));
    }

    #[test]
    fn retryable_variants() {
        assert!(SearchError::StoreUnavailable("down".into()).is_retryable());
        assert!(SearchError::Timeout(2000).is_retryable());
        assert!(!SearchError::ReferenceCurrencyUnconfigured.is_retryable());
    }

    #[test]
    fn store_error_converts_to_store_unavailable() {
        let err: SearchError = StoreError::unavailable("connection refused").into();
        assert!(matches!(err, SearchError::StoreUnavailable(_)));
        assert!(err.is_server_side());
    }
}
