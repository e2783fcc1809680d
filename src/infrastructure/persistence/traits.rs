//! # Store Traits
//!
//! Port definitions for the read-only collaborators the search core
//! consumes.
//!
//! The core never persists anything; it reads offices and currencies
//! through these traits. Implementations can use different backends like
//! PostgreSQL or in-memory storage.
//!
//! # Available Ports
//!
//! - [`OfficeStore`]: spatial row source for offices
//! - [`CurrencyLookup`]: currency resolution and the reference-currency
//!   designation

use crate::domain::entities::{Currency, Office};
use crate::domain::value_objects::{CurrencyId, GeoPoint};
use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for store operations.
#[derive(Debug, Clone, Error)]
pub enum StoreError {
    /// The backing store could not be reached.
    #[error("store unavailable: {0}")]
    Unavailable(String),

    /// The store rejected or failed the query.
    #[error("query error: {0}")]
    Query(String),
}

impl StoreError {
    /// Creates an unavailable error.
    #[must_use]
    pub fn unavailable(msg: impl Into<String>) -> Self {
        Self::Unavailable(msg.into())
    }

    /// Creates a query error.
    #[must_use]
    pub fn query(msg: impl Into<String>) -> Self {
        Self::Query(msg.into())
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Read-only spatial row source for offices.
///
/// `find_in_region` may over-approximate (e.g. with a bounding box); the
/// search core always re-checks the exact great-circle distance, so
/// returning extra rows is harmless while missing rows is not.
#[async_trait]
pub trait OfficeStore: Send + Sync + fmt::Debug {
    /// Fetches all offices that may lie within `radius_km` of `center`.
    async fn find_in_region(&self, center: &GeoPoint, radius_km: f64)
    -> StoreResult<Vec<Office>>;
}

/// Read-only currency resolution.
///
/// Exactly one currency carries the reference designation; when none does,
/// `reference_currency` returns `Ok(None)` and every directional search
/// fails upstream.
#[async_trait]
pub trait CurrencyLookup: Send + Sync + fmt::Debug {
    /// Finds a currency by its code, case-insensitively.
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Currency>>;

    /// Finds a currency by its identifier.
    async fn find_by_id(&self, id: &CurrencyId) -> StoreResult<Option<Currency>>;

    /// Returns the canonical reference currency, if one is designated.
    async fn reference_currency(&self) -> StoreResult<Option<Currency>>;
}
