//! # Search Filter
//!
//! The validated, immutable request value that flows through the search
//! pipeline.
//!
//! A [`SearchFilter`] is constructed once at the boundary via
//! [`SearchFilterBuilder`], which performs all range validation; the
//! pipeline stages then trust it. Optional flags are tri-state
//! (`Option<bool>`): absent means "not filtered on", which is distinct
//! from "must be false".

use crate::application::error::{SearchError, SearchResult};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CurrencyId, GeoPoint, SortPreference};
use rust_decimal::Decimal;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Maximum search radius in kilometres.
pub const MAX_RADIUS_KM: f64 = 1000.0;

/// Default page size.
pub const DEFAULT_LIMIT: u32 = 9;

/// Maximum page size.
pub const MAX_LIMIT: u32 = 100;

/// A currency reference supplied by the caller: a code or an internal id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CurrencyRef {
    /// An ISO-like code, normalized to uppercase.
    Code(String),
    /// An internal currency identifier.
    Id(CurrencyId),
}

impl CurrencyRef {
    /// Parses a raw string into a reference; UUIDs become ids, everything
    /// else an uppercase code.
    #[must_use]
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match Uuid::from_str(trimmed) {
            Ok(uuid) => Self::Id(CurrencyId::from_uuid(uuid)),
            Err(_) => Self::Code(trimmed.to_uppercase()),
        }
    }
}

impl fmt::Display for CurrencyRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Code(code) => write!(f, "{code}"),
            Self::Id(id) => write!(f, "{id}"),
        }
    }
}

/// A validated nearby-search request.
#[derive(Debug, Clone)]
pub struct SearchFilter {
    center: GeoPoint,
    radius_km: f64,
    base_currency: Option<CurrencyRef>,
    target_currency: Option<CurrencyRef>,
    target_amount: Option<Decimal>,
    available_currencies: Option<Vec<String>>,
    is_active: Option<bool>,
    is_verified: Option<bool>,
    is_featured: Option<bool>,
    open_now: bool,
    sort: SortPreference,
    page: u32,
    limit: u32,
}

impl SearchFilter {
    /// Starts building a filter from the three required parameters.
    #[must_use]
    pub fn builder(latitude: f64, longitude: f64, radius_km: f64) -> SearchFilterBuilder {
        SearchFilterBuilder::new(latitude, longitude, radius_km)
    }

    /// Returns the search center.
    #[must_use]
    pub const fn center(&self) -> &GeoPoint {
        &self.center
    }

    /// Returns the search radius in kilometres.
    #[must_use]
    pub const fn radius_km(&self) -> f64 {
        self.radius_km
    }

    /// Returns the requested base currency, if any.
    #[must_use]
    pub const fn base_currency(&self) -> Option<&CurrencyRef> {
        self.base_currency.as_ref()
    }

    /// Returns the requested target currency, if any.
    #[must_use]
    pub const fn target_currency(&self) -> Option<&CurrencyRef> {
        self.target_currency.as_ref()
    }

    /// Returns the amount being converted, if any.
    #[must_use]
    pub const fn target_amount(&self) -> Option<Decimal> {
        self.target_amount
    }

    /// Returns the requested available-currency codes, if any.
    #[must_use]
    pub fn available_currencies(&self) -> Option<&[String]> {
        self.available_currencies.as_deref()
    }

    /// Returns the active-flag filter.
    #[must_use]
    pub const fn is_active(&self) -> Option<bool> {
        self.is_active
    }

    /// Returns the verified-flag filter.
    #[must_use]
    pub const fn is_verified(&self) -> Option<bool> {
        self.is_verified
    }

    /// Returns the featured-flag filter.
    #[must_use]
    pub const fn is_featured(&self) -> Option<bool> {
        self.is_featured
    }

    /// Returns true when only currently-open offices are wanted.
    #[must_use]
    pub const fn open_now(&self) -> bool {
        self.open_now
    }

    /// Returns the requested result ordering.
    #[must_use]
    pub const fn sort(&self) -> SortPreference {
        self.sort
    }

    /// Returns the 1-based page number.
    #[must_use]
    pub const fn page(&self) -> u32 {
        self.page
    }

    /// Returns the page size.
    #[must_use]
    pub const fn limit(&self) -> u32 {
        self.limit
    }
}

/// Builder for [`SearchFilter`]; validation happens in [`build`].
///
/// [`build`]: SearchFilterBuilder::build
#[derive(Debug, Clone)]
pub struct SearchFilterBuilder {
    latitude: f64,
    longitude: f64,
    radius_km: f64,
    base_currency: Option<CurrencyRef>,
    target_currency: Option<CurrencyRef>,
    target_amount: Option<Decimal>,
    available_currencies: Option<Vec<String>>,
    is_active: Option<bool>,
    is_verified: Option<bool>,
    is_featured: Option<bool>,
    open_now: bool,
    sort: SortPreference,
    page: u32,
    limit: u32,
}

impl SearchFilterBuilder {
    /// Creates a builder with default pagination and ordering.
    #[must_use]
    pub fn new(latitude: f64, longitude: f64, radius_km: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_km,
            base_currency: None,
            target_currency: None,
            target_amount: None,
            available_currencies: None,
            is_active: None,
            is_verified: None,
            is_featured: None,
            open_now: false,
            sort: SortPreference::default(),
            page: 1,
            limit: DEFAULT_LIMIT,
        }
    }

    /// Sets the base currency reference.
    #[must_use]
    pub fn base_currency(mut self, currency: CurrencyRef) -> Self {
        self.base_currency = Some(currency);
        self
    }

    /// Sets the target currency reference.
    #[must_use]
    pub fn target_currency(mut self, currency: CurrencyRef) -> Self {
        self.target_currency = Some(currency);
        self
    }

    /// Sets the amount being converted.
    #[must_use]
    pub const fn target_amount(mut self, amount: Decimal) -> Self {
        self.target_amount = Some(amount);
        self
    }

    /// Restricts results to offices trading at least one of these target
    /// currency codes.
    #[must_use]
    pub fn available_currencies(mut self, codes: Vec<String>) -> Self {
        self.available_currencies = Some(codes);
        self
    }

    /// Filters on the active flag.
    #[must_use]
    pub const fn is_active(mut self, value: bool) -> Self {
        self.is_active = Some(value);
        self
    }

    /// Filters on the verified flag.
    #[must_use]
    pub const fn is_verified(mut self, value: bool) -> Self {
        self.is_verified = Some(value);
        self
    }

    /// Filters on the featured flag.
    #[must_use]
    pub const fn is_featured(mut self, value: bool) -> Self {
        self.is_featured = Some(value);
        self
    }

    /// Restricts results to offices open at the reference instant.
    #[must_use]
    pub const fn open_now(mut self, value: bool) -> Self {
        self.open_now = value;
        self
    }

    /// Sets the result ordering.
    #[must_use]
    pub const fn sort(mut self, sort: SortPreference) -> Self {
        self.sort = sort;
        self
    }

    /// Sets the 1-based page number.
    #[must_use]
    pub const fn page(mut self, page: u32) -> Self {
        self.page = page;
        self
    }

    /// Sets the page size.
    #[must_use]
    pub const fn limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Validates and builds the filter.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidSearchParameters`] naming the
    /// offending field when a coordinate, radius, amount, or pagination
    /// value is out of range.
    pub fn build(self) -> SearchResult<SearchFilter> {
        let center = GeoPoint::new(self.longitude, self.latitude).map_err(|err| match err {
            DomainError::InvalidCoordinate { field, value } => SearchError::invalid_parameter(
                field,
                format!("{value} is out of range"),
            ),
            other => SearchError::invalid_parameter("location", other.to_string()),
        })?;

        if !(self.radius_km > 0.0 && self.radius_km <= MAX_RADIUS_KM) {
            return Err(SearchError::invalid_parameter(
                "radiusInKm",
                format!("{} must be within (0, {MAX_RADIUS_KM}]", self.radius_km),
            ));
        }
        if self.page < 1 {
            return Err(SearchError::invalid_parameter("page", "must be at least 1"));
        }
        if !(1..=MAX_LIMIT).contains(&self.limit) {
            return Err(SearchError::invalid_parameter(
                "limit",
                format!("{} must be within [1, {MAX_LIMIT}]", self.limit),
            ));
        }
        if let Some(amount) = self.target_amount {
            if amount <= Decimal::ZERO {
                return Err(SearchError::invalid_parameter(
                    "targetCurrencyRate",
                    format!("{amount} must be positive"),
                ));
            }
        }

        Ok(SearchFilter {
            center,
            radius_km: self.radius_km,
            base_currency: self.base_currency,
            target_currency: self.target_currency,
            target_amount: self.target_amount,
            available_currencies: self.available_currencies,
            is_active: self.is_active,
            is_verified: self.is_verified,
            is_featured: self.is_featured,
            open_now: self.open_now,
            sort: self.sort,
            page: self.page,
            limit: self.limit,
        })
    }
}
