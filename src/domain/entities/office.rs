//! # Office Entity
//!
//! An exchange office with its location, published rates, and schedule.
//!
//! Offices are constructed through [`OfficeBuilder`], which enforces the
//! schedule invariant: at most one active working-hour entry per weekday.

use crate::domain::entities::office_rate::OfficeRate;
use crate::domain::entities::working_hour::WorkingHour;
use crate::domain::errors::DomainError;
use crate::domain::value_objects::{CurrencyId, GeoPoint, OfficeId, Weekday};
use chrono::{DateTime, Utc};
use std::collections::HashSet;
use std::fmt;

/// A currency-exchange office.
#[derive(Debug, Clone, PartialEq)]
pub struct Office {
    id: OfficeId,
    name: String,
    address: String,
    city: String,
    country: String,
    location: GeoPoint,
    is_active: bool,
    is_verified: bool,
    is_featured: bool,
    rates: Vec<OfficeRate>,
    working_hours: Vec<WorkingHour>,
    created_at: DateTime<Utc>,
}

impl Office {
    /// Starts building an office.
    #[must_use]
    pub fn builder(name: impl Into<String>, location: GeoPoint) -> OfficeBuilder {
        OfficeBuilder::new(name, location)
    }

    /// Returns the office identifier.
    #[must_use]
    pub const fn id(&self) -> OfficeId {
        self.id
    }

    /// Returns the office name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the street address.
    #[must_use]
    pub fn address(&self) -> &str {
        &self.address
    }

    /// Returns the city name.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the country name.
    #[must_use]
    pub fn country(&self) -> &str {
        &self.country
    }

    /// Returns the office location.
    #[must_use]
    pub const fn location(&self) -> &GeoPoint {
        &self.location
    }

    /// Returns true if the office is in service.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if the office identity has been verified.
    #[must_use]
    pub const fn is_verified(&self) -> bool {
        self.is_verified
    }

    /// Returns true if the office is featured.
    #[must_use]
    pub const fn is_featured(&self) -> bool {
        self.is_featured
    }

    /// Returns all published rates.
    #[must_use]
    pub fn rates(&self) -> &[OfficeRate] {
        &self.rates
    }

    /// Returns all schedule entries.
    #[must_use]
    pub fn working_hours(&self) -> &[WorkingHour] {
        &self.working_hours
    }

    /// Returns the creation instant.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the active schedule entry for a weekday, if any.
    #[must_use]
    pub fn working_hour_for(&self, weekday: Weekday) -> Option<&WorkingHour> {
        self.working_hours
            .iter()
            .find(|entry| entry.is_active() && entry.weekday() == weekday)
    }

    /// Returns the active rate for an exact (base, target) pair, if any.
    #[must_use]
    pub fn find_active_rate(
        &self,
        base: &CurrencyId,
        target: &CurrencyId,
    ) -> Option<&OfficeRate> {
        self.rates
            .iter()
            .find(|rate| rate.is_active() && rate.matches_pair(base, target))
    }

    /// Returns true if any rate (active or not) exists for the pair.
    #[must_use]
    pub fn has_rate_for_pair(&self, base: &CurrencyId, target: &CurrencyId) -> bool {
        self.rates.iter().any(|rate| rate.matches_pair(base, target))
    }

    /// Returns true if at least one active rate targets one of the given
    /// currencies.
    #[must_use]
    pub fn has_active_rate_targeting(&self, targets: &[CurrencyId]) -> bool {
        self.rates
            .iter()
            .any(|rate| rate.is_active() && targets.contains(&rate.target_currency_id()))
    }
}

impl fmt::Display for Office {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.name, self.id)
    }
}

/// Builder for [`Office`].
#[derive(Debug, Clone)]
pub struct OfficeBuilder {
    id: OfficeId,
    name: String,
    address: String,
    city: String,
    country: String,
    location: GeoPoint,
    is_active: bool,
    is_verified: bool,
    is_featured: bool,
    rates: Vec<OfficeRate>,
    working_hours: Vec<WorkingHour>,
    created_at: DateTime<Utc>,
}

impl OfficeBuilder {
    /// Creates a builder for an active, unverified, unfeatured office.
    #[must_use]
    pub fn new(name: impl Into<String>, location: GeoPoint) -> Self {
        Self {
            id: OfficeId::new_v4(),
            name: name.into(),
            address: String::new(),
            city: String::new(),
            country: String::new(),
            location,
            is_active: true,
            is_verified: false,
            is_featured: false,
            rates: Vec::new(),
            working_hours: Vec::new(),
            created_at: Utc::now(),
        }
    }

    /// Sets an explicit identifier.
    #[must_use]
    pub const fn with_id(mut self, id: OfficeId) -> Self {
        self.id = id;
        self
    }

    /// Sets the street address.
    #[must_use]
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Sets the city.
    #[must_use]
    pub fn with_city(mut self, city: impl Into<String>) -> Self {
        self.city = city.into();
        self
    }

    /// Sets the country.
    #[must_use]
    pub fn with_country(mut self, country: impl Into<String>) -> Self {
        self.country = country.into();
        self
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Sets the verified flag.
    #[must_use]
    pub const fn with_verified(mut self, is_verified: bool) -> Self {
        self.is_verified = is_verified;
        self
    }

    /// Sets the featured flag.
    #[must_use]
    pub const fn with_featured(mut self, is_featured: bool) -> Self {
        self.is_featured = is_featured;
        self
    }

    /// Adds a published rate.
    #[must_use]
    pub fn with_rate(mut self, rate: OfficeRate) -> Self {
        self.rates.push(rate);
        self
    }

    /// Adds a schedule entry.
    #[must_use]
    pub fn with_working_hour(mut self, entry: WorkingHour) -> Self {
        self.working_hours.push(entry);
        self
    }

    /// Sets the creation instant.
    #[must_use]
    pub const fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self
    }

    /// Builds the office, validating the schedule invariant.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::DuplicateWorkingHour`] when two active
    /// schedule entries cover the same weekday.
    pub fn build(self) -> Result<Office, DomainError> {
        let mut seen: HashSet<Weekday> = HashSet::new();
        for entry in self.working_hours.iter().filter(|e| e.is_active()) {
            if !seen.insert(entry.weekday()) {
                return Err(DomainError::DuplicateWorkingHour(entry.weekday()));
            }
        }

        Ok(Office {
            id: self.id,
            name: self.name,
            address: self.address,
            city: self.city,
            country: self.country,
            location: self.location,
            is_active: self.is_active,
            is_verified: self.is_verified,
            is_featured: self.is_featured,
            rates: self.rates,
            working_hours: self.working_hours,
            created_at: self.created_at,
        })
    }
}
