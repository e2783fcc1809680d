//! # Seed Loading
//!
//! JSON seed file support for hydrating the in-memory stores.
//!
//! The seed format is a plain serde shape; mapping into domain entities
//! happens here, at the storage boundary, so the core never sees storage
//! DTOs.

use crate::domain::entities::{BreakWindow, Currency, Office, OfficeRate, WorkingHour};
use crate::domain::errors::DomainError;
use crate::domain::value_objects::enums::ParseEnumError;
use crate::domain::value_objects::time_of_day::ParseTimeError;
use crate::domain::value_objects::{CurrencyId, GeoPoint, Rate, TimeOfDay, Weekday};
use crate::infrastructure::persistence::in_memory::{
    InMemoryCurrencyLookup, InMemoryOfficeStore,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;
use thiserror::Error;

/// Error type for seed loading.
#[derive(Debug, Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    /// The seed file is not valid JSON for the expected shape.
    #[error("failed to parse seed file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A rate or the reference designation names a currency that is not in
    /// the currency list.
    #[error("unknown currency code in seed: {0}")]
    UnknownCurrency(String),

    /// A seeded value violates a domain invariant.
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// A schedule time could not be parsed.
    #[error(transparent)]
    Time(#[from] ParseTimeError),

    /// A weekday name could not be parsed.
    #[error(transparent)]
    Enum(#[from] ParseEnumError),
}

/// One currency in the seed file.
#[derive(Debug, Deserialize)]
pub struct CurrencySeed {
    /// ISO-like code, e.g. "MAD".
    pub code: String,
    /// Display symbol, e.g. "DH".
    pub symbol: String,
}

/// One published rate in the seed file, by currency code.
#[derive(Debug, Deserialize)]
pub struct RateSeed {
    /// Base currency code (the reference currency in stored data).
    pub base_currency: String,
    /// Target currency code.
    pub target_currency: String,
    /// Buy-side rate.
    pub buy_rate: Decimal,
    /// Sell-side rate.
    pub sell_rate: Decimal,
    /// Whether the rate is currently published.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One schedule entry in the seed file.
#[derive(Debug, Deserialize)]
pub struct WorkingHourSeed {
    /// Weekday name, e.g. "MONDAY".
    pub weekday: String,
    /// Opening time, HH:MM.
    pub from_time: String,
    /// Closing time, HH:MM; may be earlier than `from_time` for overnight
    /// windows.
    pub to_time: String,
    /// Break start, HH:MM.
    #[serde(default)]
    pub break_from_time: Option<String>,
    /// Break end, HH:MM.
    #[serde(default)]
    pub break_to_time: Option<String>,
    /// Whether the entry is in force.
    #[serde(default = "default_true")]
    pub is_active: bool,
}

/// One office in the seed file.
#[derive(Debug, Deserialize)]
pub struct OfficeSeed {
    /// Office name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: String,
    /// City name.
    #[serde(default)]
    pub city: String,
    /// Country name.
    #[serde(default)]
    pub country: String,
    /// Longitude in degrees.
    pub longitude: f64,
    /// Latitude in degrees.
    pub latitude: f64,
    /// Activity flag.
    #[serde(default = "default_true")]
    pub is_active: bool,
    /// Verification flag.
    #[serde(default)]
    pub is_verified: bool,
    /// Featured flag.
    #[serde(default)]
    pub is_featured: bool,
    /// Creation instant; defaults to load time.
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    /// Published rates.
    #[serde(default)]
    pub rates: Vec<RateSeed>,
    /// Weekly schedule.
    #[serde(default)]
    pub working_hours: Vec<WorkingHourSeed>,
}

/// The whole seed file.
#[derive(Debug, Deserialize)]
pub struct SeedData {
    /// Code of the canonical reference currency; must appear in
    /// `currencies`.
    pub reference_currency: String,
    /// All known currencies.
    pub currencies: Vec<CurrencySeed>,
    /// All offices.
    pub offices: Vec<OfficeSeed>,
}

const fn default_true() -> bool {
    true
}

impl SeedData {
    /// Parses a seed file from disk.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] or [`SeedError::Parse`] on unreadable or
    /// malformed input.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, SeedError> {
        let raw = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&raw)?)
    }

    /// Builds in-memory stores from the seed.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::UnknownCurrency`] when a rate or the reference
    /// designation names an unlisted code, or a domain/parse error when a
    /// seeded value is invalid.
    pub async fn build_stores(
        self,
    ) -> Result<(InMemoryOfficeStore, InMemoryCurrencyLookup), SeedError> {
        let lookup = InMemoryCurrencyLookup::new();
        let mut ids_by_code: HashMap<String, CurrencyId> = HashMap::new();

        let reference_code = self.reference_currency.trim().to_uppercase();
        for seed in self.currencies {
            let currency = Currency::new(seed.code, seed.symbol)?;
            ids_by_code.insert(currency.code().to_string(), currency.id());
            if currency.code() == reference_code {
                lookup.insert_reference(currency).await;
            } else {
                lookup.insert(currency).await;
            }
        }
        if !ids_by_code.contains_key(&reference_code) {
            return Err(SeedError::UnknownCurrency(reference_code));
        }

        let resolve = |code: &str| -> Result<CurrencyId, SeedError> {
            let normalized = code.trim().to_uppercase();
            ids_by_code
                .get(&normalized)
                .copied()
                .ok_or(SeedError::UnknownCurrency(normalized))
        };

        let store = InMemoryOfficeStore::new();
        for seed in self.offices {
            let location = GeoPoint::new(seed.longitude, seed.latitude)?;
            let mut builder = Office::builder(seed.name, location)
                .with_address(seed.address)
                .with_city(seed.city)
                .with_country(seed.country)
                .with_active(seed.is_active)
                .with_verified(seed.is_verified)
                .with_featured(seed.is_featured);
            if let Some(created_at) = seed.created_at {
                builder = builder.with_created_at(created_at);
            }

            for rate in seed.rates {
                builder = builder.with_rate(
                    OfficeRate::new(
                        resolve(&rate.base_currency)?,
                        resolve(&rate.target_currency)?,
                        Rate::new(rate.buy_rate)?,
                        Rate::new(rate.sell_rate)?,
                    )
                    .with_active(rate.is_active),
                );
            }

            for hours in seed.working_hours {
                let weekday: Weekday = hours.weekday.parse()?;
                let from: TimeOfDay = hours.from_time.parse()?;
                let to: TimeOfDay = hours.to_time.parse()?;
                let mut entry =
                    WorkingHour::new(weekday, from, to).with_active(hours.is_active);
                if let (Some(break_from), Some(break_to)) =
                    (hours.break_from_time, hours.break_to_time)
                {
                    entry = entry
                        .with_break(BreakWindow::new(break_from.parse()?, break_to.parse()?))?;
                }
                builder = builder.with_working_hour(entry);
            }

            store.insert(builder.build()?).await;
        }

        Ok((store, lookup))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::infrastructure::persistence::traits::CurrencyLookup;

    const SEED: &str = r#"{
        "reference_currency": "MAD",
        "currencies": [
            {"code": "MAD", "symbol": "DH"},
            {"code": "USD", "symbol": "$"}
        ],
        "offices": [
            {
                "name": "Atlas Change",
                "city": "Casablanca",
                "country": "Morocco",
                "longitude": -7.5898,
                "latitude": 33.5731,
                "is_verified": true,
                "rates": [
                    {
                        "base_currency": "MAD",
                        "target_currency": "USD",
                        "buy_rate": "10.15",
                        "sell_rate": "10.25"
                    }
                ],
                "working_hours": [
                    {
                        "weekday": "MONDAY",
                        "from_time": "09:00",
                        "to_time": "18:00",
                        "break_from_time": "13:00",
                        "break_to_time": "14:00"
                    }
                ]
            }
        ]
    }"#;

    #[tokio::test]
    async fn builds_stores_from_json() {
        let seed: SeedData = serde_json::from_str(SEED).unwrap();
        let (store, lookup) = seed.build_stores().await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(lookup.len(), 2);
        let reference = lookup.reference_currency().await.unwrap().unwrap();
        assert_eq!(reference.code(), "MAD");
    }

    #[tokio::test]
    async fn unknown_rate_currency_fails() {
        let raw = SEED.replace("\"target_currency\": \"USD\"", "\"target_currency\": \"GBP\"");
        let seed: SeedData = serde_json::from_str(&raw).unwrap();
        let err = seed.build_stores().await.unwrap_err();
        assert!(matches!(err, SeedError::UnknownCurrency(code) if code == "GBP"));
    }

    #[tokio::test]
    async fn unknown_reference_currency_fails() {
        let raw = SEED.replace("\"reference_currency\": \"MAD\"", "\"reference_currency\": \"CHF\"");
        let seed: SeedData = serde_json::from_str(&raw).unwrap();
        assert!(matches!(
            seed.build_stores().await,
            Err(SeedError::UnknownCurrency(_))
        ));
    }
}
