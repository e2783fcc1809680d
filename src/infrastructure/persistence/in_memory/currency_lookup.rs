//! # In-Memory Currency Lookup
//!
//! In-memory implementation of [`CurrencyLookup`] backing the binary and
//! the tests.

use crate::domain::entities::Currency;
use crate::domain::value_objects::CurrencyId;
use crate::infrastructure::persistence::traits::{CurrencyLookup, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

#[derive(Debug, Default)]
struct Inner {
    currencies: HashMap<CurrencyId, Currency>,
    reference: Option<CurrencyId>,
}

/// In-memory implementation of [`CurrencyLookup`].
///
/// Holds the currency table plus the single reference-currency
/// designation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryCurrencyLookup {
    inner: Arc<RwLock<Inner>>,
}

impl InMemoryCurrencyLookup {
    /// Creates a new empty lookup with no reference currency designated.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a currency.
    pub async fn insert(&self, currency: Currency) {
        let mut inner = self.inner.write().await;
        inner.currencies.insert(currency.id(), currency);
    }

    /// Inserts a currency and designates it as the reference currency.
    pub async fn insert_reference(&self, currency: Currency) {
        let mut inner = self.inner.write().await;
        inner.reference = Some(currency.id());
        inner.currencies.insert(currency.id(), currency);
    }

    /// Returns the number of known currencies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.inner
            .try_read()
            .map(|guard| guard.currencies.len())
            .unwrap_or(0)
    }

    /// Returns true if no currencies are known.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[async_trait]
impl CurrencyLookup for InMemoryCurrencyLookup {
    async fn find_by_code(&self, code: &str) -> StoreResult<Option<Currency>> {
        let wanted = code.trim().to_uppercase();
        let inner = self.inner.read().await;
        Ok(inner
            .currencies
            .values()
            .find(|currency| currency.code() == wanted)
            .cloned())
    }

    async fn find_by_id(&self, id: &CurrencyId) -> StoreResult<Option<Currency>> {
        let inner = self.inner.read().await;
        Ok(inner.currencies.get(id).cloned())
    }

    async fn reference_currency(&self) -> StoreResult<Option<Currency>> {
        let inner = self.inner.read().await;
        Ok(inner
            .reference
            .and_then(|id| inner.currencies.get(&id).cloned()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn find_by_code_is_case_insensitive() {
        let lookup = InMemoryCurrencyLookup::new();
        lookup.insert(Currency::new("USD", "$").unwrap()).await;

        let found = lookup.find_by_code("usd").await.unwrap();
        assert_eq!(found.unwrap().code(), "USD");
    }

    #[tokio::test]
    async fn unknown_code_returns_none() {
        let lookup = InMemoryCurrencyLookup::new();
        assert!(lookup.find_by_code("XXX").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn reference_currency_round_trips() {
        let lookup = InMemoryCurrencyLookup::new();
        let mad = Currency::new("MAD", "DH").unwrap();
        let id = mad.id();
        lookup.insert_reference(mad).await;

        let reference = lookup.reference_currency().await.unwrap().unwrap();
        assert_eq!(reference.id(), id);
    }

    #[tokio::test]
    async fn no_reference_designation_yields_none() {
        let lookup = InMemoryCurrencyLookup::new();
        lookup.insert(Currency::new("USD", "$").unwrap()).await;
        assert!(lookup.reference_currency().await.unwrap().is_none());
    }

    #[tokio::test]
    async fn find_by_id_round_trips() {
        let lookup = InMemoryCurrencyLookup::new();
        let eur = Currency::new("EUR", "€").unwrap();
        let id = eur.id();
        lookup.insert(eur).await;

        assert!(lookup.find_by_id(&id).await.unwrap().is_some());
        assert!(
            lookup
                .find_by_id(&CurrencyId::new_v4())
                .await
                .unwrap()
                .is_none()
        );
    }
}
