//! # Currency Direction Resolution
//!
//! Decides which side of a two-way rate applies to a requested conversion.
//!
//! Rates are stored in one orientation only: reference currency → foreign
//! currency. When the caller asks for the opposite orientation the pair is
//! swapped and the buy side applies; direction-aware consumers downstream
//! always see the stored orientation.

use crate::application::error::{SearchError, SearchResult};
use crate::application::search_filter::{CurrencyRef, SearchFilter};
use crate::domain::entities::Currency;
use crate::domain::value_objects::{CurrencyId, RateDirection};
use crate::infrastructure::persistence::CurrencyLookup;
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// The outcome of currency-direction resolution for one request.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedCurrencyFilter {
    /// Base currency id in stored orientation (the reference currency
    /// whenever a direction is set).
    pub base_id: CurrencyId,
    /// Target currency id in stored orientation, when a pair was requested.
    pub target_id: Option<CurrencyId>,
    /// Which rate side applies; absent for unconstrained queries.
    pub direction: Option<RateDirection>,
    /// Resolved ids for the available-currencies filter.
    pub available_currency_ids: Option<Vec<CurrencyId>>,
    /// The amount being converted.
    pub amount: Decimal,
}

/// Resolves currency references and conversion direction.
///
/// Determinism: the same filter against the same lookup contents always
/// yields the same resolution.
#[derive(Debug, Clone)]
pub struct CurrencyDirectionResolver {
    lookup: Arc<dyn CurrencyLookup>,
}

impl CurrencyDirectionResolver {
    /// Creates a resolver over the given currency lookup.
    #[must_use]
    pub fn new(lookup: Arc<dyn CurrencyLookup>) -> Self {
        Self { lookup }
    }

    /// Resolves the filter's currency references into stored-orientation
    /// ids and a rate direction.
    ///
    /// When exactly one side of the pair is supplied, the missing side
    /// defaults to the reference currency. With no side supplied at all the
    /// query is unconstrained: base defaults to the reference currency and
    /// no direction is set.
    ///
    /// # Errors
    ///
    /// - [`SearchError::ReferenceCurrencyUnconfigured`] when no currency
    ///   carries the reference designation
    /// - [`SearchError::CurrencyNotFound`] when a code or id does not
    ///   resolve
    /// - [`SearchError::UnsupportedCrossCurrencyPair`] when neither side of
    ///   a two-sided request is the reference currency
    pub async fn resolve(&self, filter: &SearchFilter) -> SearchResult<ResolvedCurrencyFilter> {
        let reference = self
            .lookup
            .reference_currency()
            .await?
            .ok_or(SearchError::ReferenceCurrencyUnconfigured)?;

        let available_currency_ids = match filter.available_currencies() {
            Some(codes) => {
                let mut ids = Vec::with_capacity(codes.len());
                for code in codes {
                    ids.push(self.resolve_ref(&CurrencyRef::parse(code)).await?.id());
                }
                Some(ids)
            }
            None => None,
        };

        let amount = filter.target_amount().unwrap_or(Decimal::ONE);

        let base = match filter.base_currency() {
            Some(reference_to_base) => Some(self.resolve_ref(reference_to_base).await?),
            None => None,
        };
        let target = match filter.target_currency() {
            Some(reference_to_target) => Some(self.resolve_ref(reference_to_target).await?),
            None => None,
        };

        let resolved = match (base, target) {
            // Unconstrained query: anchor on the reference currency.
            (None, None) => ResolvedCurrencyFilter {
                base_id: reference.id(),
                target_id: None,
                direction: None,
                available_currency_ids,
                amount,
            },
            (base, target) => {
                let base = base.unwrap_or_else(|| reference.clone());
                let target = target.unwrap_or_else(|| reference.clone());

                if base.id() == reference.id() {
                    // Reference → foreign: the office sells the foreign
                    // currency to the client.
                    ResolvedCurrencyFilter {
                        base_id: base.id(),
                        target_id: Some(target.id()),
                        direction: Some(RateDirection::Sell),
                        available_currency_ids,
                        amount,
                    }
                } else if target.id() == reference.id() {
                    // Foreign → reference: swap into stored orientation, the
                    // office buys the foreign currency from the client.
                    ResolvedCurrencyFilter {
                        base_id: target.id(),
                        target_id: Some(base.id()),
                        direction: Some(RateDirection::Buy),
                        available_currency_ids,
                        amount,
                    }
                } else {
                    return Err(SearchError::cross_currency_pair(
                        base.code().to_string(),
                        target.code().to_string(),
                    ));
                }
            }
        };

        debug!(
            direction = ?resolved.direction,
            target = ?resolved.target_id,
            "resolved currency filter"
        );
        Ok(resolved)
    }

    async fn resolve_ref(&self, currency_ref: &CurrencyRef) -> SearchResult<Currency> {
        let found = match currency_ref {
            CurrencyRef::Code(code) => self.lookup.find_by_code(code).await?,
            CurrencyRef::Id(id) => self.lookup.find_by_id(id).await?,
        };
        found.ok_or_else(|| SearchError::currency_not_found(currency_ref.to_string()))
    }
}
