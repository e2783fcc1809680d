//! # Nearby Search Engine
//!
//! Orchestrates the full search pipeline for one request.
//!
//! This module provides the [`NearbySearchEngine`] which composes currency
//! resolution, the spatial query, hours evaluation, rate evaluation,
//! ranking, and pagination into one request/response cycle. Any failure
//! short-circuits with a typed [`SearchError`]; no partial results are
//! returned. The engine is stateless: concurrent requests share nothing
//! but the injected read-only stores.

use crate::application::error::SearchResult;
use crate::application::search_filter::SearchFilter;
use crate::application::services::direction::CurrencyDirectionResolver;
use crate::application::services::hours::WorkingHoursEvaluator;
use crate::application::services::pagination::PaginationAssembler;
use crate::application::services::ranking::RankingEngine;
use crate::application::services::rate_evaluation::RateEvaluator;
use crate::application::services::spatial::{SpatialFilterEngine, SpatialQueryConfig};
use crate::domain::entities::{Office, WorkingHour};
use crate::infrastructure::persistence::{CurrencyLookup, OfficeStore};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use tracing::debug;

/// Configuration for the search engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchConfig {
    /// Spatial query stage configuration.
    pub spatial: SpatialQueryConfig,
}

impl SearchConfig {
    /// Creates a configuration with the given store deadline.
    #[must_use]
    pub const fn with_store_timeout(store_timeout_ms: u64) -> Self {
        Self {
            spatial: SpatialQueryConfig { store_timeout_ms },
        }
    }
}

/// One office in a search response, enriched with request-specific data.
#[derive(Debug, Clone)]
pub struct RankedOfficeResult {
    /// The matched office.
    pub office: Office,
    /// Great-circle distance from the search center, in kilometres.
    pub distance_in_km: f64,
    /// Converted amount under the resolved direction; absent when no
    /// active rate matches.
    pub equivalent_value: Option<Decimal>,
    /// True on the single most favorable office, when one qualifies.
    pub best_office: bool,
    /// Whether the office is open at the reference instant.
    pub is_currently_open: bool,
    /// The schedule entry for the reference instant's weekday, if any.
    pub today_working_hours: Option<WorkingHour>,
}

/// One page of search results.
#[derive(Debug, Clone)]
pub struct NearbySearchPage {
    /// The offices on this page, sorted per the request.
    pub offices: Vec<RankedOfficeResult>,
    /// Number of offices on this page.
    pub offices_in_page: usize,
    /// Size of the filtered set across all pages.
    pub total_offices_in_area: usize,
    /// The 1-based page number that was requested.
    pub current_page: u32,
    /// Total number of pages.
    pub total_pages: u32,
    /// True when a later page exists.
    pub has_more: bool,
}

/// Engine composing the whole nearby-search pipeline.
#[derive(Debug, Clone)]
pub struct NearbySearchEngine {
    resolver: CurrencyDirectionResolver,
    spatial: SpatialFilterEngine,
    hours: WorkingHoursEvaluator,
    rates: RateEvaluator,
    ranking: RankingEngine,
    pagination: PaginationAssembler,
}

impl NearbySearchEngine {
    /// Creates an engine over the given stores.
    #[must_use]
    pub fn new(
        store: Arc<dyn OfficeStore>,
        lookup: Arc<dyn CurrencyLookup>,
        config: SearchConfig,
    ) -> Self {
        Self {
            resolver: CurrencyDirectionResolver::new(lookup),
            spatial: SpatialFilterEngine::new(store, config.spatial),
            hours: WorkingHoursEvaluator::new(),
            rates: RateEvaluator::new(),
            ranking: RankingEngine::new(),
            pagination: PaginationAssembler::new(),
        }
    }

    /// Creates an engine with default configuration.
    #[must_use]
    pub fn with_defaults(store: Arc<dyn OfficeStore>, lookup: Arc<dyn CurrencyLookup>) -> Self {
        Self::new(store, lookup, SearchConfig::default())
    }

    /// Runs a search against the current wall clock.
    ///
    /// # Errors
    ///
    /// Propagates any [`SearchError`](crate::application::error::SearchError)
    /// raised by a pipeline stage.
    pub async fn search(&self, filter: SearchFilter) -> SearchResult<NearbySearchPage> {
        self.search_at(filter, Utc::now()).await
    }

    /// Runs a search against an explicit reference instant.
    ///
    /// The instant drives the open-now evaluation only; everything else is
    /// time-independent.
    ///
    /// # Errors
    ///
    /// Propagates any [`SearchError`](crate::application::error::SearchError)
    /// raised by a pipeline stage.
    pub async fn search_at(
        &self,
        filter: SearchFilter,
        now: DateTime<Utc>,
    ) -> SearchResult<NearbySearchPage> {
        let resolved = self.resolver.resolve(&filter).await?;
        let outcome = self.spatial.query(&filter, &resolved).await?;

        let mut results: Vec<RankedOfficeResult> = outcome
            .candidates
            .into_iter()
            .map(|candidate| {
                let is_currently_open = self.hours.is_open(&candidate.office, now);
                let today_working_hours =
                    self.hours.today_hours(&candidate.office, now).cloned();
                let equivalent_value = self.rates.evaluate(&candidate.office, &resolved);
                RankedOfficeResult {
                    office: candidate.office,
                    distance_in_km: candidate.distance_km,
                    equivalent_value,
                    best_office: false,
                    is_currently_open,
                    today_working_hours,
                }
            })
            .collect();

        if filter.open_now() {
            results.retain(|result| result.is_currently_open);
        }
        let total_offices_in_area = results.len();

        self.ranking.rank(&mut results, filter.sort());
        if let Some(best_id) = self.ranking.select_best(&results, resolved.direction) {
            for result in &mut results {
                if result.office.id() == best_id {
                    result.best_office = true;
                }
            }
        }

        let page = self.pagination.paginate(
            results,
            total_offices_in_area,
            filter.page(),
            filter.limit(),
        );

        debug!(
            total = total_offices_in_area,
            page = page.page,
            returned = page.items.len(),
            "nearby search complete"
        );

        Ok(NearbySearchPage {
            offices_in_page: page.items.len(),
            offices: page.items,
            total_offices_in_area,
            current_page: page.page,
            total_pages: page.total_pages,
            has_more: page.has_more,
        })
    }
}
