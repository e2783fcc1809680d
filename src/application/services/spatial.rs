//! # Spatial Filter Engine
//!
//! Executes the radius search against the office store and applies the
//! non-spatial filters.
//!
//! The store may over-approximate its region query; the engine always
//! re-checks the exact great-circle distance, so the radius invariant
//! (every candidate's distance <= radius) holds regardless of backend.
//! Open-now filtering is left to the orchestrator because it depends on
//! wall-clock evaluation rather than stored columns.

use crate::application::error::{SearchError, SearchResult};
use crate::application::search_filter::SearchFilter;
use crate::application::services::direction::ResolvedCurrencyFilter;
use crate::domain::entities::Office;
use crate::infrastructure::persistence::OfficeStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::time::timeout;
use tracing::debug;

/// Default deadline for the store query, in milliseconds.
pub const DEFAULT_STORE_TIMEOUT_MS: u64 = 5000;

/// An office paired with its distance from the search center.
#[derive(Debug, Clone)]
pub struct OfficeCandidate {
    /// The matched office.
    pub office: Office,
    /// Great-circle distance from the search center, in kilometres.
    pub distance_km: f64,
}

/// Result of the spatial query stage.
#[derive(Debug)]
pub struct SpatialQueryOutcome {
    /// Offices within the radius that passed every filter, unpaginated.
    pub candidates: Vec<OfficeCandidate>,
    /// Size of the filtered set before pagination.
    pub total_count: usize,
}

/// Configuration for the spatial query stage.
#[derive(Debug, Clone, Copy)]
pub struct SpatialQueryConfig {
    /// Deadline for the single store query, in milliseconds.
    pub store_timeout_ms: u64,
}

impl Default for SpatialQueryConfig {
    fn default() -> Self {
        Self {
            store_timeout_ms: DEFAULT_STORE_TIMEOUT_MS,
        }
    }
}

/// Radius search plus conjunctive non-spatial filtering.
#[derive(Debug, Clone)]
pub struct SpatialFilterEngine {
    store: Arc<dyn OfficeStore>,
    config: SpatialQueryConfig,
}

impl SpatialFilterEngine {
    /// Creates an engine over the given store.
    #[must_use]
    pub fn new(store: Arc<dyn OfficeStore>, config: SpatialQueryConfig) -> Self {
        Self { store, config }
    }

    /// Runs the radius search and applies the filters.
    ///
    /// Issues exactly one store query under the configured deadline, keeps
    /// offices whose exact distance is within the radius, then applies the
    /// optional filters conjunctively. `total_count` covers the whole
    /// filtered set; pagination never changes it.
    ///
    /// # Errors
    ///
    /// - [`SearchError::Timeout`] when the store query exceeds its deadline
    /// - [`SearchError::StoreUnavailable`] when the store fails
    pub async fn query(
        &self,
        filter: &SearchFilter,
        resolved: &ResolvedCurrencyFilter,
    ) -> SearchResult<SpatialQueryOutcome> {
        let deadline = Duration::from_millis(self.config.store_timeout_ms);
        let fetch = self.store.find_in_region(filter.center(), filter.radius_km());
        let rows = match timeout(deadline, fetch).await {
            Ok(Ok(rows)) => rows,
            Ok(Err(store_error)) => return Err(store_error.into()),
            Err(_) => return Err(SearchError::Timeout(self.config.store_timeout_ms)),
        };
        let fetched = rows.len();

        let mut candidates: Vec<OfficeCandidate> = Vec::new();
        for office in rows {
            let distance_km = filter.center().distance_km(office.location());
            if distance_km > filter.radius_km() {
                continue;
            }
            if !matches_flags(&office, filter) {
                continue;
            }
            if !matches_currencies(&office, resolved) {
                continue;
            }
            candidates.push(OfficeCandidate {
                office,
                distance_km,
            });
        }

        let total_count = candidates.len();
        debug!(fetched, total_count, "spatial query complete");
        Ok(SpatialQueryOutcome {
            candidates,
            total_count,
        })
    }
}

/// Exact-match filtering on the optional status flags; an absent filter
/// leaves the office in.
fn matches_flags(office: &Office, filter: &SearchFilter) -> bool {
    if filter.is_active().is_some_and(|wanted| office.is_active() != wanted) {
        return false;
    }
    if filter
        .is_verified()
        .is_some_and(|wanted| office.is_verified() != wanted)
    {
        return false;
    }
    if filter
        .is_featured()
        .is_some_and(|wanted| office.is_featured() != wanted)
    {
        return false;
    }
    true
}

/// Currency filtering: the available-currencies set requires at least one
/// active rate targeting the set; a resolved directional pair requires the
/// rate to exist (active or not - a stale rate still surfaces the office,
/// with its equivalent value absent).
fn matches_currencies(office: &Office, resolved: &ResolvedCurrencyFilter) -> bool {
    if let Some(targets) = &resolved.available_currency_ids {
        if !office.has_active_rate_targeting(targets) {
            return false;
        }
    }
    if resolved.direction.is_some() {
        if let Some(target_id) = resolved.target_id {
            if !office.has_rate_for_pair(&resolved.base_id, &target_id) {
                return false;
            }
        }
    }
    true
}
