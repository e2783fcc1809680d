//! # In-Memory Office Store
//!
//! In-memory implementation of [`OfficeStore`] backing the binary and the
//! tests.
//!
//! Uses a thread-safe `HashMap` keyed by office id. The spatial query
//! over-approximates with a latitude/longitude bounding box; the search
//! core re-checks exact distances, so the box only has to be sound, not
//! tight.

use crate::domain::entities::Office;
use crate::domain::value_objects::geo_point::EARTH_RADIUS_KM;
use crate::domain::value_objects::{GeoPoint, OfficeId};
use crate::infrastructure::persistence::traits::{OfficeStore, StoreResult};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// In-memory implementation of [`OfficeStore`].
#[derive(Debug, Clone, Default)]
pub struct InMemoryOfficeStore {
    storage: Arc<RwLock<HashMap<OfficeId, Office>>>,
}

impl InMemoryOfficeStore {
    /// Creates a new empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an office.
    pub async fn insert(&self, office: Office) {
        let mut storage = self.storage.write().await;
        storage.insert(office.id(), office);
    }

    /// Returns the number of stored offices.
    #[must_use]
    pub fn len(&self) -> usize {
        self.storage
            .try_read()
            .map(|guard| guard.len())
            .unwrap_or(0)
    }

    /// Returns true if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Removes all offices.
    pub async fn clear(&self) {
        let mut storage = self.storage.write().await;
        storage.clear();
    }
}

/// Degree half-spans of a bounding box that contains every point within
/// `radius_km` of a center at the given latitude.
fn bounding_half_spans(latitude_deg: f64, radius_km: f64) -> (f64, f64) {
    let lat_span = (radius_km / EARTH_RADIUS_KM).to_degrees();
    let cos_lat = latitude_deg.to_radians().cos();
    // Near the poles the longitude band degenerates; cover all longitudes.
    let lon_span = if cos_lat < 1e-6 {
        180.0
    } else {
        (radius_km / (EARTH_RADIUS_KM * cos_lat)).to_degrees()
    };
    (lat_span, lon_span)
}

#[async_trait]
impl OfficeStore for InMemoryOfficeStore {
    async fn find_in_region(
        &self,
        center: &GeoPoint,
        radius_km: f64,
    ) -> StoreResult<Vec<Office>> {
        let (lat_span, lon_span) = bounding_half_spans(center.latitude(), radius_km);
        let storage = self.storage.read().await;
        let rows = storage
            .values()
            .filter(|office| {
                let location = office.location();
                (location.latitude() - center.latitude()).abs() <= lat_span
                    && (location.longitude() - center.longitude()).abs() <= lon_span
            })
            .cloned()
            .collect();
        Ok(rows)
    }
}
