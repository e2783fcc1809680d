//! # Ranking Engine
//!
//! Orders candidates and selects the single best office.
//!
//! Ordering and selection are separate concerns: the sort satisfies the
//! caller's preference, while the best-office selection is always driven by
//! equivalent value under the resolved direction. Both are stable, so ties
//! keep their already-applied order.

use crate::application::services::nearby_search::RankedOfficeResult;
use crate::domain::value_objects::{OfficeId, RateDirection, SortPreference};
use std::cmp::Ordering;

/// Sorts candidates and picks the best office.
#[derive(Debug, Clone, Copy, Default)]
pub struct RankingEngine;

impl RankingEngine {
    /// Creates a new ranking engine.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Sorts the results in place according to the preference.
    ///
    /// - `Nearest` (and the default): ascending distance
    /// - `Popular`: featured first, then verified, then oldest first
    /// - `MostSearched`: featured first, then verified, then newest first
    pub fn rank(&self, results: &mut [RankedOfficeResult], preference: SortPreference) {
        match preference {
            SortPreference::Nearest => {
                results.sort_by(|a, b| {
                    a.distance_in_km
                        .partial_cmp(&b.distance_in_km)
                        .unwrap_or(Ordering::Equal)
                });
            }
            SortPreference::Popular => {
                results.sort_by(|a, b| {
                    b.office
                        .is_featured()
                        .cmp(&a.office.is_featured())
                        .then(b.office.is_verified().cmp(&a.office.is_verified()))
                        .then(a.office.created_at().cmp(&b.office.created_at()))
                });
            }
            SortPreference::MostSearched => {
                results.sort_by(|a, b| {
                    b.office
                        .is_featured()
                        .cmp(&a.office.is_featured())
                        .then(b.office.is_verified().cmp(&a.office.is_verified()))
                        .then(b.office.created_at().cmp(&a.office.created_at()))
                });
            }
        }
    }

    /// Selects the best office by equivalent value under the direction.
    ///
    /// Only candidates with a present equivalent value qualify. Under
    /// `Buy` the client receives reference-currency units, so the maximum
    /// wins; under `Sell` the client pays them, so the minimum wins. Ties
    /// keep the earliest candidate in the already-applied sort order.
    /// Returns `None` when no direction is set or no candidate qualifies.
    #[must_use]
    pub fn select_best(
        &self,
        results: &[RankedOfficeResult],
        direction: Option<RateDirection>,
    ) -> Option<OfficeId> {
        let direction = direction?;
        let mut best: Option<(OfficeId, rust_decimal::Decimal)> = None;

        for result in results {
            let Some(value) = result.equivalent_value else {
                continue;
            };
            let better = match best {
                None => true,
                Some((_, best_value)) => match direction {
                    RateDirection::Buy => value > best_value,
                    RateDirection::Sell => value < best_value,
                },
            };
            if better {
                best = Some((result.office.id(), value));
            }
        }

        best.map(|(id, _)| id)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::Office;
    use crate::domain::value_objects::GeoPoint;
    use chrono::{TimeZone, Utc};
    use rust_decimal::Decimal;

    fn result(
        name: &str,
        distance: f64,
        featured: bool,
        verified: bool,
        created_year: i32,
        equivalent: Option<Decimal>,
    ) -> RankedOfficeResult {
        let office = Office::builder(name, GeoPoint::new(-7.59, 33.57).unwrap())
            .with_featured(featured)
            .with_verified(verified)
            .with_created_at(Utc.with_ymd_and_hms(created_year, 1, 1, 0, 0, 0).unwrap())
            .build()
            .unwrap();
        RankedOfficeResult {
            office,
            distance_in_km: distance,
            equivalent_value: equivalent,
            best_office: false,
            is_currently_open: false,
            today_working_hours: None,
        }
    }

    fn names(results: &[RankedOfficeResult]) -> Vec<&str> {
        results.iter().map(|r| r.office.name()).collect()
    }

    #[test]
    fn nearest_sorts_by_ascending_distance() {
        let mut results = vec![
            result("far", 8.0, false, false, 2020, None),
            result("near", 1.0, false, false, 2020, None),
            result("mid", 4.0, false, false, 2020, None),
        ];
        RankingEngine::new().rank(&mut results, SortPreference::Nearest);
        assert_eq!(names(&results), vec!["near", "mid", "far"]);
    }

    #[test]
    fn popular_prefers_featured_verified_then_oldest() {
        let mut results = vec![
            result("plain-new", 1.0, false, false, 2024, None),
            result("featured-young", 2.0, true, true, 2023, None),
            result("featured-old", 3.0, true, true, 2019, None),
            result("verified-only", 4.0, false, true, 2018, None),
        ];
        RankingEngine::new().rank(&mut results, SortPreference::Popular);
        assert_eq!(
            names(&results),
            vec!["featured-old", "featured-young", "verified-only", "plain-new"]
        );
    }

    #[test]
    fn most_searched_prefers_featured_verified_then_newest() {
        let mut results = vec![
            result("featured-old", 3.0, true, true, 2019, None),
            result("featured-young", 2.0, true, true, 2023, None),
            result("plain", 1.0, false, false, 2024, None),
        ];
        RankingEngine::new().rank(&mut results, SortPreference::MostSearched);
        assert_eq!(
            names(&results),
            vec!["featured-young", "featured-old", "plain"]
        );
    }

    #[test]
    fn select_best_buy_takes_maximum() {
        let results = vec![
            result("low", 1.0, false, false, 2020, Some(Decimal::new(1000, 0))),
            result("high", 2.0, false, false, 2020, Some(Decimal::new(1015, 0))),
        ];
        let best = RankingEngine::new()
            .select_best(&results, Some(RateDirection::Buy))
            .unwrap();
        assert_eq!(best, results.get(1).unwrap().office.id());
    }

    #[test]
    fn select_best_sell_takes_minimum() {
        let results = vec![
            result("cheap", 1.0, false, false, 2020, Some(Decimal::new(9756, 2))),
            result("dear", 2.0, false, false, 2020, Some(Decimal::new(9800, 2))),
        ];
        let best = RankingEngine::new()
            .select_best(&results, Some(RateDirection::Sell))
            .unwrap();
        assert_eq!(best, results.first().unwrap().office.id());
    }

    #[test]
    fn select_best_skips_absent_values() {
        let results = vec![
            result("no-rate", 1.0, false, false, 2020, None),
            result("rated", 2.0, false, false, 2020, Some(Decimal::ONE)),
        ];
        let best = RankingEngine::new()
            .select_best(&results, Some(RateDirection::Buy))
            .unwrap();
        assert_eq!(best, results.get(1).unwrap().office.id());
    }

    #[test]
    fn select_best_absent_when_no_values() {
        let results = vec![
            result("a", 1.0, false, false, 2020, None),
            result("b", 2.0, false, false, 2020, None),
        ];
        assert!(
            RankingEngine::new()
                .select_best(&results, Some(RateDirection::Buy))
                .is_none()
        );
    }

    #[test]
    fn select_best_absent_without_direction() {
        let results = vec![result("a", 1.0, false, false, 2020, Some(Decimal::ONE))];
        assert!(RankingEngine::new().select_best(&results, None).is_none());
    }

    #[test]
    fn select_best_tie_keeps_first_in_order() {
        let results = vec![
            result("first", 1.0, false, false, 2020, Some(Decimal::new(100, 0))),
            result("second", 2.0, false, false, 2020, Some(Decimal::new(100, 0))),
        ];
        let best = RankingEngine::new()
            .select_best(&results, Some(RateDirection::Buy))
            .unwrap();
        assert_eq!(best, results.first().unwrap().office.id());
    }
}
