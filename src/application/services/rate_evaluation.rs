//! # Rate Evaluation
//!
//! Computes the currency-specific equivalent value for one office.
//!
//! A missing or inactive rate is not an error: the office stays in the
//! results with an absent equivalent value and simply cannot win the
//! best-office selection.

use crate::application::services::direction::ResolvedCurrencyFilter;
use crate::domain::entities::Office;
use crate::domain::value_objects::RateDirection;
use rust_decimal::{Decimal, RoundingStrategy};

/// Evaluates office rates into equivalent values.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateEvaluator;

impl RateEvaluator {
    /// Creates a new evaluator.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Computes the equivalent value for an office under the resolved
    /// filter, or `None` when no active rate matches the pair exactly,
    /// no direction was resolved, or the arithmetic cannot be represented.
    ///
    /// - BUY: the client hands over foreign currency and receives
    ///   `amount * buy_rate` reference-currency units.
    /// - SELL: the client wants `amount` of the foreign currency and pays
    ///   `amount / sell_rate` reference-currency units.
    ///
    /// Results are rounded half-up to two decimal places.
    #[must_use]
    pub fn evaluate(&self, office: &Office, resolved: &ResolvedCurrencyFilter) -> Option<Decimal> {
        let direction = resolved.direction?;
        let target_id = resolved.target_id?;
        let rate = office.find_active_rate(&resolved.base_id, &target_id)?;

        let raw = match direction {
            RateDirection::Buy => resolved.amount.checked_mul(rate.buy_rate().get()),
            RateDirection::Sell => resolved.amount.checked_div(rate.sell_rate().get()),
        }?;

        Some(round2(raw))
    }
}

/// Half-up rounding to two decimal places.
fn round2(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::domain::entities::OfficeRate;
    use crate::domain::value_objects::{CurrencyId, GeoPoint, Rate, RateDirection};

    fn office_with_rate(
        base: CurrencyId,
        target: CurrencyId,
        buy: Decimal,
        sell: Decimal,
        active: bool,
    ) -> Office {
        Office::builder("Atlas Change", GeoPoint::new(-7.59, 33.57).unwrap())
            .with_rate(
                OfficeRate::new(base, target, Rate::new(buy).unwrap(), Rate::new(sell).unwrap())
                    .with_active(active),
            )
            .build()
            .unwrap()
    }

    fn resolved(
        base: CurrencyId,
        target: CurrencyId,
        direction: RateDirection,
        amount: Decimal,
    ) -> ResolvedCurrencyFilter {
        ResolvedCurrencyFilter {
            base_id: base,
            target_id: Some(target),
            direction: Some(direction),
            available_currency_ids: None,
            amount,
        }
    }

    #[test]
    fn sell_divides_by_sell_rate() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office = office_with_rate(
            base,
            target,
            Decimal::new(1015, 2),
            Decimal::new(1025, 2),
            true,
        );

        // 1000 MAD worth of USD at sell 10.25 → 97.56.
        let value = RateEvaluator::new()
            .evaluate(
                &office,
                &resolved(base, target, RateDirection::Sell, Decimal::new(1000, 0)),
            )
            .unwrap();
        assert_eq!(value, Decimal::new(9756, 2));
    }

    #[test]
    fn buy_multiplies_by_buy_rate() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office = office_with_rate(
            base,
            target,
            Decimal::new(1015, 2),
            Decimal::new(1025, 2),
            true,
        );

        // 100 USD at buy 10.15 → 1015.00.
        let value = RateEvaluator::new()
            .evaluate(
                &office,
                &resolved(base, target, RateDirection::Buy, Decimal::new(100, 0)),
            )
            .unwrap();
        assert_eq!(value, Decimal::new(101500, 2));
    }

    #[test]
    fn rounding_is_half_up() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        // buy 3.333, amount 1.5 → 4.9995 → 5.00 half-up.
        let office = office_with_rate(
            base,
            target,
            Decimal::new(3333, 3),
            Decimal::new(1000, 3),
            true,
        );

        let value = RateEvaluator::new()
            .evaluate(
                &office,
                &resolved(base, target, RateDirection::Buy, Decimal::new(15, 1)),
            )
            .unwrap();
        assert_eq!(value, Decimal::new(500, 2));
    }

    #[test]
    fn inactive_rate_yields_absent() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office = office_with_rate(
            base,
            target,
            Decimal::new(1015, 2),
            Decimal::new(1025, 2),
            false,
        );

        let value = RateEvaluator::new().evaluate(
            &office,
            &resolved(base, target, RateDirection::Sell, Decimal::ONE),
        );
        assert!(value.is_none());
    }

    #[test]
    fn missing_pair_yields_absent() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office = office_with_rate(
            base,
            target,
            Decimal::new(1015, 2),
            Decimal::new(1025, 2),
            true,
        );

        let other = CurrencyId::new_v4();
        let value = RateEvaluator::new().evaluate(
            &office,
            &resolved(base, other, RateDirection::Sell, Decimal::ONE),
        );
        assert!(value.is_none());
    }

    #[test]
    fn no_direction_yields_absent() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office = office_with_rate(
            base,
            target,
            Decimal::new(1015, 2),
            Decimal::new(1025, 2),
            true,
        );

        let unconstrained = ResolvedCurrencyFilter {
            base_id: base,
            target_id: None,
            direction: None,
            available_currency_ids: None,
            amount: Decimal::ONE,
        };
        assert!(RateEvaluator::new().evaluate(&office, &unconstrained).is_none());
    }
}
