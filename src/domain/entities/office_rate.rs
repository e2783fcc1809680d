//! # Office Rate
//!
//! A two-way exchange rate published by one office for one currency pair.

use crate::domain::value_objects::{CurrencyId, Rate};

/// One office's two-way rate for a (base, target) currency pair.
///
/// The base side is always the reference currency in stored data; direction
/// resolution guarantees that lookups arrive in the same orientation.
/// `buy_rate` applies when the office buys the foreign currency from the
/// client, `sell_rate` when it sells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OfficeRate {
    base_currency_id: CurrencyId,
    target_currency_id: CurrencyId,
    buy_rate: Rate,
    sell_rate: Rate,
    is_active: bool,
}

impl OfficeRate {
    /// Creates an active rate for a currency pair.
    #[must_use]
    pub const fn new(
        base_currency_id: CurrencyId,
        target_currency_id: CurrencyId,
        buy_rate: Rate,
        sell_rate: Rate,
    ) -> Self {
        Self {
            base_currency_id,
            target_currency_id,
            buy_rate,
            sell_rate,
            is_active: true,
        }
    }

    /// Sets the active flag.
    #[must_use]
    pub const fn with_active(mut self, is_active: bool) -> Self {
        self.is_active = is_active;
        self
    }

    /// Returns the base currency identifier.
    #[must_use]
    pub const fn base_currency_id(&self) -> CurrencyId {
        self.base_currency_id
    }

    /// Returns the target currency identifier.
    #[must_use]
    pub const fn target_currency_id(&self) -> CurrencyId {
        self.target_currency_id
    }

    /// Returns the buy-side rate.
    #[must_use]
    pub const fn buy_rate(&self) -> Rate {
        self.buy_rate
    }

    /// Returns the sell-side rate.
    #[must_use]
    pub const fn sell_rate(&self) -> Rate {
        self.sell_rate
    }

    /// Returns true if this rate is currently published.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.is_active
    }

    /// Returns true if this rate is for the given pair, in order.
    #[must_use]
    pub fn matches_pair(&self, base: &CurrencyId, target: &CurrencyId) -> bool {
        self.base_currency_id == *base && self.target_currency_id == *target
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn rate(value: i64, scale: u32) -> Rate {
        Rate::new(Decimal::new(value, scale)).unwrap()
    }

    #[test]
    fn new_rate_is_active() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office_rate = OfficeRate::new(base, target, rate(1015, 2), rate(1025, 2));
        assert!(office_rate.is_active());
    }

    #[test]
    fn with_active_toggles_flag() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office_rate =
            OfficeRate::new(base, target, rate(1015, 2), rate(1025, 2)).with_active(false);
        assert!(!office_rate.is_active());
    }

    #[test]
    fn matches_pair_is_order_sensitive() {
        let base = CurrencyId::new_v4();
        let target = CurrencyId::new_v4();
        let office_rate = OfficeRate::new(base, target, rate(1015, 2), rate(1025, 2));

        assert!(office_rate.matches_pair(&base, &target));
        assert!(!office_rate.matches_pair(&target, &base));
    }
}
