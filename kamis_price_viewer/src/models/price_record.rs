//! Canonical in-memory representation of one commodity's daily price observation.

use chrono::NaiveDate;
use indexmap::IndexMap;

use crate::models::period::{PriceDirection, PricePeriod};

/// Prices for one commodity across the four [`PricePeriod`] horizons.
///
/// Records are built by a [`PriceProvider`](crate::providers::PriceProvider)
/// and only read afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceRecord {
    /// Display name of the commodity (e.g. "사과").
    pub product_name: String,

    /// Pricing unit label (e.g. "10kg", "1포기").
    pub unit: String,

    /// Price in won per horizon. `None` means no observation for that horizon.
    ///
    /// Records from KAMIS always carry all four keys.
    pub date_price_dict: IndexMap<PricePeriod, Option<i64>>,

    /// Signed day-over-day change, in percent.
    pub direction_value: f64,

    /// Raw direction code the sign of `direction_value` was derived from.
    pub direction: PriceDirection,

    /// Market class name, e.g. "소매" (retail) or "도매" (wholesale).
    pub product_class: String,

    /// Category name, e.g. "채소류".
    pub category_name: String,

    /// Item name including grade or variety, when KAMIS provides one.
    pub item_name: String,

    /// Date of the most recent survey. Not all responses carry it.
    pub latest_date: Option<NaiveDate>,
}

impl PriceRecord {
    /// Creates a record with the four horizons filled in `PricePeriod::ALL` order.
    pub fn new(
        product_name: impl Into<String>,
        unit: impl Into<String>,
        prices: [Option<i64>; 4],
        direction_value: f64,
    ) -> Self {
        let date_price_dict = PricePeriod::ALL.into_iter().zip(prices).collect();
        let direction = if direction_value > 0.0 {
            PriceDirection::Up
        } else if direction_value < 0.0 {
            PriceDirection::Down
        } else {
            PriceDirection::Flat
        };

        Self {
            product_name: product_name.into(),
            unit: unit.into(),
            date_price_dict,
            direction_value,
            direction,
            product_class: String::new(),
            category_name: String::new(),
            item_name: String::new(),
            latest_date: None,
        }
    }

    /// Looks up a horizon.
    ///
    /// The outer `Option` is `None` when the key itself is missing; the inner one
    /// when the key is present without an observation.
    pub fn price(&self, period: PricePeriod) -> Option<Option<i64>> {
        self.date_price_dict.get(&period).copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_fills_all_periods_in_order() {
        let record = PriceRecord::new("사과", "10개", [Some(3000), Some(2900), None, Some(2500)], 3.0);

        let keys: Vec<_> = record.date_price_dict.keys().copied().collect();
        assert_eq!(keys, PricePeriod::ALL);
        assert_eq!(record.price(PricePeriod::CurrentDay), Some(Some(3000)));
        assert_eq!(record.price(PricePeriod::OneMonthPrior), Some(None));
        assert_eq!(record.direction, PriceDirection::Up);
    }

    #[test]
    fn test_price_distinguishes_missing_key() {
        let mut record = PriceRecord::new("배추", "1포기", [Some(1), Some(1), None, None], 0.0);
        record.date_price_dict.shift_remove(&PricePeriod::OneYearPrior);

        assert_eq!(record.price(PricePeriod::OneYearPrior), None);
        assert_eq!(record.direction, PriceDirection::Flat);
    }
}
