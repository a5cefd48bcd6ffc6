use crate::models::price_record::PriceRecord;

/// Result of one "latest daily prices" listing.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailySalesList {
    /// Records in the order the provider returned them.
    pub prices: Vec<PriceRecord>,
}

impl DailySalesList {
    pub fn new(prices: Vec<PriceRecord>) -> Self {
        Self { prices }
    }

    pub fn len(&self) -> usize {
        self.prices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.prices.is_empty()
    }
}
