//! Console rendering of daily price records.

pub mod cells;
pub mod table;

use thiserror::Error;

use crate::models::period::PricePeriod;

/// Records that break the formatter's input contract.
#[derive(Debug, Error, PartialEq)]
pub enum ReportError {
    /// The record's price map has no entry at all for a horizon.
    #[error("record {product:?} has no {period} entry")]
    MissingPeriod { product: String, period: PricePeriod },

    /// A horizon that must always be observed has no price.
    #[error("record {product:?} has no {period} price")]
    MissingPrice { product: String, period: PricePeriod },
}
