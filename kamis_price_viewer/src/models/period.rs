//! The fixed observation horizons KAMIS reports for every commodity.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One of the four price horizons in a daily sales record.
///
/// The variants are declared in the order KAMIS returns them (`dpr1` .. `dpr4`),
/// which is also the order they appear in the report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PricePeriod {
    CurrentDay,
    OneDayPrior,
    OneMonthPrior,
    OneYearPrior,
}

impl PricePeriod {
    /// All horizons in report order.
    pub const ALL: [PricePeriod; 4] = [
        PricePeriod::CurrentDay,
        PricePeriod::OneDayPrior,
        PricePeriod::OneMonthPrior,
        PricePeriod::OneYearPrior,
    ];

    /// The Korean label used by KAMIS and by the report header.
    pub const fn label(self) -> &'static str {
        match self {
            PricePeriod::CurrentDay => "당일",
            PricePeriod::OneDayPrior => "1일전",
            PricePeriod::OneMonthPrior => "1개월전",
            PricePeriod::OneYearPrior => "1년전",
        }
    }
}

impl fmt::Display for PricePeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Direction of the day-over-day price change, as coded by KAMIS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PriceDirection {
    Down,
    Up,
    Flat,
    #[default]
    Unknown,
}

impl PriceDirection {
    /// Maps the KAMIS `direction` code (`"0"` down, `"1"` up, `"2"` flat).
    pub fn from_code(code: &str) -> Self {
        match code.trim() {
            "0" => PriceDirection::Down,
            "1" => PriceDirection::Up,
            "2" => PriceDirection::Flat,
            _ => PriceDirection::Unknown,
        }
    }

    /// Applies this direction to an unsigned change magnitude.
    ///
    /// `Unknown` leaves the value as reported.
    pub fn signed(self, value: f64) -> f64 {
        match self {
            PriceDirection::Down => -value.abs(),
            PriceDirection::Up => value.abs(),
            PriceDirection::Flat => 0.0,
            PriceDirection::Unknown => value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_follow_report_order() {
        let labels: Vec<_> = PricePeriod::ALL.iter().map(|p| p.label()).collect();
        assert_eq!(labels, ["당일", "1일전", "1개월전", "1년전"]);
        assert_eq!(PricePeriod::OneMonthPrior.to_string(), "1개월전");
    }

    #[test]
    fn test_direction_codes() {
        assert_eq!(PriceDirection::from_code("0"), PriceDirection::Down);
        assert_eq!(PriceDirection::from_code(" 1 "), PriceDirection::Up);
        assert_eq!(PriceDirection::from_code("2"), PriceDirection::Flat);
        assert_eq!(PriceDirection::from_code("x"), PriceDirection::Unknown);
    }

    #[test]
    fn test_signed_change() {
        assert_eq!(PriceDirection::Down.signed(2.5), -2.5);
        assert_eq!(PriceDirection::Up.signed(2.5), 2.5);
        assert_eq!(PriceDirection::Flat.signed(2.5), 0.0);
        assert_eq!(PriceDirection::Unknown.signed(-1.0), -1.0);
    }
}
