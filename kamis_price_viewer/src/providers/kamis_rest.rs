//! KAMIS Open API (`www.kamis.or.kr`) implementation of
//! [`PriceProvider`](crate::providers::PriceProvider).

pub mod params;
pub mod provider;
pub mod response;

/// Default endpoint for every KAMIS price action.
pub const DEFAULT_BASE_URL: &str = "http://www.kamis.or.kr/service/price/xml.do";
