//! Provider abstraction for agricultural price sources.
//!
//! This module defines the [`PriceProvider`] trait, the interface the report
//! runs against. [`kamis_rest::provider::KamisProvider`] implements it over the
//! KAMIS Open API; tests substitute their own implementations.
//!
//! # Example
//!
//! ```rust
//! use async_trait::async_trait;
//! use kamis_price_viewer::models::daily_sales::DailySalesList;
//! use kamis_price_viewer::providers::{PriceProvider, ProviderError};
//!
//! struct EmptyProvider;
//!
//! #[async_trait]
//! impl PriceProvider for EmptyProvider {
//!     async fn daily_sales_list(&self) -> Result<DailySalesList, ProviderError> {
//!         Ok(DailySalesList::default())
//!     }
//! }
//! ```

pub mod kamis_rest;

use async_trait::async_trait;
use snafu::{Backtrace, Snafu};

use crate::models::daily_sales::DailySalesList;

/// Source of the latest daily commodity prices.
///
/// The trait supports dynamic dispatch (`dyn PriceProvider`) so the caller
/// does not need to know which backend it talks to.
#[async_trait]
pub trait PriceProvider: Send + Sync {
    /// Lists the most recent daily prices.
    ///
    /// # Returns
    ///
    /// * `Ok(DailySalesList)` - Records in provider order.
    /// * `Err(ProviderError)` - Network, API or decoding failure.
    async fn daily_sales_list(&self) -> Result<DailySalesList, ProviderError>;
}

/// Errors that can occur while creating a provider instance.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderInitError {
    /// failed to init reqwest client
    #[snafu(display("Failed to build HTTP client: {source}"))]
    ClientBuild {
        source: reqwest::Error,
        backtrace: Backtrace,
    },
}

/// Errors that can occur within a `PriceProvider` implementation.
#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum ProviderError {
    /// An error during an API request (e.g., network failure, timeout).
    #[snafu(display("API request failed: {source}"))]
    Reqwest {
        source: reqwest::Error,
        backtrace: Backtrace,
    },

    /// The provider's API reported an error (e.g., rejected credentials).
    #[snafu(display("API error: {message}"))]
    Api {
        message: String,
        backtrace: Backtrace,
    },

    /// The response body was not the JSON shape we expect.
    #[snafu(display("Failed to decode response: {source}"))]
    Decode {
        source: serde_json::Error,
        backtrace: Backtrace,
    },

    /// A field in an otherwise well-formed response could not be interpreted.
    #[snafu(display("Internal provider error: {message}"))]
    Internal {
        message: String,
        backtrace: Backtrace,
    },
}

#[cfg(test)]
mod tests {
    use async_trait::async_trait;

    use super::*;
    use crate::models::price_record::PriceRecord;

    struct FixedProvider;
    struct FailingProvider;

    #[async_trait]
    impl PriceProvider for FixedProvider {
        async fn daily_sales_list(&self) -> Result<DailySalesList, ProviderError> {
            Ok(DailySalesList::new(vec![PriceRecord::new(
                "쌀",
                "20kg",
                [Some(52000), Some(52000), None, None],
                0.0,
            )]))
        }
    }

    #[async_trait]
    impl PriceProvider for FailingProvider {
        async fn daily_sales_list(&self) -> Result<DailySalesList, ProviderError> {
            ApiSnafu {
                message: "unauthenticated",
            }
            .fail()
        }
    }

    fn get_provider(name: &str) -> Box<dyn PriceProvider> {
        if name == "fixed" {
            Box::new(FixedProvider)
        } else {
            Box::new(FailingProvider)
        }
    }

    #[tokio::test]
    async fn test_dynamic_provider() {
        let list = get_provider("fixed").daily_sales_list().await.unwrap();
        assert_eq!(list.len(), 1);
        assert_eq!(list.prices[0].product_name, "쌀");

        let err = get_provider("failing").daily_sales_list().await.unwrap_err();
        assert_eq!(err.to_string(), "API error: unauthenticated");
    }
}
