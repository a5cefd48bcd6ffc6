use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use snafu::ResultExt;
use tracing::{debug, info};

use crate::{
    config::ApiSettings,
    credentials::CertificationPair,
    models::daily_sales::DailySalesList,
    providers::{
        ApiSnafu, ClientBuildSnafu, DecodeSnafu, PriceProvider, ProviderError, ProviderInitError,
        ReqwestSnafu,
        kamis_rest::{params::DailySalesQuery, response::KamisDailySalesResponse},
    },
};

pub struct KamisProvider {
    client: Client,
    base_url: String,
    certification: CertificationPair,
}

impl KamisProvider {
    /// Creates a provider against the public KAMIS endpoint with no request timeout.
    pub fn new(certification: CertificationPair) -> Result<Self, ProviderInitError> {
        Self::with_settings(certification, &ApiSettings::default())
    }

    /// Creates a provider using the endpoint and timeout from `settings`.
    pub fn with_settings(
        certification: CertificationPair,
        settings: &ApiSettings,
    ) -> Result<Self, ProviderInitError> {
        let mut builder = Client::builder();
        if let Some(secs) = settings.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        let client = builder.build().context(ClientBuildSnafu)?;

        Ok(Self {
            client,
            base_url: settings.base_url.clone(),
            certification,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl PriceProvider for KamisProvider {
    async fn daily_sales_list(&self) -> Result<DailySalesList, ProviderError> {
        let query = DailySalesQuery::new(&self.certification);
        debug!(url = %self.base_url, "requesting dailySalesList");

        let response = self
            .client
            .get(&self.base_url)
            .query(&query)
            .send()
            .await
            .map_err(reqwest::Error::without_url)
            .context(ReqwestSnafu)?;

        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown API error".to_string());
            return ApiSnafu {
                message: format!("HTTP {status}: {body}"),
            }
            .fail();
        }

        // KAMIS labels its JSON as text/html, so decode the body ourselves.
        let body = response
            .text()
            .await
            .map_err(reqwest::Error::without_url)
            .context(ReqwestSnafu)?;
        let parsed: KamisDailySalesResponse = serde_json::from_str(&body).context(DecodeSnafu)?;
        let list = parsed.into_daily_sales_list()?;

        info!(count = list.len(), "received daily prices");
        Ok(list)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_settings_uses_configured_endpoint() {
        let settings = ApiSettings {
            base_url: "http://127.0.0.1:9/xml.do".to_string(),
            timeout_secs: Some(1),
        };
        let provider =
            KamisProvider::with_settings(CertificationPair::new("id", "key"), &settings).unwrap();
        assert_eq!(provider.base_url(), "http://127.0.0.1:9/xml.do");
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_a_request_error() {
        let settings = ApiSettings {
            base_url: "http://127.0.0.1:9/xml.do".to_string(),
            timeout_secs: Some(2),
        };
        let provider =
            KamisProvider::with_settings(CertificationPair::new("id", "key"), &settings).unwrap();

        let err = provider.daily_sales_list().await.unwrap_err();
        assert!(matches!(err, ProviderError::Reqwest { .. }), "{err:?}");
    }

    #[tokio::test]
    async fn test_request_error_does_not_expose_cert_key() {
        let settings = ApiSettings {
            base_url: "http://127.0.0.1:9/xml.do".to_string(),
            timeout_secs: Some(2),
        };
        let provider = KamisProvider::with_settings(
            CertificationPair::new("me@example.com", "k3y-do-not-log"),
            &settings,
        )
        .unwrap();

        let err = provider.daily_sales_list().await.unwrap_err();
        let message = err.to_string();
        assert!(!message.contains("k3y-do-not-log"), "{message}");
        assert!(!message.contains("p_cert_key"), "{message}");
        assert!(!format!("{err:?}").contains("k3y-do-not-log"));
    }
}
