use serde::Serialize;

use crate::credentials::CertificationPair;

/// KAMIS action listing the latest daily retail and wholesale prices per product.
pub const DAILY_SALES_LIST_ACTION: &str = "dailySalesList";

/// Response format requested from KAMIS.
#[derive(Clone, Copy, Debug, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ReturnType {
    #[default]
    Json,
    Xml,
}

/// Query string for a `dailySalesList` request.
///
/// Holds the exposed certification key, so it intentionally has no `Debug` impl.
#[derive(Serialize)]
pub struct DailySalesQuery<'a> {
    action: &'static str,
    p_cert_key: &'a str,
    p_cert_id: &'a str,
    p_returntype: ReturnType,
}

impl<'a> DailySalesQuery<'a> {
    pub fn new(certification: &'a CertificationPair) -> Self {
        Self {
            action: DAILY_SALES_LIST_ACTION,
            p_cert_key: certification.cert_key(),
            p_cert_id: certification.cert_id(),
            p_returntype: ReturnType::Json,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_query_fields() {
        let pair = CertificationPair::new("me@example.com", "k3y");
        let query = DailySalesQuery::new(&pair);

        let encoded = serde_json::to_value(&query).unwrap();
        assert_eq!(
            encoded,
            serde_json::json!({
                "action": "dailySalesList",
                "p_cert_key": "k3y",
                "p_cert_id": "me@example.com",
                "p_returntype": "json",
            })
        );
    }

    #[test]
    fn test_empty_credentials_are_still_sent() {
        let pair = CertificationPair::new("", "");
        let encoded = serde_json::to_value(DailySalesQuery::new(&pair)).unwrap();
        assert_eq!(encoded["p_cert_id"], "");
        assert_eq!(encoded["p_cert_key"], "");
    }
}
