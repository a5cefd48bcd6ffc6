use chrono::NaiveDate;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::debug;

use crate::{
    models::{
        daily_sales::DailySalesList,
        period::{PriceDirection, PricePeriod},
        price_record::PriceRecord,
    },
    providers::{ApiSnafu, InternalSnafu, ProviderError},
};

const SUCCESS: &str = "000";
const NO_DATA: &str = "001";

/// Raw `dailySalesList` item.
///
/// KAMIS converts its XML feed to JSON, so an empty field may show up as
/// `[]`, `null` or a number instead of a string. Every field goes through
/// [`lenient_text`] for that reason.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct KamisDailyPrice {
    #[serde(deserialize_with = "lenient_text")]
    pub product_cls_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub product_cls_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category_code: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub category_name: Option<String>,
    #[serde(rename = "productno", deserialize_with = "lenient_text")]
    pub product_no: Option<String>,
    #[serde(rename = "lastest_day", deserialize_with = "lenient_text")]
    pub latest_day: Option<String>,
    #[serde(rename = "productName", deserialize_with = "lenient_text")]
    pub product_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub item_name: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub unit: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dpr1: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dpr2: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dpr3: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub dpr4: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub direction: Option<String>,
    #[serde(deserialize_with = "lenient_text")]
    pub value: Option<String>,
}

/// Top-level `dailySalesList` body.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
pub struct KamisDailySalesResponse {
    #[serde(deserialize_with = "lenient_text")]
    pub error_code: Option<String>,
    pub price: Vec<KamisDailyPrice>,
    /// Some error replies carry the code as `{"data": ["900"]}` instead.
    pub data: Option<Value>,
}

impl KamisDailySalesResponse {
    /// The KAMIS result code, wherever the response put it.
    pub fn result_code(&self) -> Option<&str> {
        if let Some(code) = self.error_code.as_deref() {
            return Some(code);
        }
        match &self.data {
            Some(Value::Array(items)) => items.first().and_then(Value::as_str),
            Some(Value::String(code)) => Some(code.as_str()),
            _ => None,
        }
    }

    /// Checks the result code and converts every item into a [`PriceRecord`].
    pub fn into_daily_sales_list(self) -> Result<DailySalesList, ProviderError> {
        match self.result_code() {
            None | Some(SUCCESS) => {}
            Some(NO_DATA) => {
                debug!("KAMIS reported no data for dailySalesList");
                return Ok(DailySalesList::default());
            }
            Some(code) => {
                return ApiSnafu {
                    message: describe_error_code(code),
                }
                .fail();
            }
        }

        let prices = self
            .price
            .into_iter()
            .map(KamisDailyPrice::into_record)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(DailySalesList::new(prices))
    }
}

impl KamisDailyPrice {
    pub fn into_record(self) -> Result<PriceRecord, ProviderError> {
        let raw_prices = [self.dpr1, self.dpr2, self.dpr3, self.dpr4];
        let mut date_price_dict = indexmap::IndexMap::with_capacity(PricePeriod::ALL.len());
        for (period, raw) in PricePeriod::ALL.into_iter().zip(raw_prices) {
            date_price_dict.insert(period, parse_price(raw.as_deref())?);
        }

        let direction = self
            .direction
            .as_deref()
            .map(PriceDirection::from_code)
            .unwrap_or_default();
        let change = parse_change(self.value.as_deref())?;

        let latest_date = self.latest_day.as_deref().and_then(|day| {
            NaiveDate::parse_from_str(day.trim(), "%Y-%m-%d")
                .inspect_err(|e| debug!("ignoring unparseable lastest_day {day:?}: {e}"))
                .ok()
        });

        Ok(PriceRecord {
            product_name: self.product_name.unwrap_or_default(),
            unit: self.unit.unwrap_or_default(),
            date_price_dict,
            direction_value: direction.signed(change),
            direction,
            product_class: self.product_cls_name.unwrap_or_default(),
            category_name: self.category_name.unwrap_or_default(),
            item_name: self.item_name.unwrap_or_default(),
            latest_date,
        })
    }
}

fn describe_error_code(code: &str) -> String {
    match code {
        "200" => format!("wrong request parameters (code {code})"),
        "900" => format!(
            "unauthenticated request, check KAMIS_CERT_ID/KAMIS_CERT_KEY (code {code})"
        ),
        other => format!("unexpected result code {other}"),
    }
}

/// Parses a KAMIS price string such as `"52,400"`.
///
/// `"-"` and blank values mean "no observation". Decimal prices are rounded to the won.
pub fn parse_price(raw: Option<&str>) -> Result<Option<i64>, ProviderError> {
    let Some(raw) = raw.map(str::trim) else {
        return Ok(None);
    };
    if raw.is_empty() || raw == "-" {
        return Ok(None);
    }

    let digits: String = raw.chars().filter(|c| *c != ',').collect();
    if let Ok(whole) = digits.parse::<i64>() {
        return Ok(Some(whole));
    }
    match digits.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value.round() as i64)),
        _ => InternalSnafu {
            message: format!("invalid price {raw:?}"),
        }
        .fail(),
    }
}

fn parse_change(raw: Option<&str>) -> Result<f64, ProviderError> {
    let Some(raw) = raw.map(str::trim).filter(|v| !v.is_empty() && *v != "-") else {
        return Ok(0.0);
    };
    match raw.trim_end_matches('%').parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => InternalSnafu {
            message: format!("invalid change value {raw:?}"),
        }
        .fail(),
    }
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Array(items) => items.into_iter().find_map(|item| match item {
            Value::String(s) => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }),
        Value::Null | Value::Object(_) => None,
    })
}
