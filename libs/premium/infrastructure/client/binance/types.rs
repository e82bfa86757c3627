//! Wire types for the advertisement-search endpoint

use serde::{Deserialize, Serialize};

/// Request body for `POST /bapi/c2c/v2/friendly/c2c/adv/search`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvSearchRequest {
    pub asset: String,
    pub fiat: String,
    pub merchant_check: bool,
    pub page: u32,
    pub pay_types: Vec<String>,
    pub publisher_type: Option<String>,
    pub rows: u32,
    pub trade_type: String,
}

/// Top-level search response; `code` is `"000000"` on success
#[derive(Debug, Deserialize)]
pub struct AdvSearchResponse {
    pub code: String,
    #[serde(default)]
    pub data: Option<Vec<Advertisement>>,
}

#[derive(Debug, Deserialize)]
pub struct Advertisement {
    pub adv: AdvDetail,
}

#[derive(Debug, Deserialize)]
pub struct AdvDetail {
    /// Listed price, a decimal string on the wire
    pub price: String,
}

impl AdvSearchResponse {
    /// Listed prices in response order; `None` entries in `data` never occur,
    /// an absent list parses as an empty one
    pub fn listed_prices(&self) -> Vec<&str> {
        self.data
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|ad| ad.adv.price.as_str())
            .collect()
    }
}
