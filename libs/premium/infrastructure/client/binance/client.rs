use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::types::{AdvSearchRequest, AdvSearchResponse};
use crate::config::BinanceConfig;
use crate::domain::TradeDirection;
use crate::infrastructure::client::{Result, SourceError};

/// Response code the marketplace uses for success
const SUCCESS_CODE: &str = "000000";

const ADV_SEARCH_PATH: &str = "/bapi/c2c/v2/friendly/c2c/adv/search";

/// Client for the Binance P2P advertisement-search endpoint
pub struct BinanceP2pClient {
    base_url: String,
    rows: u32,
    client: Client,
}

impl BinanceP2pClient {
    /// Create a new P2P client with a per-request timeout
    pub fn new(config: &BinanceConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0")
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            rows: config.rows,
            client,
        })
    }

    /// Trimmed-mean USDT/CNY price of the best advertisements for one direction
    pub async fn p2p_price(&self, direction: TradeDirection) -> Result<f64> {
        let url = format!("{}{}", self.base_url, ADV_SEARCH_PATH);

        let body = AdvSearchRequest {
            asset: "USDT".to_string(),
            fiat: "CNY".to_string(),
            merchant_check: false,
            page: 1,
            pay_types: Vec::new(),
            publisher_type: None,
            rows: self.rows,
            trade_type: direction.as_trade_type().to_string(),
        };

        debug!("POST {} tradeType={}", url, body.trade_type);

        let response = self.client.post(&url).json(&body).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api(format!(
                "advertisement search returned {}",
                status
            )));
        }

        let parsed: AdvSearchResponse = response
            .json()
            .await
            .map_err(|e| SourceError::DeserializeFailed(e.to_string()))?;

        if parsed.code != SUCCESS_CODE {
            return Err(SourceError::Api(format!(
                "advertisement search code {}",
                parsed.code
            )));
        }

        let mut prices = Vec::new();
        for raw in parsed.listed_prices() {
            let price: f64 = raw
                .parse()
                .map_err(|_| SourceError::DeserializeFailed(format!("bad price string: {raw}")))?;

            if price <= 0.0 {
                return Err(SourceError::InvalidPrice(price));
            }
            prices.push(price);
        }

        let mean = trimmed_mean(&prices).ok_or(SourceError::EmptySeries)?;

        debug!(
            "{} advertisements -> trimmed mean {:.3} ({:?})",
            prices.len(),
            mean,
            direction
        );

        Ok(mean)
    }
}

/// Arithmetic mean after dropping the single maximum and single minimum
///
/// The trim only applies when more than two prices are present, and it is a
/// single pass, not iterative. Returns `None` for an empty slice.
pub fn trimmed_mean(prices: &[f64]) -> Option<f64> {
    if prices.is_empty() {
        return None;
    }

    if prices.len() <= 2 {
        return Some(prices.iter().sum::<f64>() / prices.len() as f64);
    }

    // Index-based so a duplicated extreme only drops one entry
    let mut min_idx = 0;
    let mut max_idx = 0;
    for (i, price) in prices.iter().enumerate() {
        if *price < prices[min_idx] {
            min_idx = i;
        }
        if *price > prices[max_idx] {
            max_idx = i;
        }
    }

    let mut sum = 0.0;
    let mut count = 0;
    for (i, price) in prices.iter().enumerate() {
        if i == min_idx || i == max_idx {
            continue;
        }
        sum += price;
        count += 1;
    }

    Some(sum / count as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_trim_drops_single_max_and_min() {
        // 100 and 1 go, leaving [2, 3, 4]
        let mean = trimmed_mean(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert!((mean - 3.0).abs() < EPSILON);
    }

    #[test]
    fn test_no_trim_with_two_prices() {
        let mean = trimmed_mean(&[5.0, 7.0]).unwrap();
        assert!((mean - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_single_price_passthrough() {
        let mean = trimmed_mean(&[7.25]).unwrap();
        assert!((mean - 7.25).abs() < EPSILON);
    }

    #[test]
    fn test_empty_slice() {
        assert!(trimmed_mean(&[]).is_none());
    }

    #[test]
    fn test_duplicated_extremes_drop_one_each() {
        // Only one 1.0 and one 9.0 are removed
        let mean = trimmed_mean(&[1.0, 1.0, 5.0, 9.0, 9.0]).unwrap();
        assert!((mean - 5.0).abs() < EPSILON);
    }

    #[test]
    fn test_all_equal_prices() {
        let mean = trimmed_mean(&[7.2, 7.2, 7.2, 7.2]).unwrap();
        assert!((mean - 7.2).abs() < EPSILON);
    }
}
