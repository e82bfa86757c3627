use std::time::Duration;

use reqwest::Client;
use tracing::debug;

use super::types::ChartResponse;
use crate::config::YahooConfig;
use crate::infrastructure::client::{Result, SourceError};

/// Client for the Yahoo Finance chart endpoint
pub struct YahooFxClient {
    base_url: String,
    symbol: String,
    client: Client,
}

impl YahooFxClient {
    /// Create a new FX client with a per-request timeout
    pub fn new(config: &YahooConfig, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("Mozilla/5.0")
            .build()?;

        Ok(Self {
            base_url: config.base_url.clone(),
            symbol: config.symbol.clone(),
            client,
        })
    }

    /// Most recent USD/CNY close
    ///
    /// Tries the one-minute intraday series for the day first and falls back
    /// to the daily close when the intraday series has no usable points.
    pub async fn reference_rate(&self) -> Result<f64> {
        match self.fetch_close("1m").await {
            Err(SourceError::EmptySeries) => {
                debug!("intraday series empty for {}, falling back to daily", self.symbol);
                self.fetch_close("1d").await
            }
            other => other,
        }
    }

    async fn fetch_close(&self, interval: &str) -> Result<f64> {
        let url = format!("{}/v8/finance/chart/{}", self.base_url, self.symbol);

        debug!("GET {} range=1d interval={}", url, interval);

        let response = self
            .client
            .get(&url)
            .query(&[("range", "1d"), ("interval", interval)])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Api(format!("chart request returned {}", status)));
        }

        let parsed: ChartResponse = response
            .json()
            .await
            .map_err(|e| SourceError::DeserializeFailed(e.to_string()))?;

        let rate = parsed.last_close().ok_or(SourceError::EmptySeries)?;

        if rate <= 0.0 {
            return Err(SourceError::InvalidPrice(rate));
        }

        Ok(rate)
    }
}
