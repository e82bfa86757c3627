//! Wire types for the Yahoo Finance chart endpoint

use serde::Deserialize;

/// Top-level response from `GET /v8/finance/chart/{symbol}`
#[derive(Debug, Deserialize)]
pub struct ChartResponse {
    pub chart: Chart,
}

#[derive(Debug, Deserialize)]
pub struct Chart {
    #[serde(default)]
    pub result: Option<Vec<ChartResult>>,
    #[serde(default)]
    pub error: Option<serde_json::Value>,
}

#[derive(Debug, Deserialize)]
pub struct ChartResult {
    pub indicators: Indicators,
}

#[derive(Debug, Deserialize)]
pub struct Indicators {
    #[serde(default)]
    pub quote: Vec<Quote>,
}

/// Intraday closes are null-padded for minutes with no trade
#[derive(Debug, Deserialize, Default)]
pub struct Quote {
    #[serde(default)]
    pub close: Vec<Option<f64>>,
}

impl ChartResponse {
    /// Most recent non-null close in the first result series
    pub fn last_close(&self) -> Option<f64> {
        self.chart
            .result
            .as_deref()?
            .first()?
            .indicators
            .quote
            .first()?
            .close
            .iter()
            .rev()
            .find_map(|close| *close)
    }
}
