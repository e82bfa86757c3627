//! HTTP clients for the two external price sources

pub mod binance;
pub mod yahoo;

use async_trait::async_trait;
use thiserror::Error;

use crate::config::MonitorConfig;
use crate::domain::TradeDirection;

pub use binance::BinanceP2pClient;
pub use yahoo::YahooFxClient;

/// Why a fetch produced no usable price
///
/// The poll loop collapses every variant into a single "data pending" state
/// for the user; the split exists so failure causes stay distinguishable in
/// logs and tests.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    #[error("API error: {0}")]
    Api(String),

    #[error("Deserialization failed: {0}")]
    DeserializeFailed(String),

    #[error("no usable data points in response")]
    EmptySeries,

    #[error("non-positive price in response: {0}")]
    InvalidPrice(f64),
}

pub type Result<T> = std::result::Result<T, SourceError>;

/// Seam between the poll loop and the network
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// Trimmed-mean P2P price for one trade direction
    async fn p2p_price(&self, direction: TradeDirection) -> Result<f64>;

    /// Official USD/CNY reference rate
    async fn reference_rate(&self) -> Result<f64>;
}

/// Production source backed by the two HTTP clients
pub struct LiveSource {
    binance: BinanceP2pClient,
    yahoo: YahooFxClient,
}

impl LiveSource {
    pub fn new(config: &MonitorConfig) -> Result<Self> {
        let timeout = config.poll.request_timeout();

        Ok(Self {
            binance: BinanceP2pClient::new(&config.binance, timeout)?,
            yahoo: YahooFxClient::new(&config.yahoo, timeout)?,
        })
    }
}

#[async_trait]
impl PriceSource for LiveSource {
    async fn p2p_price(&self, direction: TradeDirection) -> Result<f64> {
        self.binance.p2p_price(direction).await
    }

    async fn reference_rate(&self) -> Result<f64> {
        self.yahoo.reference_rate().await
    }
}
