use chrono::{DateTime, Local};

/// Which side of the P2P advertisement book to quote
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl TradeDirection {
    /// Wire value expected by the advertisement-search endpoint
    pub fn as_trade_type(&self) -> &'static str {
        match self {
            TradeDirection::Buy => "BUY",
            TradeDirection::Sell => "SELL",
        }
    }
}

/// One premium observation
///
/// Constructed only from a fully successful tick, so both prices are
/// guaranteed positive. Immutable once created.
#[derive(Debug, Clone)]
pub struct Sample {
    /// Wall-clock time of the tick, local timezone
    pub timestamp: DateTime<Local>,
    /// Signed percentage: (usdt_mid - usd_cny) / usd_cny * 100
    pub premium_rate: f64,
    /// Average of buy-side and sell-side trimmed-mean P2P prices
    pub usdt_mid: f64,
    /// Official USD/CNY rate at sampling time
    pub usd_cny: f64,
}

impl Sample {
    pub fn new(timestamp: DateTime<Local>, premium_rate: f64, usdt_mid: f64, usd_cny: f64) -> Self {
        debug_assert!(usdt_mid > 0.0, "usdt_mid must be positive");
        debug_assert!(usd_cny > 0.0, "usd_cny must be positive");

        Self {
            timestamp,
            premium_rate,
            usdt_mid,
            usd_cny,
        }
    }

    /// Second-precision label shown on the chart axis
    pub fn time_label(&self) -> String {
        self.timestamp.format("%H:%M:%S").to_string()
    }
}
