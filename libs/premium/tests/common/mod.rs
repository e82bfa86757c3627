//! Shared test helpers

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;

use premium::domain::TradeDirection;
use premium::infrastructure::client::{PriceSource, Result, SourceError};

/// Scripted price source: pops one pre-loaded reply per call, per channel
///
/// Replies are queued before the source is handed to the poller; a drained
/// queue answers `EmptySeries`, which degrades the tick like a real outage.
#[derive(Default)]
pub struct ScriptedSource {
    buy: Mutex<VecDeque<Result<f64>>>,
    sell: Mutex<VecDeque<Result<f64>>>,
    rate: Mutex<VecDeque<Result<f64>>>,
}

impl ScriptedSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue replies for one full tick
    pub fn push_tick(&self, buy: Result<f64>, sell: Result<f64>, rate: Result<f64>) {
        self.buy.lock().unwrap().push_back(buy);
        self.sell.lock().unwrap().push_back(sell);
        self.rate.lock().unwrap().push_back(rate);
    }

    /// Queue one fully successful tick where buy == sell == mid
    pub fn push_ok_tick(&self, mid: f64, rate: f64) {
        self.push_tick(Ok(mid), Ok(mid), Ok(rate));
    }
}

#[async_trait]
impl PriceSource for ScriptedSource {
    async fn p2p_price(&self, direction: TradeDirection) -> Result<f64> {
        let queue = match direction {
            TradeDirection::Buy => &self.buy,
            TradeDirection::Sell => &self.sell,
        };

        queue
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SourceError::EmptySeries))
    }

    async fn reference_rate(&self) -> Result<f64> {
        self.rate
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or(Err(SourceError::EmptySeries))
    }
}

/// Mid price that produces the given percentage premium over `rate`
pub fn mid_for_premium(premium: f64, rate: f64) -> f64 {
    rate * (1.0 + premium / 100.0)
}
