//! Poll loop: one tick fetches, computes, and appends
//!
//! The tick cycle is `Idle -> Fetching -> {Sampled, Pending} -> Idle`; the
//! cadence is owned by the hosting binary, which calls [`Poller::tick`] on a
//! fixed interval. There is no retry beyond the next scheduled tick.

use chrono::{DateTime, Local};
use tracing::{info, warn};

use crate::domain::{premium, HistoryBuffer, Sample, TradeDirection};
use crate::infrastructure::client::PriceSource;

/// Result of one poll tick, handed to the renderer
#[derive(Debug)]
pub enum TickOutcome {
    /// All three sources answered; the sample was appended to history
    Sampled {
        sample: Sample,
        /// Owned copy of the full series after the append
        snapshot: Vec<Sample>,
    },
    /// At least one source failed; history is untouched
    Pending { timestamp: DateTime<Local> },
}

/// Owns the history buffer and drives one fetch/compute/append cycle per tick
pub struct Poller<S: PriceSource> {
    source: S,
    history: HistoryBuffer,
}

impl<S: PriceSource> Poller<S> {
    pub fn new(source: S, history_capacity: usize) -> Self {
        Self {
            source,
            history: HistoryBuffer::new(history_capacity),
        }
    }

    /// Run one poll cycle
    ///
    /// Fetches the buy-side price, the sell-side price, and the reference
    /// rate sequentially. A failure of any source degrades the whole tick to
    /// [`TickOutcome::Pending`] without partial-data rendering.
    pub async fn tick(&mut self) -> TickOutcome {
        let buy = self.source.p2p_price(TradeDirection::Buy).await;
        let sell = self.source.p2p_price(TradeDirection::Sell).await;
        let rate = self.source.reference_rate().await;

        let now = Local::now();

        match (buy, sell, rate) {
            (Ok(buy), Ok(sell), Ok(rate)) => {
                let result = premium::compute(buy, sell, rate);
                let sample = Sample::new(now, result.premium, result.mid, rate);

                self.history.append(sample.clone());

                info!(
                    "premium {:+.2}% (mid {:.3}, rate {:.4}, {} samples)",
                    result.premium,
                    result.mid,
                    rate,
                    self.history.len()
                );

                TickOutcome::Sampled {
                    sample,
                    snapshot: self.history.snapshot(),
                }
            }
            (buy, sell, rate) => {
                for (name, result) in [
                    ("p2p buy price", &buy),
                    ("p2p sell price", &sell),
                    ("reference rate", &rate),
                ] {
                    if let Err(e) = result {
                        warn!("{} unavailable: {}", name, e);
                    }
                }

                TickOutcome::Pending { timestamp: now }
            }
        }
    }

    pub fn history(&self) -> &HistoryBuffer {
        &self.history
    }

    /// Owned copy of the current series for the renderer
    pub fn snapshot(&self) -> Vec<Sample> {
        self.history.snapshot()
    }
}
