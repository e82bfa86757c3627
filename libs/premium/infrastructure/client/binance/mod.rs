//! Binance P2P marketplace client

pub mod client;
pub mod types;

pub use client::{trimmed_mean, BinanceP2pClient};
pub use types::{AdvSearchRequest, AdvSearchResponse};
