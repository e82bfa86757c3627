//! Yahoo Finance FX feed client

pub mod client;
pub mod types;

pub use client::YahooFxClient;
pub use types::ChartResponse;
