//! USDT/CNY premium monitor core library
//!
//! Polls the Binance P2P marketplace and the Yahoo Finance FX feed, computes
//! the premium of the USDT market price over the official USD/CNY rate, and
//! keeps a bounded in-memory history of observations for the dashboard.
//!
//! ## Layers
//!
//! - **domain**: samples, premium arithmetic, bounded history
//! - **infrastructure**: HTTP clients for the two price sources, logging
//! - **application**: the poll loop and the terminal dashboard
//! - **config**: YAML configuration with built-in defaults

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod utils;
