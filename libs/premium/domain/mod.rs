//! Domain types and pure computations

pub mod history;
pub mod models;
pub mod premium;

pub use history::HistoryBuffer;
pub use models::{Sample, TradeDirection};
pub use premium::{compute, PremiumResult};
