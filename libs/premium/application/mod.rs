//! Application layer: the poll loop and the terminal dashboard

pub mod poller;
pub mod visualizer;

pub use poller::{Poller, TickOutcome};
