//! Terminal dashboard for the premium monitor

pub mod app;
pub mod ui;

pub use app::{Dashboard, TickStatus};
