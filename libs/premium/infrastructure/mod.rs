//! External collaborators: HTTP price sources and logging

pub mod client;
pub mod logging;

pub use client::{LiveSource, PriceSource, SourceError};
