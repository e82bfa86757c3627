//! Shared utilities

pub mod shutdown;

pub use shutdown::ShutdownManager;
