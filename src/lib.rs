//! USDT Premium Monitor - Main Library
//!
//! Thin presentation layer over the `premium` workspace library.
//!
//! - **bin_common**: shared utilities for the binaries (config path lookup)
//! - **premium**: the monitor core (re-exported from the workspace)

// Re-export workspace library for convenience
pub use premium;

// Binary common utilities
pub mod bin_common {
    //! Common utilities for binary executables

    pub mod cli;

    pub use cli::{load_config_from_env, ConfigType};
}
