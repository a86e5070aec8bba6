//! Utilities Module
//!
//! Logging, network configuration and clock helpers used across the crate.

pub mod clock;
pub mod logging;
pub mod network_config;

pub use network_config::NetworkConfig;
