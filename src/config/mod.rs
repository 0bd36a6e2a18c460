//! Configuration module.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - Configuration validation
//! - Building collections and namers from configured sources

pub mod loader;
pub mod validation;

pub use loader::{Config, LoggingConfig, NamingConfig, SourceConfig};
pub use validation::validate_config;
