//! Tracing subscriber setup.

use tracing_subscriber::{fmt, EnvFilter};

use crate::config::LoggingConfig;

/// Install a fmt subscriber filtered at `level`, unless `RUST_LOG` is set.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init(level: &str) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok()
}

/// Install a subscriber from the logging configuration.
pub fn init_from_config(config: &LoggingConfig) -> bool {
    init(&config.level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice() {
        init("debug");
        // A subscriber is already in place now
        assert!(!init_from_config(&LoggingConfig::default()));
    }
}
