//! Configuration validation logic.

use std::collections::HashSet;
use std::sync::LazyLock;

use crate::config::loader::{Config, LoggingConfig, NamingConfig, SourceConfig};
use crate::error::{Error, Result};
use crate::fs::sanitize_extension;
use regex::Regex;

/// Maximum collection name length.
const MAX_NAME_LENGTH: usize = 64;

/// Log levels accepted as a default filter.
static LOG_LEVEL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?i)(trace|debug|info|warn|error|off)$").expect("valid log level pattern")
});

/// Collection names: alphanumerics plus `_`, `-` and `.`.
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_.-]+$").expect("valid name pattern"));

/// Validate the entire configuration.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_sources(&config.sources)?;
    validate_naming(&config.naming)?;
    validate_logging(&config.logging)?;

    Ok(())
}

/// Validate the configured sources.
///
/// Duplicate names are allowed since the index keeps the last one, but they
/// are reported.
pub fn validate_sources(sources: &[SourceConfig]) -> Result<()> {
    let mut seen = HashSet::new();

    for source in sources {
        if source.name.is_empty() {
            return Err(Error::MissingConfig("sources.name".to_string()));
        }

        if source.name.len() > MAX_NAME_LENGTH {
            return Err(Error::ConfigValidation {
                field: "sources.name".to_string(),
                message: format!(
                    "Name '{}' is too long (maximum {} characters)",
                    source.name, MAX_NAME_LENGTH
                ),
            });
        }

        if !NAME_PATTERN.is_match(&source.name) {
            return Err(Error::ConfigValidation {
                field: "sources.name".to_string(),
                message: format!(
                    "Name '{}' contains invalid characters. Only alphanumeric, '.', '-' and '_' allowed.",
                    source.name
                ),
            });
        }

        if source.dir.as_os_str().is_empty() {
            return Err(Error::ConfigValidation {
                field: "sources.dir".to_string(),
                message: format!("Source '{}' has a blank directory", source.name),
            });
        }

        if source.sub_strings.iter().any(|s| s.is_empty()) {
            return Err(Error::ConfigValidation {
                field: "sources.sub_strings".to_string(),
                message: format!(
                    "Source '{}' has an empty substring, which would match every file",
                    source.name
                ),
            });
        }

        if !seen.insert(source.name.as_str()) {
            tracing::warn!(
                "Source '{}' is configured more than once, the last one wins",
                source.name
            );
        }
    }

    Ok(())
}

/// Validate the naming options.
pub fn validate_naming(naming: &NamingConfig) -> Result<()> {
    if naming.output_dir.as_os_str().is_empty() {
        return Err(Error::MissingConfig("naming.output_dir".to_string()));
    }

    sanitize_extension(&naming.extension).map_err(|e| Error::ConfigValidation {
        field: "naming.extension".to_string(),
        message: e.to_string(),
    })?;

    Ok(())
}

/// Validate the logging options.
pub fn validate_logging(logging: &LoggingConfig) -> Result<()> {
    if !LOG_LEVEL_PATTERN.is_match(&logging.level) {
        return Err(Error::ConfigValidation {
            field: "logging.level".to_string(),
            message: format!(
                "Unknown log level '{}'. Use trace, debug, info, warn, error or off.",
                logging.level
            ),
        });
    }

    Ok(())
}
