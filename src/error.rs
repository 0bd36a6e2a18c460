//! Error types for filename collections and content-addressed naming.

use thiserror::Error;

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // Collection construction errors
    #[error("Cannot build collection '{name}' from an empty file list")]
    EmptyInput { name: String },

    #[error("Blank source directory for collection '{name}'")]
    EmptyDir { name: String },

    #[error("Filename '{filename}' has no '.' to take an extension from")]
    MalformedFilename { filename: String },

    #[error("Collection must share extension '{expected}', but '{filename}' does not (files: {files:?})")]
    InconsistentExtension {
        expected: String,
        filename: String,
        files: Vec<String>,
    },

    #[error("Filename '{filename}' must contain a file extension (files: {files:?})")]
    MissingExtension { filename: String, files: Vec<String> },

    #[error("Unable to change collection extension to '{extension}': {source}")]
    ChangeExtension {
        extension: String,
        #[source]
        source: Box<Error>,
    },

    // Index errors
    #[error("Cannot index empty collection '{name}'")]
    EmptyCollection { name: String },

    // Naming errors
    #[error("Hashing failed: {0}")]
    Hash(String),

    #[error("Invalid extension: {0}")]
    InvalidExtension(String),

    // Filesystem errors
    #[error("Path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(std::path::PathBuf),

    #[error("Cannot store content at {}: not a regular file", .0.display())]
    NotAFile(std::path::PathBuf),

    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Missing required configuration: {0}")]
    MissingConfig(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error is an input-validation failure raised while
    /// building a collection or an index.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::EmptyInput { .. }
                | Error::EmptyDir { .. }
                | Error::MalformedFilename { .. }
                | Error::InconsistentExtension { .. }
                | Error::MissingExtension { .. }
                | Error::ChangeExtension { .. }
                | Error::EmptyCollection { .. }
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_extension_keeps_source() {
        let err = Error::ChangeExtension {
            extension: "txt".to_string(),
            source: Box::new(Error::EmptyInput {
                name: "txt".to_string(),
            }),
        };
        let source = std::error::Error::source(&err).map(|s| s.to_string());
        assert_eq!(
            source.as_deref(),
            Some("Cannot build collection 'txt' from an empty file list")
        );
        assert!(err.to_string().contains("'txt'"));
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::EmptyInput {
            name: "pdf".to_string()
        }
        .is_validation());
        assert!(Error::EmptyCollection {
            name: "pdf".to_string()
        }
        .is_validation());
        assert!(!Error::Hash("boom".to_string()).is_validation());
        assert!(!Error::Config("bad".to_string()).is_validation());
    }
}
