//! Configuration structures and loading logic.

use crate::collection::{Collection, CollectionIndex};
use crate::error::{Error, Result};
use crate::fs::lister;
use crate::naming::ContentNamer;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Directories to collect filenames from.
    #[serde(default)]
    pub sources: Vec<SourceConfig>,

    #[serde(default)]
    pub naming: NamingConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// One directory to collect a collection from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Collection name, usually the shared extension.
    pub name: String,

    /// Directory to list.
    pub dir: PathBuf,

    /// Substrings a filename must contain (any of them) to be collected.
    #[serde(default)]
    pub sub_strings: Vec<String>,
}

/// Content-addressed output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NamingConfig {
    /// Directory derived paths point into.
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,

    /// Extension appended to every digest.
    #[serde(default = "default_extension")]
    pub extension: String,
}

impl Default for NamingConfig {
    fn default() -> Self {
        Self {
            output_dir: default_output_dir(),
            extension: default_extension(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default log level, overridden by `RUST_LOG`.
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("artifacts")
}

fn default_extension() -> String {
    "bin".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        tracing::debug!(
            "Loaded {} sources from {}",
            config.sources.len(),
            path.display()
        );
        Ok(config)
    }

    /// Save configuration to a TOML file.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Collect every configured source.
    pub fn collect(&self) -> Result<Vec<Collection>> {
        self.sources.iter().map(SourceConfig::collect).collect()
    }

    /// Collect every configured source into an index.
    pub fn build_index(&self) -> Result<CollectionIndex> {
        CollectionIndex::new(self.collect()?)
    }
}

impl SourceConfig {
    /// List this source's directory and build its collection.
    pub fn collect(&self) -> Result<Collection> {
        lister::collect(&self.name, &self.dir, &self.sub_strings)
    }
}

impl NamingConfig {
    /// Build an MD5 namer for the configured directory and extension.
    ///
    /// Derived names are strings, so `output_dir` must be valid UTF-8.
    pub fn namer(&self) -> Result<ContentNamer> {
        let dir = self
            .output_dir
            .to_str()
            .ok_or_else(|| Error::NonUtf8Path(self.output_dir.clone()))?;
        Ok(ContentNamer::md5(dir, self.extension.clone()))
    }
}
