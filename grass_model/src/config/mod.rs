//! Graph and lookup configuration, loadable from TOML.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Number of adjacency entries visited per seed by default.
pub const DEFAULT_LOOKUP_DEPTH: usize = 100;

/// Maximum number of lookup results by default.
pub const DEFAULT_LOOKUP_LIMIT: usize = 10;

/// Decimal places lookup scores are rounded to by default.
pub const DEFAULT_SCORE_PRECISION: u32 = 3;

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Configuration for ranked lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LookupConfig {
    /// Adjacency entries visited per seed, highest weight first.
    pub depth: usize,

    /// Maximum number of results returned.
    pub limit: usize,

    /// Decimal places scores are rounded to.
    pub precision: u32,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_LOOKUP_DEPTH,
            limit: DEFAULT_LOOKUP_LIMIT,
            precision: DEFAULT_SCORE_PRECISION,
        }
    }
}

impl LookupConfig {
    /// Same configuration with a different traversal depth.
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    /// Same configuration with a different result limit.
    pub fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }
}

/// Top-level graph configuration.
///
/// ```toml
/// bidirectional = false
///
/// [lookup]
/// depth = 50
/// limit = 10
/// precision = 3
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Mirror every edge mutation onto the reversed pair.
    pub bidirectional: bool,

    pub lookup: LookupConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            bidirectional: true,
            lookup: LookupConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Parse configuration from a TOML string. Missing keys take defaults.
    pub fn from_toml_str(input: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(input)?)
    }

    /// Read and parse a TOML configuration file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_toml_str(&contents)
    }
}
