//! Error types for toolbar configuration.
//!
//! Toolbar state operations never fail: references to items that are not in
//! the current groups are ignored. Only loading a configuration can fail.

use std::path::PathBuf;

/// Result type alias for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Errors that can occur while loading a toolbar configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read toolbar config '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or schema error.
    #[error("Failed to parse toolbar config: {0}")]
    Parse(#[from] toml::de::Error),

    /// A layout metric is negative or not finite.
    #[error("Invalid value for metric '{name}': {value}")]
    InvalidMetric { name: &'static str, value: f32 },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a metric error.
    pub fn invalid_metric(name: &'static str, value: f32) -> Self {
        Self::InvalidMetric { name, value }
    }
}
