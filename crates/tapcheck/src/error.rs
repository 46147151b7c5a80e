//! Error types for touch-target analysis.

use std::path::PathBuf;

/// Result type alias for analysis operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can abort an analysis run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source document could not be loaded.
    #[error(transparent)]
    Style(#[from] tapcheck_style::Error),

    /// File I/O error outside document loading.
    #[error("I/O error on '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Configuration file could not be parsed.
    #[error("Invalid configuration '{path}': {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Results could not be serialized.
    #[error("Failed to serialize results: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a configuration error.
    pub fn config(path: impl Into<PathBuf>, source: toml::de::Error) -> Self {
        Self::Config {
            path: path.into(),
            source,
        }
    }
}
