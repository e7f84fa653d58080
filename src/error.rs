//! Error types for scw-cache
//!
//! All fallible operations return `CacheResult<T>`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for cache operations
pub type CacheResult<T> = Result<T, CacheError>;

/// All errors that can occur in scw-cache
#[derive(Error, Debug)]
pub enum CacheError {
    /// The cache file exists but is not valid JSON, or does not hold the
    /// expected document shape. A present-but-corrupt file is distinct from
    /// a missing one and must not silently degrade to an empty cache.
    #[error("Corrupt cache file {path}: {source}")]
    Corrupt {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("IO error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CacheError {
    /// Create an IO error with context
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get actionable hint for the error
    pub fn hint(&self) -> Option<String> {
        match self {
            Self::Corrupt { path, .. } => Some(format!(
                "Remove {} to start over with an empty cache",
                path.display()
            )),
            _ => None,
        }
    }
}
