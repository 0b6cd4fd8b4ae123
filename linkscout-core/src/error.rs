//! Errors from catalog export and loading

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by [`crate::ResultStore`]
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to write catalog to {path}: {source}")]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("Failed to read catalog from {path}: {source}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid catalog file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Run interrupted after {completed} categories")]
    Interrupted { completed: usize },
}
