//! Errors raised while loading vocabulary sources.

use std::path::PathBuf;

/// Failure to load or import a vocabulary source.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A file could not be read.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The document is not valid JSON.
    #[cfg(feature = "jsonld")]
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    /// The document is JSON but not a JSON-LD vocabulary document.
    #[error("not a vocabulary document: {0}")]
    InvalidDocument(String),
}
