//! Errors that stop a generation run before any descriptor is built.

use std::path::PathBuf;

/// Configuration and startup failures.
///
/// Everything that can go wrong while resolving descriptors is reported as a
/// non-fatal [`Diagnostic`](crate::diagnostics::Diagnostic) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `annotationGenerators` names an extension that is not registered.
    #[error("unknown annotation generator `{name}` (registered: {})", .known.join(", "))]
    UnknownGenerator {
        /// The requested identifier.
        name: String,
        /// Every registered identifier.
        known: Vec<String>,
    },
    /// A configuration file could not be read.
    #[error("failed to read configuration {}: {source}", .path.display())]
    ConfigIo {
        /// The file being read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },
    /// The configuration file extension is neither `.toml` nor `.json`.
    #[error("unsupported configuration format: {}", .0.display())]
    UnsupportedConfigFormat(PathBuf),
    /// The TOML configuration is malformed.
    #[error("invalid TOML configuration: {0}")]
    Toml(#[from] toml::de::Error),
    /// The JSON configuration is malformed.
    #[error("invalid JSON configuration: {0}")]
    Json(#[from] serde_json::Error),
}
