//! Namespace → output directory mapping.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Maps namespaces to directories below an output root.
#[derive(Debug, Clone)]
pub struct OutputPathResolver {
    root: PathBuf,
}

impl OutputPathResolver {
    /// Creates a resolver rooted at `root`.
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// The output root.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Splits a namespace into directory segments.
    ///
    /// `::`, `\`, `.`, and `/` all separate segments. A leading `crate`
    /// segment names the output root itself and is dropped.
    #[must_use]
    pub fn namespace_segments(namespace: &str) -> Vec<&str> {
        let mut segments: Vec<&str> = namespace
            .split(|c| matches!(c, ':' | '\\' | '.' | '/'))
            .filter(|s| !s.is_empty())
            .collect();
        if segments.first() == Some(&"crate") {
            segments.remove(0);
        }
        segments
    }

    /// Directory of `namespace`.
    #[must_use]
    pub fn namespace_dir(&self, namespace: &str) -> PathBuf {
        Self::namespace_segments(namespace)
            .into_iter()
            .fold(self.root.clone(), |dir, segment| dir.join(segment))
    }

    /// Creates the directory of `namespace` if it does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_dir(&self, namespace: &str) -> Result<PathBuf> {
        let dir = self.namespace_dir(namespace);
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        Ok(dir)
    }
}
