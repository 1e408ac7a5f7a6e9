//! Whitespace normalization of generated files.

use std::path::PathBuf;

use anyhow::{Context, Result};

/// Strips trailing whitespace, collapses runs of blank lines to one, and ends
/// the text with exactly one newline.
#[must_use]
pub fn normalize_source(source: &str) -> String {
    let mut out = String::with_capacity(source.len());
    let mut previous_blank = true;
    for line in source.lines() {
        let line = line.trim_end();
        if line.is_empty() {
            if previous_blank {
                continue;
            }
            previous_blank = true;
        } else {
            previous_blank = false;
        }
        out.push_str(line);
        out.push('\n');
    }
    while out.ends_with("\n\n") {
        out.pop();
    }
    if out.is_empty() {
        out.push('\n');
    }
    out
}

/// Normalizes `files` in place; returns how many changed.
///
/// # Errors
///
/// Returns an error if a file cannot be read or written.
pub fn normalize_files(files: &[PathBuf]) -> Result<usize> {
    let mut changed = 0;
    for path in files {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let normalized = normalize_source(&source);
        if normalized != source {
            std::fs::write(path, normalized)
                .with_context(|| format!("failed to write {}", path.display()))?;
            changed += 1;
        }
    }
    tracing::debug!(files = files.len(), changed, "post-processed generated files");
    Ok(changed)
}
