//! Source text emission helpers.

use std::fmt::Write as FmtWrite;
use std::path::Path;

use anyhow::{Context, Result};

/// Accumulates the text of one generated Rust file.
#[derive(Debug, Default)]
pub struct RustFile {
    /// The text written so far.
    pub buf: String,
}

impl RustFile {
    /// Starts a file with the optional `header` and an inner module doc.
    ///
    /// Header lines that are not already comments are written as `//` comments.
    #[must_use]
    pub fn new(header: Option<&str>, module_doc: &str) -> Self {
        let mut f = Self::default();
        if let Some(header) = header {
            for line in header.lines() {
                if line.trim_start().starts_with("//") {
                    f.line(line);
                } else if line.trim().is_empty() {
                    f.line("//");
                } else {
                    f.line(&format!("// {line}"));
                }
            }
            f.blank();
        }
        for line in module_doc.lines() {
            if line.is_empty() {
                f.line("//!");
            } else {
                f.line(&format!("//! {line}"));
            }
        }
        f.blank();
        f
    }

    /// Appends one line.
    pub fn line(&mut self, s: &str) {
        let _ = writeln!(self.buf, "{s}");
    }

    /// Appends an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Appends `lines`, each prefixed with `indent`.
    pub fn lines(&mut self, indent: &str, lines: &[String]) {
        for line in lines {
            let _ = writeln!(self.buf, "{indent}{line}");
        }
    }

    /// Appends `text` as `///` doc lines.
    pub fn doc_comment(&mut self, text: &str) {
        self.prefixed_doc("", text);
    }

    /// Appends `text` as `///` doc lines indented one level.
    pub fn indented_doc_comment(&mut self, text: &str) {
        self.prefixed_doc("    ", text);
    }

    fn prefixed_doc(&mut self, indent: &str, text: &str) {
        if text.is_empty() {
            let _ = writeln!(self.buf, "{indent}///");
            return;
        }
        for line in text.lines() {
            if line.is_empty() {
                let _ = writeln!(self.buf, "{indent}///");
            } else {
                let _ = writeln!(self.buf, "{indent}/// {line}");
            }
        }
    }

    /// Returns the accumulated text.
    #[must_use]
    pub fn finish(self) -> String {
        self.buf
    }
}

/// Writes `content` to `path`, creating parent directories.
///
/// # Errors
///
/// Returns an error if a directory or the file cannot be written.
pub fn write_file(path: &Path, content: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create {}", parent.display()))?;
    }
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}

/// Turns a vocabulary description into doc comment text.
///
/// Line breaks (literal or escaped as `\n`) become separate lines, inner
/// whitespace runs collapse, and leading and trailing blank lines are dropped.
/// Vocabulary cross references (`[[Person]]`) become code spans.
#[must_use]
pub fn normalize_comment(comment: &str) -> String {
    let text = comment
        .replace("\\n", "\n")
        .replace("[[", "`")
        .replace("]]", "`");
    let lines: Vec<String> = text
        .lines()
        .map(|line| line.split_whitespace().collect::<Vec<_>>().join(" "))
        .collect();
    let start = lines.iter().position(|l| !l.is_empty()).unwrap_or(lines.len());
    let end = lines.iter().rposition(|l| !l.is_empty()).map_or(start, |i| i + 1);
    lines[start..end].join("\n")
}
