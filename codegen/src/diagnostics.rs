//! Diagnostics: severities, entries, and the run-wide sink.
//!
//! No diagnostic interrupts a run. Each one is recorded in the sink and
//! emitted through `tracing` at the matching level as it is reported.

use std::cell::{Ref, RefCell};
use std::fmt;

/// Severity level of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Severity {
    /// Advisory note; nothing changed.
    Info,
    /// Advisory warning; output is still what was asked for.
    Warning,
    /// Ambiguity resolved by a deterministic tie-break.
    Error,
    /// Something explicitly requested could not be found and was dropped.
    Critical,
}

impl Severity {
    /// Returns the lowercase label used in logs and summaries.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Severity::Info => "info",
            Severity::Warning => "warning",
            Severity::Error => "error",
            Severity::Critical => "critical",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// Severity of the diagnostic.
    pub severity: Severity,
    /// Human-readable message.
    pub message: String,
}

/// Collects diagnostics for one generation run.
///
/// The sink is shared by reference between the model builder and every
/// annotation generator, so recording goes through a `RefCell`. Runs are
/// single-threaded and the sink is never shared across threads.
#[derive(Debug, Default)]
pub struct Diagnostics {
    entries: RefCell<Vec<Diagnostic>>,
}

impl Diagnostics {
    /// Creates an empty sink.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an info diagnostic.
    pub fn info(&self, message: impl Into<String>) {
        self.report(Severity::Info, message.into());
    }

    /// Records a warning diagnostic.
    pub fn warning(&self, message: impl Into<String>) {
        self.report(Severity::Warning, message.into());
    }

    /// Records an error diagnostic.
    pub fn error(&self, message: impl Into<String>) {
        self.report(Severity::Error, message.into());
    }

    /// Records a critical diagnostic.
    pub fn critical(&self, message: impl Into<String>) {
        self.report(Severity::Critical, message.into());
    }

    fn report(&self, severity: Severity, message: String) {
        match severity {
            Severity::Info => tracing::info!(severity = %severity, "{message}"),
            Severity::Warning => tracing::warn!(severity = %severity, "{message}"),
            Severity::Error | Severity::Critical => {
                tracing::error!(severity = %severity, "{message}")
            }
        }
        self.entries
            .borrow_mut()
            .push(Diagnostic { severity, message });
    }

    /// Borrows every recorded diagnostic, in reporting order.
    #[must_use]
    pub fn entries(&self) -> Ref<'_, Vec<Diagnostic>> {
        self.entries.borrow()
    }

    /// Returns the number of diagnostics with the given severity.
    #[must_use]
    pub fn count(&self, severity: Severity) -> usize {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .count()
    }

    /// Returns the messages of every diagnostic with the given severity.
    #[must_use]
    pub fn messages(&self, severity: Severity) -> Vec<String> {
        self.entries
            .borrow()
            .iter()
            .filter(|d| d.severity == severity)
            .map(|d| d.message.clone())
            .collect()
    }

    /// Returns the total number of diagnostics.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    /// Returns true if nothing was reported.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}
