//! Per-file lint results.

use std::path::PathBuf;

use vuelint_rules::{Diagnostic, Severity};
use vuelint_sfc::DocumentKind;

/// The outcome of linting one file.
#[derive(Debug, Clone)]
pub struct LintResult {
    /// Path of the linted file.
    pub path: PathBuf,
    /// How the file was classified.
    pub kind: DocumentKind,
    /// The analyzable source the diagnostics refer to. For hybrid
    /// documents this is the padded script, so spans and line numbers in
    /// the diagnostics resolve against it.
    pub source: String,
    /// Diagnostics reported for the file, in source order.
    pub diagnostics: Vec<Diagnostic>,
    /// Number of fixes applied during a fix pass.
    pub fixes_applied: usize,
}

impl LintResult {
    /// Creates a result with no fixes applied.
    pub fn new(path: PathBuf, kind: DocumentKind, source: String, diagnostics: Vec<Diagnostic>) -> Self {
        Self {
            path,
            kind,
            source,
            diagnostics,
            fixes_applied: 0,
        }
    }

    /// Returns true if any diagnostic was reported.
    pub fn has_failures(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Number of error-severity diagnostics.
    pub fn error_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Error)
            .count()
    }

    /// Number of warning-severity diagnostics.
    pub fn warning_count(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| d.severity == Severity::Warning)
            .count()
    }
}
