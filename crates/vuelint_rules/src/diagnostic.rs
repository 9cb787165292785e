//! Diagnostic types for lint results.

use serde::{Deserialize, Serialize};
use vuelint_syntax::{Location, Span};

/// Severity of a rule, as configured, or of a reported diagnostic.
///
/// `Off` only ever appears in configuration; the linter never runs a rule
/// configured off, so reported diagnostics carry `Warning` or `Error`.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    /// Rule disabled.
    Off,
    /// Reported but does not fail the run on its own.
    Warning,
    /// Reported as a failure.
    #[default]
    Error,
}

impl Severity {
    /// Returns true if this severity disables the rule.
    pub fn is_off(self) -> bool {
        matches!(self, Self::Off)
    }
}

/// A diagnostic reported by a lint rule.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Diagnostic {
    /// The rule that produced this diagnostic.
    pub rule_id: String,

    /// Human-readable message.
    pub message: String,

    /// Byte span in the linted source.
    pub span: Span,

    /// Line/column location, filled in by the linter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub loc: Option<Location>,

    /// Severity, stamped from configuration.
    #[serde(default)]
    pub severity: Severity,

    /// Optional auto-fix.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fix: Option<Fix>,
}

impl Diagnostic {
    /// Creates a new diagnostic with default (error) severity.
    pub fn new(rule_id: impl Into<String>, message: impl Into<String>, span: Span) -> Self {
        Self {
            rule_id: rule_id.into(),
            message: message.into(),
            span,
            loc: None,
            severity: Severity::Error,
            fix: None,
        }
    }

    /// Sets the severity.
    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, loc: Location) -> Self {
        self.loc = Some(loc);
        self
    }

    /// Attaches an auto-fix.
    pub fn with_fix(mut self, fix: Fix) -> Self {
        self.fix = Some(fix);
        self
    }
}

/// A textual replacement that corrects a diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Fix {
    /// The byte span to replace.
    pub span: Span,

    /// The replacement text.
    pub text: String,
}

impl Fix {
    /// Creates a fix replacing `span` with `text`.
    pub fn new(span: Span, text: impl Into<String>) -> Self {
        Self {
            span,
            text: text.into(),
        }
    }

    /// Creates a fix deleting `span`.
    pub fn delete(span: Span) -> Self {
        Self {
            span,
            text: String::new(),
        }
    }
}
