//! Per-file context handed to rules.

use std::path::Path;

use vuelint_syntax::{LineIndex, Token};

/// Everything a rule may inspect about the file being linted.
///
/// For hybrid documents the source is the padded script region, so spans
/// and line numbers computed here land on the original document's lines.
pub struct RuleContext<'a> {
    /// Path of the file, as reported in diagnostics.
    pub path: &'a Path,
    /// The analyzable source text.
    pub source: &'a str,
    /// Token stream of `source`.
    pub tokens: &'a [Token],
    /// Line index over `source`.
    pub line_index: &'a LineIndex,
    /// Rule options from configuration (`null` when none were given).
    pub options: &'a serde_json::Value,
}

impl<'a> RuleContext<'a> {
    /// Returns the text of the token at `idx`, or `""` out of bounds.
    pub fn token_text(&self, idx: usize) -> &'a str {
        self.tokens
            .get(idx)
            .map(|t| t.text(self.source))
            .unwrap_or("")
    }

    /// Returns the first option as a `u64`, accepting both a bare number
    /// and the TSLint-style one-element options array.
    pub fn option_u64(&self) -> Option<u64> {
        match self.options {
            serde_json::Value::Number(n) => n.as_u64(),
            serde_json::Value::Array(items) => items.first().and_then(|v| v.as_u64()),
            _ => None,
        }
    }
}
