//! # vuelint_rules
//!
//! The rule engine: diagnostic types, the [`Rule`] trait, the
//! [`RuleContext`] handed to rules, and the registry of built-in rules.
//!
//! Rules are lexical: they consume the token stream and raw source text of
//! one file and report diagnostics with optional auto-fixes. Rule names
//! follow the configuration names of the TSLint rules they reimplement.

mod context;
mod diagnostic;
mod registry;
mod rules;

pub use context::RuleContext;
pub use diagnostic::{Diagnostic, Fix, Severity};
pub use registry::{all_rules, find_rule, rule_names};

/// A single lint rule.
///
/// Implementations inspect one file through a [`RuleContext`] and return
/// zero or more diagnostics. A rule must not report a fix unless
/// [`Rule::fixable`] returns true.
pub trait Rule: Send + Sync {
    /// Configuration name of the rule, e.g. `no-any`.
    fn name(&self) -> &'static str;

    /// One-line description shown in reports and documentation.
    fn description(&self) -> &'static str;

    /// Whether the rule can produce auto-fixes.
    fn fixable(&self) -> bool {
        false
    }

    /// Checks one file and returns its diagnostics.
    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic>;
}
