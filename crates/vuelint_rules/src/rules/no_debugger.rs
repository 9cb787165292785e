//! Forbids `debugger` statements.

use vuelint_syntax::TokenKind;

use crate::{Diagnostic, Rule, RuleContext};

/// Reports `debugger` statements.
pub struct NoDebugger;

const MESSAGE: &str = "Use of debugger statements is forbidden";

impl Rule for NoDebugger {
    fn name(&self) -> &'static str {
        "no-debugger"
    }

    fn description(&self) -> &'static str {
        "Disallows debugger statements"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (idx, token) in ctx.tokens.iter().enumerate() {
            if token.kind != TokenKind::Ident || token.text(ctx.source) != "debugger" {
                continue;
            }
            if idx > 0 && ctx.token_text(idx - 1) == "." {
                continue;
            }
            diagnostics.push(Diagnostic::new(self.name(), MESSAGE, token.span));
        }

        diagnostics
    }
}
