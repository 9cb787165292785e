//! Forbids `var` declarations.

use vuelint_syntax::TokenKind;

use crate::{Diagnostic, Fix, Rule, RuleContext};

/// Reports `var` declarations; the fix rewrites them to `let`.
pub struct NoVarKeyword;

const MESSAGE: &str = "Forbidden 'var' keyword, use 'let' or 'const' instead";

impl Rule for NoVarKeyword {
    fn name(&self) -> &'static str {
        "no-var-keyword"
    }

    fn description(&self) -> &'static str {
        "Disallows usage of the var keyword"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (idx, token) in ctx.tokens.iter().enumerate() {
            if token.kind != TokenKind::Ident || token.text(ctx.source) != "var" {
                continue;
            }
            // `var` must start a declaration: not a property access, and
            // followed by a binding (identifier or destructuring pattern).
            if idx > 0 && ctx.token_text(idx - 1) == "." {
                continue;
            }
            let next = ctx.token_text(idx + 1);
            let starts_binding = ctx
                .tokens
                .get(idx + 1)
                .is_some_and(|t| t.kind == TokenKind::Ident)
                || next == "["
                || next == "{";
            if starts_binding {
                diagnostics.push(
                    Diagnostic::new(self.name(), MESSAGE, token.span)
                        .with_fix(Fix::new(token.span, "let")),
                );
            }
        }

        diagnostics
    }
}
