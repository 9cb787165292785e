//! Forbids trailing whitespace.

use vuelint_syntax::Span;

use crate::{Diagnostic, Fix, Rule, RuleContext};

/// Reports trailing spaces or tabs at the end of a line; the fix deletes
/// them. Carriage returns of CRLF line endings are left alone.
pub struct NoTrailingWhitespace;

const MESSAGE: &str = "Trailing whitespace is forbidden";

impl Rule for NoTrailingWhitespace {
    fn name(&self) -> &'static str {
        "no-trailing-whitespace"
    }

    fn description(&self) -> &'static str {
        "Disallows trailing whitespace at the end of a line"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();
        let mut offset = 0usize;

        for line in ctx.source.split_inclusive('\n') {
            let content = line.trim_end_matches('\n').trim_end_matches('\r');
            let trimmed = content.trim_end_matches([' ', '\t']);
            if trimmed.len() < content.len() {
                let span = Span::new(
                    (offset + trimmed.len()) as u32,
                    (offset + content.len()) as u32,
                );
                diagnostics.push(
                    Diagnostic::new(self.name(), MESSAGE, span).with_fix(Fix::delete(span)),
                );
            }
            offset += line.len();
        }

        diagnostics
    }
}
