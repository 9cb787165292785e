//! Built-in rule implementations.

pub mod no_any;
pub mod no_consecutive_blank_lines;
pub mod no_debugger;
pub mod no_trailing_whitespace;
pub mod no_var_keyword;
pub mod prefer_const;

#[cfg(test)]
pub(crate) mod test_utils {
    use std::path::Path;

    use vuelint_syntax::{LineIndex, tokenize};

    use crate::{Diagnostic, Rule, RuleContext};

    /// Runs a rule over `source` with no options.
    pub fn check(rule: &dyn Rule, source: &str) -> Vec<Diagnostic> {
        check_with_options(rule, source, serde_json::Value::Null)
    }

    /// Runs a rule over `source` with the given options value.
    pub fn check_with_options(
        rule: &dyn Rule,
        source: &str,
        options: serde_json::Value,
    ) -> Vec<Diagnostic> {
        let tokens = tokenize(source);
        let line_index = LineIndex::new(source);
        let ctx = RuleContext {
            path: Path::new("test.ts"),
            source,
            tokens: &tokens,
            line_index: &line_index,
            options: &options,
        };
        rule.check(&ctx)
    }

    /// Applies every fix in `diagnostics` to `source`, back to front.
    pub fn apply_fixes(source: &str, diagnostics: &[Diagnostic]) -> String {
        let mut fixes: Vec<_> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
        fixes.sort_by(|a, b| b.span.start.cmp(&a.span.start));
        let mut out = source.to_string();
        for fix in fixes {
            out.replace_range(fix.span.start as usize..fix.span.end as usize, &fix.text);
        }
        out
    }
}
