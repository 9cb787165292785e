//! Limits runs of consecutive blank lines.

use vuelint_syntax::Span;

use crate::{Diagnostic, Fix, Rule, RuleContext};

/// Reports runs of blank lines longer than the configured maximum
/// (default 1); the fix deletes the excess lines.
///
/// This rule is forced off for hybrid documents: their analyzable source
/// is line-padded, and the padding is indistinguishable from real blank
/// lines.
pub struct NoConsecutiveBlankLines;

const DEFAULT_MAX: u64 = 1;

impl Rule for NoConsecutiveBlankLines {
    fn name(&self) -> &'static str {
        "no-consecutive-blank-lines"
    }

    fn description(&self) -> &'static str {
        "Disallows more than the configured number of consecutive blank lines"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let max = ctx.option_u64().unwrap_or(DEFAULT_MAX) as usize;
        let mut diagnostics = Vec::new();

        let mut offset = 0usize;
        let mut run_len = 0usize;
        // Byte offset where the first excess blank line of the current run starts.
        let mut excess_start: Option<usize> = None;

        for line in ctx.source.split_inclusive('\n') {
            if line.trim().is_empty() {
                run_len += 1;
                if run_len == max + 1 {
                    excess_start = Some(offset);
                }
            } else {
                if let Some(start) = excess_start.take() {
                    diagnostics.push(self.report(start, offset, max));
                }
                run_len = 0;
            }
            offset += line.len();
        }
        if let Some(start) = excess_start {
            diagnostics.push(self.report(start, offset, max));
        }

        diagnostics
    }
}

impl NoConsecutiveBlankLines {
    fn report(&self, start: usize, end: usize, max: usize) -> Diagnostic {
        let span = Span::new(start as u32, end as u32);
        let message = if max == 1 {
            "Consecutive blank lines are forbidden".to_string()
        } else {
            format!("Exceeds the {max} allowed consecutive blank lines")
        };
        Diagnostic::new(self.name(), message, span).with_fix(Fix::delete(span))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::{apply_fixes, check, check_with_options};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_allows_single_blank_line() {
        assert!(check(&NoConsecutiveBlankLines, "a\n\nb\n").is_empty());
    }

    #[test]
    fn test_flags_double_blank_line() {
        let diagnostics = check(&NoConsecutiveBlankLines, "a\n\n\nb\n");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_fix_collapses_run() {
        let source = "a\n\n\n\nb\n";
        let diagnostics = check(&NoConsecutiveBlankLines, source);
        assert_eq!(apply_fixes(source, &diagnostics), "a\n\nb\n");
    }

    #[test]
    fn test_whitespace_only_lines_are_blank() {
        let diagnostics = check(&NoConsecutiveBlankLines, "a\n  \n\t\nb\n");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_respects_max_option() {
        let source = "a\n\n\nb\n";
        assert!(check_with_options(&NoConsecutiveBlankLines, source, serde_json::json!(2)).is_empty());
        assert!(check_with_options(&NoConsecutiveBlankLines, source, serde_json::json!([2])).is_empty());
    }

    #[test]
    fn test_run_at_end_of_file() {
        let diagnostics = check(&NoConsecutiveBlankLines, "a\n\n\n");
        assert_eq!(diagnostics.len(), 1);
    }

    #[test]
    fn test_two_separate_runs() {
        let diagnostics = check(&NoConsecutiveBlankLines, "a\n\n\nb\n\n\nc\n");
        assert_eq!(diagnostics.len(), 2);
    }

    #[test]
    fn test_padded_hybrid_source_would_trip_this_rule() {
        // Why the linter forces this rule off for hybrid documents.
        let padded = "\n\n\nlet x = 1;\n";
        assert_eq!(check(&NoConsecutiveBlankLines, padded).len(), 1);
    }
}
