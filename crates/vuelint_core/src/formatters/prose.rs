//! Prose formatter: one line per failure, plus the fix summary.

use vuelint_rules::Severity;
use vuelint_syntax::LineIndex;

use crate::LintResult;

/// Renders one `SEVERITY: path[line, col]: message` line per failure.
pub fn format_prose(results: &[LintResult]) -> String {
    let mut out = String::new();

    for result in results {
        let line_index = LineIndex::new(&result.source);
        for diagnostic in &result.diagnostics {
            let severity = match diagnostic.severity {
                Severity::Warning => "WARNING",
                _ => "ERROR",
            };
            let start = line_index.position(diagnostic.span.start);
            out.push_str(&format!(
                "{}: {}[{}, {}]: {}\n",
                severity,
                result.path.display(),
                start.line,
                start.column + 1,
                diagnostic.message,
            ));
        }
    }

    out
}

/// Renders the summary of a fix pass: one line per fixed file. Files with
/// no applied fixes render nothing.
pub fn format_fix_summary(results: &[LintResult]) -> String {
    let mut out = String::new();

    for result in results {
        if result.fixes_applied > 0 {
            let noun = if result.fixes_applied == 1 {
                "error"
            } else {
                "errors"
            };
            out.push_str(&format!(
                "Fixed {} {} in {}\n",
                result.fixes_applied,
                noun,
                result.path.display(),
            ));
        }
    }

    out
}
