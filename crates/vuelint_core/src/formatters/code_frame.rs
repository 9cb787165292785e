//! Code-frame formatter: failures with framed source excerpts.

use vuelint_rules::Severity;
use vuelint_syntax::LineIndex;

use crate::LintResult;

/// Context lines shown above and below the flagged line.
const CONTEXT: u32 = 2;

/// Renders all failures as code frames. Clean results render nothing.
pub fn format_code_frame(results: &[LintResult]) -> String {
    let mut out = String::new();

    for result in results {
        if result.diagnostics.is_empty() {
            continue;
        }
        let line_index = LineIndex::new(&result.source);

        for diagnostic in &result.diagnostics {
            let severity = match diagnostic.severity {
                Severity::Warning => "WARNING",
                _ => "ERROR",
            };
            let start = line_index.position(diagnostic.span.start);
            out.push_str(&format!(
                "{}: {}:{}:{} - {} ({})\n",
                severity,
                result.path.display(),
                start.line,
                start.column + 1,
                diagnostic.message,
                diagnostic.rule_id,
            ));
            out.push_str(&frame(&result.source, &line_index, diagnostic.span));
            out.push('\n');
        }
    }

    out
}

/// Renders the excerpt around a span with a caret line under its start.
fn frame(source: &str, line_index: &LineIndex, span: vuelint_syntax::Span) -> String {
    let start = line_index.position(span.start);
    let first = start.line.saturating_sub(CONTEXT).max(1);
    let last = (start.line + CONTEXT).min(line_index.line_count());
    let gutter = last.to_string().len();

    let mut out = String::new();
    for line in first..=last {
        let Some(line_span) = line_index.line_span(line) else {
            continue;
        };
        let text = line_span.slice(source).unwrap_or("").trim_end_matches('\r');
        let marker = if line == start.line { ">" } else { " " };
        out.push_str(&format!("{marker} {line:>gutter$} | {text}\n"));

        if line == start.line {
            // Caret under the span, clamped to the flagged line.
            let width = (span.end.min(line_span.end).saturating_sub(span.start)).max(1) as usize;
            out.push_str(&format!(
                "  {:>gutter$} | {}{}\n",
                "",
                " ".repeat(start.column as usize),
                "^".repeat(width),
            ));
        }
    }
    out
}
