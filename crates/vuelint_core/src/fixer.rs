//! Applies auto-fixes to source content.

use tracing::{debug, warn};

use vuelint_rules::{Diagnostic, Fix};

/// Outcome of applying fixes to one source text.
#[derive(Debug)]
pub struct FixerResult {
    /// Number of fixes applied.
    pub fixes_applied: usize,
    /// The fixed content.
    pub fixed_content: String,
    /// Whether the content was modified.
    pub modified: bool,
}

impl FixerResult {
    fn unchanged(content: String) -> Self {
        Self {
            fixes_applied: 0,
            fixed_content: content,
            modified: false,
        }
    }
}

/// Applies the fixes carried by `diagnostics` to `content`.
///
/// Fixes are applied from the end of the content to the beginning so
/// earlier spans stay valid; overlapping fixes are skipped, keeping the
/// one that starts later.
pub fn apply_fixes_to_content(content: &str, diagnostics: &[Diagnostic]) -> FixerResult {
    let mut fixes: Vec<&Fix> = diagnostics.iter().filter_map(|d| d.fix.as_ref()).collect();
    if fixes.is_empty() {
        return FixerResult::unchanged(content.to_string());
    }

    fixes.sort_by(|a, b| b.span.start.cmp(&a.span.start));
    let fixes = filter_overlapping(fixes);

    let mut result = content.to_string();
    let mut applied = 0;

    for fix in &fixes {
        let start = fix.span.start as usize;
        let end = fix.span.end as usize;
        if start > result.len() || end > result.len() || start > end {
            warn!(
                "Invalid fix span [{}, {}) for content length {}",
                start,
                end,
                result.len()
            );
            continue;
        }
        debug!("Applying fix: replace [{start}..{end}] with '{}'", fix.text);
        result.replace_range(start..end, &fix.text);
        applied += 1;
    }

    FixerResult {
        fixes_applied: applied,
        modified: applied > 0,
        fixed_content: result,
    }
}

/// Drops fixes that overlap an already-accepted fix.
///
/// Expects `fixes` sorted by start descending; the accepted list then stays
/// sorted too, so overlap only needs checking against the last accepted
/// fix.
fn filter_overlapping(fixes: Vec<&Fix>) -> Vec<&Fix> {
    let mut result: Vec<&Fix> = Vec::with_capacity(fixes.len());

    for fix in fixes {
        let overlaps = result.last().is_some_and(|last| {
            !(fix.span.end <= last.span.start || fix.span.start >= last.span.end)
        });
        if overlaps {
            warn!(
                "Skipping overlapping fix at [{}, {})",
                fix.span.start, fix.span.end
            );
        } else {
            result.push(fix);
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use vuelint_syntax::Span;

    fn diag_with_fix(start: u32, end: u32, replacement: &str) -> Diagnostic {
        Diagnostic::new("test-rule", "msg", Span::new(start, end))
            .with_fix(Fix::new(Span::new(start, end), replacement))
    }

    #[test]
    fn test_single_fix() {
        let result = apply_fixes_to_content("let x = 1;", &[diag_with_fix(0, 3, "const")]);
        assert_eq!(result.fixed_content, "const x = 1;");
        assert_eq!(result.fixes_applied, 1);
        assert!(result.modified);
    }

    #[test]
    fn test_multiple_fixes_preserve_spans() {
        let content = "var a = 1;\nvar b = 2;";
        let diagnostics = vec![diag_with_fix(0, 3, "let"), diag_with_fix(11, 14, "let")];
        let result = apply_fixes_to_content(content, &diagnostics);
        assert_eq!(result.fixed_content, "let a = 1;\nlet b = 2;");
        assert_eq!(result.fixes_applied, 2);
    }

    #[test]
    fn test_delete_fix() {
        let content = "a  \nb";
        let diagnostics = vec![Diagnostic::new("r", "m", Span::new(1, 3))
            .with_fix(Fix::delete(Span::new(1, 3)))];
        let result = apply_fixes_to_content(content, &diagnostics);
        assert_eq!(result.fixed_content, "a\nb");
    }

    #[test]
    fn test_no_fixes_is_unchanged() {
        let diagnostics = vec![Diagnostic::new("r", "m", Span::new(0, 1))];
        let result = apply_fixes_to_content("abc", &diagnostics);
        assert_eq!(result.fixed_content, "abc");
        assert!(!result.modified);
    }

    #[test]
    fn test_overlapping_fix_is_skipped() {
        let content = "hello world";
        let diagnostics = vec![diag_with_fix(0, 5, "hi"), diag_with_fix(3, 8, "XXX")];
        let result = apply_fixes_to_content(content, &diagnostics);
        assert_eq!(result.fixes_applied, 1);
    }

    #[test]
    fn test_adjacent_fixes_both_apply() {
        let content = "aabb";
        let diagnostics = vec![diag_with_fix(0, 2, "x"), diag_with_fix(2, 4, "y")];
        let result = apply_fixes_to_content(content, &diagnostics);
        assert_eq!(result.fixed_content, "xy");
        assert_eq!(result.fixes_applied, 2);
    }

    #[test]
    fn test_out_of_bounds_fix_is_skipped() {
        let result = apply_fixes_to_content("ab", &[diag_with_fix(0, 100, "x")]);
        assert_eq!(result.fixed_content, "ab");
        assert_eq!(result.fixes_applied, 0);
    }
}
