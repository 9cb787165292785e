//! Forbids the `any` type.

use vuelint_syntax::TokenKind;

use crate::{Diagnostic, Rule, RuleContext};

/// Reports uses of `any` in type positions.
///
/// Type positions are recognized lexically: an `any` identifier directly
/// after `:`, `<`, `,`, `|`, `&` or the `as` keyword.
pub struct NoAny;

const MESSAGE: &str =
    "Type declaration of 'any' loses type-safety. Consider replacing it with a more precise type.";

impl Rule for NoAny {
    fn name(&self) -> &'static str {
        "no-any"
    }

    fn description(&self) -> &'static str {
        "Disallows usages of the any type"
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut diagnostics = Vec::new();

        for (idx, token) in ctx.tokens.iter().enumerate() {
            if token.kind != TokenKind::Ident || token.text(ctx.source) != "any" {
                continue;
            }
            let Some(prev_idx) = idx.checked_sub(1) else {
                continue;
            };
            let prev = &ctx.tokens[prev_idx];
            let in_type_position = match prev.kind {
                TokenKind::Punct => matches!(prev.text(ctx.source), ":" | "<" | "," | "|" | "&"),
                TokenKind::Ident => prev.text(ctx.source) == "as",
                _ => false,
            };
            if in_type_position {
                diagnostics.push(Diagnostic::new(self.name(), MESSAGE, token.span));
            }
        }

        diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::test_utils::check;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_flags_annotation() {
        let diagnostics = check(&NoAny, "let x: any = 1;");
        assert_eq!(diagnostics.len(), 1);
        assert_eq!(diagnostics[0].span.slice("let x: any = 1;"), Some("any"));
    }

    #[test]
    fn test_flags_generic_argument() {
        assert_eq!(check(&NoAny, "const xs: Array<any> = [];").len(), 1);
    }

    #[test]
    fn test_flags_union_member() {
        assert_eq!(check(&NoAny, "type T = string | any;").len(), 1);
    }

    #[test]
    fn test_flags_as_cast() {
        assert_eq!(check(&NoAny, "const y = x as any;").len(), 1);
    }

    #[test]
    fn test_flags_second_type_parameter() {
        assert_eq!(check(&NoAny, "const m: Map<string, any> = new Map();").len(), 1);
    }

    #[test]
    fn test_ignores_identifier_named_any() {
        assert!(check(&NoAny, "const any = 1; f(any);").is_empty());
    }

    #[test]
    fn test_ignores_any_in_string() {
        assert!(check(&NoAny, "const s = 'x: any';").is_empty());
    }

    #[test]
    fn test_ignores_any_in_comment() {
        assert!(check(&NoAny, "// x: any\nlet y = 1;").is_empty());
    }

    #[test]
    fn test_multiple_occurrences() {
        assert_eq!(check(&NoAny, "function f(a: any, b: any) {}").len(), 2);
    }
}
