//! Prefers `const` for bindings that are never reassigned.

use std::collections::HashMap;

use vuelint_syntax::TokenKind;

use crate::{Diagnostic, Fix, Rule, RuleContext};

/// Reports single-declarator `let` bindings with an initializer that are
/// never reassigned anywhere in the file; the fix rewrites the keyword to
/// `const`.
///
/// Analysis is lexical and file-scoped, and deliberately conservative: a
/// binding is skipped when its name is declared more than once, when the
/// statement declares several bindings, or when any later token sequence
/// looks like a reassignment. That can miss a fixable binding but never
/// rewrites one that is written to.
pub struct PreferConst;

const ASSIGN_OPS: &[&str] = &[
    "=", "+=", "-=", "*=", "/=", "%=", "**=", "<<=", ">>=", ">>>=", "&=", "|=", "^=", "&&=", "||=",
    "??=",
];

const DECL_KEYWORDS: &[&str] = &["let", "var", "const"];

/// Tokens that end the statement scan when no semicolon is present.
const STATEMENT_BREAKS: &[&str] = &["let", "var", "const", "function", "return", "if", "for"];

impl Rule for PreferConst {
    fn name(&self) -> &'static str {
        "prefer-const"
    }

    fn description(&self) -> &'static str {
        "Requires const for bindings that are never reassigned"
    }

    fn fixable(&self) -> bool {
        true
    }

    fn check(&self, ctx: &RuleContext<'_>) -> Vec<Diagnostic> {
        let mut declaration_counts: HashMap<&str, usize> = HashMap::new();
        let mut candidates = Vec::new();

        for (idx, token) in ctx.tokens.iter().enumerate() {
            if token.kind != TokenKind::Ident {
                continue;
            }
            let text = token.text(ctx.source);
            if !DECL_KEYWORDS.contains(&text) {
                continue;
            }
            if idx > 0 && ctx.token_text(idx - 1) == "." {
                continue;
            }
            let name_token = match ctx.tokens.get(idx + 1) {
                Some(t) if t.kind == TokenKind::Ident => t,
                _ => continue,
            };
            let name = name_token.text(ctx.source);
            *declaration_counts.entry(name).or_insert(0) += 1;

            if text == "let"
                && let Some(eq_idx) = initializer_eq_index(ctx, idx + 2)
                && !has_second_declarator(ctx, eq_idx + 1)
            {
                candidates.push((idx, idx + 1, name));
            }
        }

        let mut diagnostics = Vec::new();
        for (let_idx, name_idx, name) in candidates {
            if declaration_counts.get(name).copied().unwrap_or(0) > 1 {
                continue;
            }
            if is_reassigned(ctx, name, name_idx) {
                continue;
            }
            let message =
                format!("Identifier '{name}' is never reassigned; use 'const' instead of 'let'.");
            diagnostics.push(
                Diagnostic::new(self.name(), message, ctx.tokens[name_idx].span)
                    .with_fix(Fix::new(ctx.tokens[let_idx].span, "const")),
            );
        }

        diagnostics
    }
}

/// Finds the `=` that initializes the declarator starting at `start`
/// (directly after the binding name), tolerating a type annotation.
///
/// Returns `None` for uninitialized declarations and for `for...of` /
/// `for...in` heads, where the binding is written by the loop itself.
fn initializer_eq_index(ctx: &RuleContext<'_>, start: usize) -> Option<usize> {
    let mut depth = 0i32;
    for idx in start..ctx.tokens.len() {
        let text = ctx.token_text(idx);
        match text {
            "=" if depth == 0 => return Some(idx),
            ";" | "," if depth == 0 => return None,
            "of" | "in" if depth == 0 => return None,
            "(" | "[" | "{" | "<" => depth += 1,
            ")" | "]" | "}" | ">" => {
                if depth == 0 {
                    return None;
                }
                depth -= 1;
            }
            _ if depth == 0 && STATEMENT_BREAKS.contains(&text) => return None,
            _ => {}
        }
    }
    None
}

/// Returns true when a `,` at depth zero follows the initializer before
/// the statement ends, i.e. the statement declares several bindings.
fn has_second_declarator(ctx: &RuleContext<'_>, start: usize) -> bool {
    let mut depth = 0i32;
    for idx in start..ctx.tokens.len() {
        let text = ctx.token_text(idx);
        match text {
            ";" if depth == 0 => return false,
            "," if depth == 0 => return true,
            "(" | "[" | "{" => depth += 1,
            ")" | "]" | "}" => {
                if depth == 0 {
                    return false;
                }
                depth -= 1;
            }
            _ if depth == 0 && STATEMENT_BREAKS.contains(&text) => return false,
            _ => {}
        }
    }
    false
}

/// Returns true if `name` is written to anywhere after its declarator.
fn is_reassigned(ctx: &RuleContext<'_>, name: &str, name_idx: usize) -> bool {
    for (idx, token) in ctx.tokens.iter().enumerate().skip(name_idx + 1) {
        if token.kind != TokenKind::Ident || token.text(ctx.source) != name {
            continue;
        }
        let prev = idx.checked_sub(1).map(|i| ctx.token_text(i)).unwrap_or("");
        if prev == "." {
            continue;
        }
        let next = ctx.token_text(idx + 1);
        if ASSIGN_OPS.contains(&next) || next == "++" || next == "--" {
            return true;
        }
        if prev == "++" || prev == "--" {
            return true;
        }
    }
    false
}
