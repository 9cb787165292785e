//! Registry of built-in rules.

use crate::Rule;
use crate::rules::{
    no_any::NoAny, no_consecutive_blank_lines::NoConsecutiveBlankLines, no_debugger::NoDebugger,
    no_trailing_whitespace::NoTrailingWhitespace, no_var_keyword::NoVarKeyword,
    prefer_const::PreferConst,
};

/// Returns all built-in rules, in reporting order.
pub fn all_rules() -> Vec<Box<dyn Rule>> {
    vec![
        Box::new(NoAny),
        Box::new(NoVarKeyword),
        Box::new(PreferConst),
        Box::new(NoDebugger),
        Box::new(NoConsecutiveBlankLines),
        Box::new(NoTrailingWhitespace),
    ]
}

/// Returns the names of all built-in rules.
pub fn rule_names() -> Vec<&'static str> {
    all_rules().iter().map(|r| r.name()).collect()
}

/// Looks up a built-in rule by configuration name.
pub fn find_rule(name: &str) -> Option<Box<dyn Rule>> {
    all_rules().into_iter().find(|r| r.name() == name)
}
