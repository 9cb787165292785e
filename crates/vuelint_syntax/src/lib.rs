//! # vuelint_syntax
//!
//! Low-level source representation for vuelint:
//! - Byte spans and line/column positions
//! - A line index for offset-to-position lookups
//! - A lexical scanner for TypeScript source

mod line_index;
mod scanner;
mod span;

pub use line_index::LineIndex;
pub use scanner::{Scanner, Token, TokenKind, tokenize};
pub use span::{Location, Position, Span};
