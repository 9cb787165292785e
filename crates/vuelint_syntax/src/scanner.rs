//! Lexical scanner for TypeScript source.
//!
//! Produces a flat token stream with byte spans. Comments are skipped and
//! string/template literals are emitted as single tokens, so rules that
//! match identifiers never fire inside either. This is a lexical scanner,
//! not a parser: regex literals are tokenized as punctuation runs, which is
//! sufficient for identifier-driven rules.

use crate::Span;

/// The kind of a scanned token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier or keyword.
    Ident,
    /// Numeric literal.
    Number,
    /// Single- or double-quoted string literal.
    Str,
    /// Backtick template literal, including interpolations.
    Template,
    /// Operator or other punctuation.
    Punct,
}

/// A token with its byte span in the scanned source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    /// Returns the source text covered by this token.
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.slice(source).unwrap_or("")
    }
}

/// Multi-character operators, longest first for maximal munch.
const OPERATORS: &[&str] = &[
    ">>>=", "...", "===", "!==", "**=", "<<=", ">>=", "&&=", "||=", "??=", ">>>", "==", "!=", "=>",
    "+=", "-=", "*=", "/=", "%=", "&=", "|=", "^=", "++", "--", "**", "&&", "||", "??", "<=", ">=",
    "<<", ">>", "?.",
];

/// Scanner over a single source text.
pub struct Scanner<'a> {
    source: &'a str,
    bytes: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    /// Creates a scanner positioned at the start of `source`.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            bytes: source.as_bytes(),
            pos: 0,
        }
    }

    /// Scans the remaining source into a token stream.
    pub fn scan(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        while let Some(token) = self.next_token() {
            tokens.push(token);
        }
        tokens
    }

    fn next_token(&mut self) -> Option<Token> {
        loop {
            self.skip_whitespace();
            if self.pos >= self.bytes.len() {
                return None;
            }
            if self.lookahead("//") {
                self.skip_line_comment();
                continue;
            }
            if self.lookahead("/*") {
                self.skip_block_comment();
                continue;
            }
            break;
        }

        let start = self.pos;
        let byte = self.bytes[self.pos];

        let kind = match byte {
            b'\'' | b'"' => {
                self.scan_string(byte);
                TokenKind::Str
            }
            b'`' => {
                self.pos += 1;
                self.scan_template_body();
                TokenKind::Template
            }
            b'0'..=b'9' => {
                self.scan_number();
                TokenKind::Number
            }
            _ if is_ident_start(self.current_char()) => {
                self.scan_ident();
                TokenKind::Ident
            }
            _ => {
                self.scan_punct();
                TokenKind::Punct
            }
        };

        Some(Token {
            kind,
            span: Span::new(start as u32, self.pos as u32),
        })
    }

    fn current_char(&self) -> char {
        self.source[self.pos..].chars().next().unwrap_or('\0')
    }

    fn lookahead(&self, pat: &str) -> bool {
        self.source[self.pos..].starts_with(pat)
    }

    fn skip_whitespace(&mut self) {
        while self.pos < self.bytes.len() {
            let c = self.current_char();
            if c.is_whitespace() {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn skip_line_comment(&mut self) {
        while self.pos < self.bytes.len() && self.bytes[self.pos] != b'\n' {
            self.pos += 1;
        }
    }

    fn skip_block_comment(&mut self) {
        self.pos += 2;
        while self.pos < self.bytes.len() {
            if self.lookahead("*/") {
                self.pos += 2;
                return;
            }
            self.pos += self.current_char().len_utf8();
        }
    }

    /// Consumes a quoted string body, including the quotes.
    ///
    /// An unterminated string ends at the line break, matching how the
    /// downstream rules should see the rest of the file.
    fn scan_string(&mut self, quote: u8) {
        self.pos += 1;
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            if byte == b'\\' {
                self.pos += 1;
                if self.pos < self.bytes.len() {
                    self.pos += self.current_char().len_utf8();
                }
            } else if byte == quote {
                self.pos += 1;
                return;
            } else if byte == b'\n' {
                return;
            } else {
                self.pos += self.current_char().len_utf8();
            }
        }
    }

    /// Consumes a template body after the opening backtick.
    fn scan_template_body(&mut self) {
        while self.pos < self.bytes.len() {
            if self.bytes[self.pos] == b'\\' {
                self.pos += 1;
                if self.pos < self.bytes.len() {
                    self.pos += self.current_char().len_utf8();
                }
            } else if self.bytes[self.pos] == b'`' {
                self.pos += 1;
                return;
            } else if self.lookahead("${") {
                self.pos += 2;
                self.scan_interpolation();
            } else {
                self.pos += self.current_char().len_utf8();
            }
        }
    }

    /// Consumes a `${ ... }` interpolation up to its balancing brace.
    fn scan_interpolation(&mut self) {
        let mut depth = 1usize;
        while self.pos < self.bytes.len() && depth > 0 {
            match self.bytes[self.pos] {
                b'{' => {
                    depth += 1;
                    self.pos += 1;
                }
                b'}' => {
                    depth -= 1;
                    self.pos += 1;
                }
                b'\'' | b'"' => {
                    let quote = self.bytes[self.pos];
                    self.scan_string(quote);
                }
                b'`' => {
                    self.pos += 1;
                    self.scan_template_body();
                }
                b'/' if self.lookahead("//") => self.skip_line_comment(),
                b'/' if self.lookahead("/*") => self.skip_block_comment(),
                _ => self.pos += self.current_char().len_utf8(),
            }
        }
    }

    fn scan_number(&mut self) {
        while self.pos < self.bytes.len() {
            let byte = self.bytes[self.pos];
            let is_exponent_sign = (byte == b'+' || byte == b'-')
                && matches!(self.bytes.get(self.pos.wrapping_sub(1)), Some(&(b'e' | b'E')));
            if byte.is_ascii_alphanumeric() || byte == b'.' || byte == b'_' || is_exponent_sign {
                self.pos += 1;
            } else {
                break;
            }
        }
    }

    fn scan_ident(&mut self) {
        while self.pos < self.bytes.len() {
            let c = self.current_char();
            if is_ident_continue(c) {
                self.pos += c.len_utf8();
            } else {
                break;
            }
        }
    }

    fn scan_punct(&mut self) {
        for op in OPERATORS {
            if self.lookahead(op) {
                self.pos += op.len();
                return;
            }
        }
        self.pos += self.current_char().len_utf8();
    }
}

fn is_ident_start(c: char) -> bool {
    c.is_alphabetic() || c == '_' || c == '$'
}

fn is_ident_continue(c: char) -> bool {
    c.is_alphanumeric() || c == '_' || c == '$'
}

/// Scans `source` into a token stream.
pub fn tokenize(source: &str) -> Vec<Token> {
    Scanner::new(source).scan()
}
