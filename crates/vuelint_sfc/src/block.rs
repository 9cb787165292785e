//! Top-level block parser for Vue single-file components.
//!
//! Splits a component into its `<template>`, `<script>` and `<style>`
//! blocks. The parser is tolerant the way the reference compilers are:
//! malformed input never fails, it just yields fewer blocks. An
//! unterminated block runs to the end of the document.

use vuelint_syntax::Span;

/// Block tag names recognized at the top level of a component.
const BLOCK_TAGS: &[&str] = &["template", "script", "style"];

/// A single top-level block of a component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SfcBlock {
    /// Tag name: `template`, `script` or `style`.
    pub tag: String,
    /// Value of the `lang` attribute, if present.
    pub lang: Option<String>,
    /// Span of the whole block, open tag through close tag.
    pub span: Span,
    /// Span of the block content, between the tags.
    pub content_span: Span,
}

impl SfcBlock {
    /// Returns the block content as a slice of `source`.
    pub fn content<'a>(&self, source: &'a str) -> &'a str {
        self.content_span.slice(source).unwrap_or("")
    }
}

/// A parsed component: the ordered list of its top-level blocks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SfcDocument {
    pub blocks: Vec<SfcBlock>,
}

impl SfcDocument {
    /// Returns the first block with the given tag name.
    pub fn block(&self, tag: &str) -> Option<&SfcBlock> {
        self.blocks.iter().find(|b| b.tag == tag)
    }
}

/// Parses a component source into its top-level blocks.
pub fn parse_component(source: &str) -> SfcDocument {
    let mut blocks = Vec::new();
    let mut pos = 0usize;

    while pos < source.len() {
        let Some(rel) = source[pos..].find('<') else {
            break;
        };
        let tag_start = pos + rel;
        let rest = &source[tag_start..];

        if rest.starts_with("<!--") {
            pos = match source[tag_start..].find("-->") {
                Some(end) => tag_start + end + 3,
                None => source.len(),
            };
            continue;
        }

        let Some(tag) = match_block_tag(rest) else {
            pos = tag_start + 1;
            continue;
        };

        let Some(open_end_rel) = rest.find('>') else {
            break;
        };
        let open_tag = &rest[..open_end_rel];
        let lang = attribute_value(open_tag, "lang");

        if open_tag.ends_with('/') {
            // Self-closing block, no content.
            let end = tag_start + open_end_rel + 1;
            blocks.push(SfcBlock {
                tag: tag.to_string(),
                lang,
                span: Span::new(tag_start as u32, end as u32),
                content_span: Span::new(end as u32, end as u32),
            });
            pos = end;
            continue;
        }

        let content_start = tag_start + open_end_rel + 1;
        let (content_end, block_end) = find_block_end(source, content_start, tag);

        blocks.push(SfcBlock {
            tag: tag.to_string(),
            lang,
            span: Span::new(tag_start as u32, block_end as u32),
            content_span: Span::new(content_start as u32, content_end as u32),
        });
        pos = block_end;
    }

    SfcDocument { blocks }
}

/// Returns the block tag name if `rest` starts with one of the known open
/// tags followed by a tag-name boundary.
fn match_block_tag(rest: &str) -> Option<&'static str> {
    for tag in BLOCK_TAGS {
        if let Some(after) = rest.strip_prefix('<').and_then(|r| r.strip_prefix(tag)) {
            match after.as_bytes().first() {
                Some(&(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')) => return Some(tag),
                _ => {}
            }
        }
    }
    None
}

/// Finds the end of a block's content and of the whole block.
///
/// `<template>` may nest; `<script>` and `<style>` content cannot contain
/// their own close tag, so the first close tag terminates them.
fn find_block_end(source: &str, content_start: usize, tag: &str) -> (usize, usize) {
    let open_pat = format!("<{tag}");
    let close_pat = format!("</{tag}");
    let mut depth = 1usize;
    let mut cursor = content_start;

    while cursor < source.len() {
        let open = if tag == "template" {
            find_tag(source, cursor, &open_pat)
        } else {
            None
        };
        let close = find_tag(source, cursor, &close_pat);

        match (open, close) {
            (Some(o), Some(c)) if o < c => {
                depth += 1;
                cursor = o + open_pat.len();
            }
            (_, Some(c)) => {
                depth -= 1;
                if depth == 0 {
                    let block_end = match source[c..].find('>') {
                        Some(i) => c + i + 1,
                        None => source.len(),
                    };
                    return (c, block_end);
                }
                cursor = c + close_pat.len();
            }
            _ => break,
        }
    }

    // Unterminated block runs to the end of the document.
    (source.len(), source.len())
}

/// Finds the next occurrence of `pat` at or after `from` that is followed
/// by a tag-name boundary, so `<template-custom>` does not count as a
/// nested `<template>`.
fn find_tag(source: &str, from: usize, pat: &str) -> Option<usize> {
    let mut cursor = from;
    while let Some(rel) = source[cursor..].find(pat) {
        let at = cursor + rel;
        match source.as_bytes().get(at + pat.len()) {
            None | Some(&(b'>' | b'/' | b' ' | b'\t' | b'\n' | b'\r')) => return Some(at),
            _ => cursor = at + pat.len(),
        }
    }
    None
}

/// Extracts the value of a named attribute from an open tag.
///
/// Handles `name="v"`, `name='v'`, `name=v` and bare `name` (which yields
/// an empty value, the same as no recognizable language).
fn attribute_value(open_tag: &str, name: &str) -> Option<String> {
    let mut rest = open_tag;
    while let Some(idx) = rest.find(name) {
        let before = rest[..idx].chars().next_back();
        let boundary = before.is_none_or(|c| c.is_whitespace());
        let after = &rest[idx + name.len()..];

        if boundary {
            let after = after.trim_start();
            if let Some(value_part) = after.strip_prefix('=') {
                let value_part = value_part.trim_start();
                let value = match value_part.as_bytes().first() {
                    Some(&(quote @ (b'"' | b'\''))) => {
                        let quoted = &value_part[1..];
                        quoted.split(quote as char).next().unwrap_or("")
                    }
                    _ => value_part
                        .split(|c: char| c.is_whitespace() || c == '/' || c == '>')
                        .next()
                        .unwrap_or(""),
                };
                return Some(value.to_string());
            }
            if after.is_empty() || after.starts_with(|c: char| c.is_whitespace() || c == '/') {
                return Some(String::new());
            }
        }
        rest = &rest[idx + name.len()..];
    }
    None
}
