//! Byte-offset to line/column mapping.

use crate::{Location, Position, Span};

/// Precomputed table of line start offsets for a source text.
///
/// Built once per file and queried for every diagnostic, so lookups are a
/// binary search over line starts rather than a rescan of the source.
#[derive(Debug, Clone)]
pub struct LineIndex {
    /// Byte offset of the first character of each line.
    line_starts: Vec<u32>,
    /// Total length of the indexed source in bytes.
    len: u32,
}

impl LineIndex {
    /// Builds a line index for the given source.
    pub fn new(source: &str) -> Self {
        let mut line_starts = vec![0u32];
        for (offset, byte) in source.bytes().enumerate() {
            if byte == b'\n' {
                line_starts.push(offset as u32 + 1);
            }
        }
        Self {
            line_starts,
            len: source.len() as u32,
        }
    }

    /// Returns the number of lines in the source.
    pub fn line_count(&self) -> u32 {
        self.line_starts.len() as u32
    }

    /// Returns the position of the given byte offset.
    ///
    /// Offsets past the end of the source clamp to the final position.
    pub fn position(&self, offset: u32) -> Position {
        let offset = offset.min(self.len);
        let line = match self.line_starts.binary_search(&offset) {
            Ok(idx) => idx,
            Err(idx) => idx - 1,
        };
        Position::new(line as u32 + 1, offset - self.line_starts[line])
    }

    /// Returns the location covering the given span.
    pub fn location(&self, span: Span) -> Location {
        Location::new(self.position(span.start), self.position(span.end))
    }

    /// Returns the span of the given 1-indexed line, excluding its newline.
    pub fn line_span(&self, line: u32) -> Option<Span> {
        let idx = line.checked_sub(1)? as usize;
        let start = *self.line_starts.get(idx)?;
        let end = self
            .line_starts
            .get(idx + 1)
            .map(|next| next - 1)
            .unwrap_or(self.len);
        Some(Span::new(start, end))
    }
}
