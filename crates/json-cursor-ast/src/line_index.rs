//! Offset bookkeeping: byte positions to unit offsets, and unit offsets to
//! 1-based line/column positions.

use std::fmt;

use crate::options::OffsetUnit;

/// A 1-based line/column position. The column is counted in the index's unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Line table over one text, in one [`OffsetUnit`].
#[derive(Debug, Clone)]
pub struct LineIndex {
    unit: OffsetUnit,
    /// Unit offset for every byte position `0..=len`. Empty for
    /// [`OffsetUnit::Byte`], where the mapping is the identity.
    byte_to_unit: Vec<usize>,
    /// Unit offset of the first character of every line.
    line_starts: Vec<usize>,
    len: usize,
}

impl LineIndex {
    pub fn new(text: &str, unit: OffsetUnit) -> Self {
        let mut byte_to_unit = Vec::new();
        if unit != OffsetUnit::Byte {
            byte_to_unit.reserve(text.len() + 1);
        }
        let mut line_starts = vec![0];
        let mut offset = 0;
        for ch in text.chars() {
            if unit != OffsetUnit::Byte {
                // Interior bytes of a multi-byte char map to the char's start.
                byte_to_unit.extend(std::iter::repeat(offset).take(ch.len_utf8()));
            }
            offset += unit.width(ch);
            if ch == '\n' {
                line_starts.push(offset);
            }
        }
        if unit != OffsetUnit::Byte {
            byte_to_unit.push(offset);
        }
        Self {
            unit,
            byte_to_unit,
            line_starts,
            len: offset,
        }
    }

    /// Length of the text in the index's unit.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Convert a byte position into a unit offset. Positions past the end
    /// clamp to the text length.
    pub fn offset_of_byte(&self, byte: usize) -> usize {
        match self.unit {
            OffsetUnit::Byte => byte.min(self.len),
            _ => self
                .byte_to_unit
                .get(byte)
                .copied()
                .unwrap_or(self.len),
        }
    }

    /// Line and column of a unit offset. Offsets past the end report the
    /// position just after the last character.
    pub fn position(&self, offset: usize) -> Position {
        let offset = offset.min(self.len);
        let line = self.line_starts.partition_point(|&start| start <= offset);
        Position {
            line,
            column: offset - self.line_starts[line - 1] + 1,
        }
    }

    /// Unit offset of a 1-based line/column position.
    ///
    /// The column may point one past the last character of the line (the
    /// line break itself, or the end of the text). Anything further is `None`.
    pub fn offset(&self, position: Position) -> Option<usize> {
        if position.line == 0 || position.column == 0 {
            return None;
        }
        let start = *self.line_starts.get(position.line - 1)?;
        let line_end = match self.line_starts.get(position.line) {
            Some(next) => next - self.unit.width('\n'),
            None => self.len,
        };
        let column = position.column - 1;
        (column <= line_end - start).then_some(start + column)
    }
}
