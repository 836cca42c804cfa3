//! Half-open source ranges.

use std::fmt;

/// A half-open interval `[start, end)` of offsets into the parsed text.
///
/// Offsets are measured in the [`OffsetUnit`](crate::OffsetUnit) the tree was
/// parsed with. A range is only meaningful against the exact text it was
/// produced from; after an edit the tree has to be parsed again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SourceRange {
    pub start: usize,
    pub end: usize,
}

impl SourceRange {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start <= end, "range start {start} is past its end {end}");
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Whether `start <= offset < end`.
    ///
    /// Negative offsets are never inside a range. An offset equal to `end`
    /// belongs to whatever follows the range.
    ///
    /// ```
    /// use json_cursor_ast::SourceRange;
    ///
    /// let range = SourceRange::new(2, 5);
    /// assert!(range.contains(2));
    /// assert!(range.contains(4));
    /// assert!(!range.contains(5));
    /// assert!(!range.contains(-1));
    /// ```
    pub fn contains(&self, offset: isize) -> bool {
        match usize::try_from(offset) {
            Ok(offset) => self.start <= offset && offset < self.end,
            Err(_) => false,
        }
    }

    /// Whether `offset` lies strictly before this range.
    pub fn starts_after(&self, offset: isize) -> bool {
        match usize::try_from(offset) {
            Ok(offset) => offset < self.start,
            Err(_) => true,
        }
    }

    /// Whether `other` lies entirely within this range.
    pub fn contains_range(&self, other: &SourceRange) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

impl fmt::Display for SourceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.start, self.end)
    }
}

impl From<std::ops::Range<usize>> for SourceRange {
    fn from(range: std::ops::Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}
