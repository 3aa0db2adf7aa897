//! Text position and range types.
//!
//! All coordinates are **0-indexed** and columns count Unicode scalar values
//! (chars), which is also how `ropey` indexes text. The CLI speaks 1-indexed
//! line/column pairs; conversion happens at that boundary, never here.

use std::fmt;

// ---------------------------------------------------------------------------
// Position
// ---------------------------------------------------------------------------

/// A position in a text buffer: (line, column), both 0-indexed.
///
/// `col` is a char offset from the start of the line. Column
/// `line_content_len` is valid and means "after the last character".
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub line: usize,
    pub col: usize,
}

impl Position {
    /// Line 0, column 0.
    pub const ZERO: Self = Self { line: 0, col: 0 };

    #[inline]
    #[must_use]
    pub const fn new(line: usize, col: usize) -> Self {
        Self { line, col }
    }

    /// Build a position from the 1-indexed pair a user typed. Zero is
    /// treated as one.
    #[inline]
    #[must_use]
    pub const fn from_one_based(line: usize, col: usize) -> Self {
        Self {
            line: line.saturating_sub(1),
            col: col.saturating_sub(1),
        }
    }
}

impl Ord for Position {
    #[inline]
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.line.cmp(&other.line).then(self.col.cmp(&other.col))
    }
}

impl PartialOrd for Position {
    #[inline]
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pos({}:{})", self.line, self.col)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 1-indexed for humans.
        write!(f, "{}:{}", self.line + 1, self.col + 1)
    }
}

// ---------------------------------------------------------------------------
// Range
// ---------------------------------------------------------------------------

/// A half-open range `[start, end)` in a text buffer.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    pub start: Position,
    pub end: Position,
}

impl Range {
    /// Create a range. Panics in debug if `start > end`.
    #[inline]
    #[must_use]
    pub fn new(start: Position, end: Position) -> Self {
        debug_assert!(start <= end, "Range::new requires start <= end");
        Self { start, end }
    }

    /// A range covering columns `[start, end)` of a single line.
    #[inline]
    #[must_use]
    pub fn on_line(line: usize, start: usize, end: usize) -> Self {
        Self::new(Position::new(line, start), Position::new(line, end))
    }

    /// A zero-width range at `pos`.
    #[inline]
    #[must_use]
    pub const fn point(pos: Position) -> Self {
        Self {
            start: pos,
            end: pos,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.start.line == self.end.line && self.start.col == self.end.col
    }
}

impl fmt::Debug for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Range({}:{} .. {}:{})",
            self.start.line, self.start.col, self.end.line, self.end.col
        )
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn position_ordering_line_first() {
        assert!(Position::new(0, 100) < Position::new(1, 0));
        assert!(Position::new(2, 3) < Position::new(2, 7));
        assert_eq!(Position::new(3, 3), Position::new(3, 3));
    }

    #[test]
    fn position_from_one_based() {
        assert_eq!(Position::from_one_based(1, 1), Position::ZERO);
        assert_eq!(Position::from_one_based(4, 12), Position::new(3, 11));
        assert_eq!(Position::from_one_based(0, 0), Position::ZERO);
    }

    #[test]
    fn position_display_is_one_based() {
        assert_eq!(Position::new(2, 5).to_string(), "3:6");
        assert_eq!(format!("{:?}", Position::new(2, 5)), "Pos(2:5)");
    }

    #[test]
    fn range_on_line() {
        let r = Range::on_line(4, 2, 9);
        assert!(!r.is_empty());
        assert_eq!(r.start, Position::new(4, 2));
        assert_eq!(r.end, Position::new(4, 9));
    }

    #[test]
    fn range_point_is_empty() {
        assert!(Range::point(Position::new(1, 1)).is_empty());
    }

    #[test]
    fn range_display() {
        assert_eq!(Range::on_line(0, 0, 4).to_string(), "1:1-1:5");
    }
}
