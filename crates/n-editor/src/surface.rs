//! Text surfaces: the capability a command needs from its host.
//!
//! Field commands never touch a concrete editor. They read the cursor line
//! and its neighbours, replace a span on one line, and move the cursor, all
//! through [`TextSurface`]. [`BufferSurface`] implements it over a
//! [`Buffer`]; an interactive host would implement it over its own window.

use std::fmt;

use crate::buffer::Buffer;
use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Side
// ---------------------------------------------------------------------------

/// Which neighbour of the cursor line to read.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Side {
    Previous,
    Next,
}

impl Side {
    /// The neighbouring line number, or `None` when it would fall before
    /// line 0. Falling past the end is the surface's call.
    #[must_use]
    pub const fn of(self, line: usize) -> Option<usize> {
        match self {
            Self::Previous => line.checked_sub(1),
            Self::Next => line.checked_add(1),
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Previous => "previous",
            Self::Next => "next",
        })
    }
}

// ---------------------------------------------------------------------------
// TextSurface
// ---------------------------------------------------------------------------

/// Line-oriented access to an editable document with a single cursor.
pub trait TextSurface {
    fn cursor(&self) -> Position;

    fn set_cursor(&mut self, pos: Position);

    fn line_count(&self) -> usize;

    /// Text of `line` without its line ending.
    fn line_text(&self, line: usize) -> Option<String>;

    /// Replace columns `[start, end)` of `line` with `text`. Returns `false`
    /// when the span is out of bounds; the document is then unchanged.
    fn replace_span(&mut self, line: usize, start: usize, end: usize, text: &str) -> bool;

    /// Text of the cursor line.
    fn current_line(&self) -> String {
        self.line_text(self.cursor().line).unwrap_or_default()
    }

    /// Text of the line before or after the cursor line.
    fn adjacent_line(&self, side: Side) -> Option<String> {
        side.of(self.cursor().line)
            .filter(|&line| line < self.line_count())
            .and_then(|line| self.line_text(line))
    }
}

// ---------------------------------------------------------------------------
// BufferSurface
// ---------------------------------------------------------------------------

/// A [`Buffer`] plus a cursor.
#[derive(Debug, Default)]
pub struct BufferSurface {
    buffer: Buffer,
    cursor: Position,
}

impl BufferSurface {
    /// Wrap `buffer` with the cursor at `cursor`, clamped into the text.
    #[must_use]
    pub fn new(buffer: Buffer, cursor: Position) -> Self {
        let cursor = buffer.clamp_position(cursor);
        Self { buffer, cursor }
    }

    /// Shorthand used heavily by tests: a surface over literal text.
    #[must_use]
    pub fn from_text(text: &str, cursor: Position) -> Self {
        Self::new(Buffer::from_text(text), cursor)
    }

    #[inline]
    #[must_use]
    pub const fn buffer(&self) -> &Buffer {
        &self.buffer
    }

    #[must_use]
    pub fn into_buffer(self) -> Buffer {
        self.buffer
    }
}

impl TextSurface for BufferSurface {
    fn cursor(&self) -> Position {
        self.cursor
    }

    fn set_cursor(&mut self, pos: Position) {
        self.cursor = self.buffer.clamp_position(pos);
    }

    fn line_count(&self) -> usize {
        self.buffer.line_count()
    }

    fn line_text(&self, line: usize) -> Option<String> {
        self.buffer.line_text(line)
    }

    fn replace_span(&mut self, line: usize, start: usize, end: usize, text: &str) -> bool {
        if start > end {
            return false;
        }
        self.buffer.replace(Range::on_line(line, start, end), text)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
