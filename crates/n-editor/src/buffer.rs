//! Text buffer: the document a command edits.
//!
//! A `Buffer` wraps a [`ropey::Rope`] with the handful of operations the
//! field commands need: line access without line endings, single-range
//! replacement, and file I/O that preserves the file's line-ending style.
//!
//! - **Columns are char offsets**, not byte offsets. Byte offsets never leak
//!   into the public API.
//! - **Line endings are kept as loaded.** Saving writes the rope back
//!   verbatim, so a `CRLF` (or mixed) file keeps every break it had. Line
//!   breaks in inserted text take the style of the file's first break.

use std::borrow::Cow;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ropey::{Rope, RopeSlice};

use crate::position::{Position, Range};

// ---------------------------------------------------------------------------
// Line ending detection
// ---------------------------------------------------------------------------

/// Line ending style of a file, decided by its first line break.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEnding {
    /// `\n`
    #[default]
    Lf,
    /// `\r\n`
    CrLf,
    /// `\r`
    Cr,
}

impl LineEnding {
    #[inline]
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
        }
    }

    /// Detect the line ending of `text` from its first line break. Text
    /// without any break is `Lf`.
    #[must_use]
    pub fn detect(text: &str) -> Self {
        let bytes = text.as_bytes();
        match bytes.iter().position(|&b| b == b'\n' || b == b'\r') {
            Some(i) if bytes[i] == b'\r' => {
                if bytes.get(i + 1) == Some(&b'\n') {
                    Self::CrLf
                } else {
                    Self::Cr
                }
            }
            _ => Self::Lf,
        }
    }

    /// Rewrite every line break in `text` to this style.
    #[must_use]
    pub fn normalize(self, text: &str) -> Cow<'_, str> {
        if !text.contains(['\r', '\n']) {
            return Cow::Borrowed(text);
        }
        let mut out = String::with_capacity(text.len());
        let mut chars = text.chars().peekable();
        while let Some(ch) = chars.next() {
            match ch {
                '\r' => {
                    if chars.peek() == Some(&'\n') {
                        chars.next();
                    }
                    out.push_str(self.as_str());
                }
                '\n' => out.push_str(self.as_str()),
                _ => out.push(ch),
            }
        }
        Cow::Owned(out)
    }
}

impl fmt::Display for LineEnding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Lf => f.write_str("LF"),
            Self::CrLf => f.write_str("CRLF"),
            Self::Cr => f.write_str("CR"),
        }
    }
}

// ---------------------------------------------------------------------------
// Buffer
// ---------------------------------------------------------------------------

/// A text buffer backed by a rope.
///
/// Tracks the text, the file it came from (if any), whether it was modified
/// since load or last save, and the line-ending style used on save.
pub struct Buffer {
    rope: Rope,
    path: Option<PathBuf>,
    modified: bool,
    line_ending: LineEnding,
}

impl Buffer {
    // -- Construction -------------------------------------------------------

    #[must_use]
    pub fn new() -> Self {
        Self::from_text("")
    }

    /// Create an unmodified buffer from a string.
    #[must_use]
    pub fn from_text(text: &str) -> Self {
        Self {
            line_ending: LineEnding::detect(text),
            rope: Rope::from_str(text),
            path: None,
            modified: false,
        }
    }

    /// Load a buffer from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid UTF-8.
    pub fn from_file(path: &Path) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        let mut buf = Self::from_text(&text);
        buf.path = Some(path.to_path_buf());
        Ok(buf)
    }

    // -- Text access --------------------------------------------------------

    #[inline]
    #[must_use]
    pub const fn rope(&self) -> &Rope {
        &self.rope
    }

    /// Number of lines. A buffer ending in a line break has a trailing empty
    /// line, matching how editors display files.
    #[inline]
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.rope.len_lines()
    }

    #[inline]
    #[must_use]
    pub fn len_chars(&self) -> usize {
        self.rope.len_chars()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rope.len_chars() == 0
    }

    /// A line including its trailing line ending.
    #[inline]
    #[must_use]
    pub fn line(&self, line: usize) -> Option<RopeSlice<'_>> {
        (line < self.rope.len_lines()).then(|| self.rope.line(line))
    }

    /// Number of chars in a line, excluding the line ending.
    #[must_use]
    pub fn line_content_len(&self, line: usize) -> Option<usize> {
        self.line(line).map(|slice| {
            let total = slice.len_chars();
            match (total.checked_sub(2).map(|i| slice.char(i)), total.checked_sub(1).map(|i| slice.char(i))) {
                (Some('\r'), Some('\n')) => total - 2,
                (_, Some('\n' | '\r')) => total - 1,
                _ => total,
            }
        })
    }

    /// The text of a line without its line ending.
    #[must_use]
    pub fn line_text(&self, line: usize) -> Option<String> {
        let len = self.line_content_len(line)?;
        self.line(line).map(|slice| slice.slice(..len).to_string())
    }

    /// All text as a `String`.
    #[must_use]
    pub fn contents(&self) -> String {
        self.rope.to_string()
    }

    // -- Coordinate conversion ----------------------------------------------

    /// Convert a `Position` to an absolute char index. The column may equal
    /// the line's content length (end of line) but may not reach into the
    /// line ending.
    #[must_use]
    pub fn pos_to_char_idx(&self, pos: Position) -> Option<usize> {
        let len = self.line_content_len(pos.line)?;
        (pos.col <= len).then(|| self.rope.line_to_char(pos.line) + pos.col)
    }

    /// True when `pos` addresses a char of the text or the end of its line.
    #[inline]
    #[must_use]
    pub fn contains(&self, pos: Position) -> bool {
        self.pos_to_char_idx(pos).is_some()
    }

    /// Clamp a position to the nearest valid one.
    #[must_use]
    pub fn clamp_position(&self, pos: Position) -> Position {
        let line = pos.line.min(self.line_count().saturating_sub(1));
        let col = pos.col.min(self.line_content_len(line).unwrap_or(0));
        Position::new(line, col)
    }

    // -- Editing ------------------------------------------------------------

    /// Replace the text in `range` with `text`.
    ///
    /// Returns `false` and leaves the buffer untouched if either endpoint is
    /// out of bounds.
    pub fn replace(&mut self, range: Range, text: &str) -> bool {
        let (Some(start), Some(end)) = (
            self.pos_to_char_idx(range.start),
            self.pos_to_char_idx(range.end),
        ) else {
            return false;
        };
        if start == end && text.is_empty() {
            return true;
        }
        self.rope.remove(start..end);
        self.rope.insert(start, &self.line_ending.normalize(text));
        self.modified = true;
        true
    }

    /// Insert `text` at `pos`. Returns `false` if `pos` is out of bounds.
    pub fn insert(&mut self, pos: Position, text: &str) -> bool {
        self.replace(Range::point(pos), text)
    }

    // -- Metadata -----------------------------------------------------------

    #[inline]
    #[must_use]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    #[inline]
    #[must_use]
    pub const fn is_modified(&self) -> bool {
        self.modified
    }

    #[inline]
    #[must_use]
    pub const fn line_ending(&self) -> LineEnding {
        self.line_ending
    }

    // -- File I/O -----------------------------------------------------------

    /// Save to the path the buffer was loaded from.
    ///
    /// # Errors
    ///
    /// Returns an error if no path is set or the write fails.
    pub fn save(&mut self) -> io::Result<()> {
        let path = self
            .path
            .clone()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "buffer has no file path"))?;
        self.save_as(&path)
    }

    /// Save to `path`. The text is written exactly as held.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub fn save_as(&mut self, path: &Path) -> io::Result<()> {
        let mut file = io::BufWriter::new(fs::File::create(path)?);
        self.rope.write_to(&mut file)?;
        io::Write::flush(&mut file)?;
        self.path = Some(path.to_path_buf());
        self.modified = false;
        Ok(())
    }
}

impl Default for Buffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Buffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Buffer")
            .field("lines", &self.line_count())
            .field("chars", &self.len_chars())
            .field("modified", &self.modified)
            .field("line_ending", &self.line_ending)
            .field("path", &self.path)
            .finish_non_exhaustive()
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
