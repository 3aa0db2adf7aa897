//! Single-line edits.
//!
//! Every command plans an [`Edit`] from plain strings first and only then
//! applies it to a [`TextSurface`], so planning is testable on `&str` and a
//! failed plan never touches the document.

use n_editor::{Position, TextSurface};

use crate::error::FieldError;

/// Replace columns `[start, end)` of `line` with `text`, then put the cursor
/// at column `cursor` of the same line. Columns are char offsets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edit {
    pub line: usize,
    pub start: usize,
    pub end: usize,
    pub text: String,
    pub cursor: usize,
}

impl Edit {
    /// The line text after the edit.
    #[must_use]
    pub fn apply_to(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len() + self.text.len());
        out.extend(line.chars().take(self.start));
        out.push_str(&self.text);
        out.extend(line.chars().skip(self.end));
        out
    }

    /// Apply through `surface`.
    ///
    /// # Errors
    ///
    /// [`FieldError::StaleEdit`] when the surface rejects the span.
    pub fn apply(&self, surface: &mut impl TextSurface) -> Result<(), FieldError> {
        if !surface.replace_span(self.line, self.start, self.end, &self.text) {
            return Err(FieldError::StaleEdit { line: self.line });
        }
        surface.set_cursor(Position::new(self.line, self.cursor));
        Ok(())
    }
}

/// Collect the chars of `chars[start..end]`.
pub(crate) fn text_of(chars: &[char], start: usize, end: usize) -> String {
    chars[start..end].iter().collect()
}
