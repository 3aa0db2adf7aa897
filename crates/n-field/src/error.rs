//! Why a field command refused to edit.
//!
//! The `Display` text of each variant is the status message shown to the
//! user. Every failure leaves the document exactly as it was.

use n_editor::Side;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    /// The cursor is on the first (or last) line.
    #[error("No {side} line.")]
    NoAdjacentLine { side: Side },

    /// The donor line has no `|` and no tag prefix.
    #[error("No valid syntax found on {side} line.")]
    NoSyntax { side: Side },

    /// The donor line has too few fields for the cursor's field.
    #[error("Not enough data fields on {side} line.")]
    FieldCount { side: Side },

    #[error("Name already has a comma")]
    AlreadyPunctuated,

    #[error("Name has not enough parts")]
    InsufficientTokens,

    /// Incrementing past the last numeral.
    #[error("End of numeral range")]
    RangeExhausted,

    /// Decrementing a name that has no numeral.
    #[error("Nothing to do")]
    NothingToDo,

    #[error("No text at cursor")]
    EmptyField,

    #[error("Already linked")]
    AlreadyLinked,

    /// The surface rejected the span, e.g. the line changed after planning.
    #[error("Edit does not fit line {}", .line + 1)]
    StaleEdit { line: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_side() {
        assert_eq!(
            FieldError::FieldCount { side: Side::Previous }.to_string(),
            "Not enough data fields on previous line."
        );
        assert_eq!(
            FieldError::NoSyntax { side: Side::Next }.to_string(),
            "No valid syntax found on next line."
        );
    }

    #[test]
    fn stale_edit_line_is_one_based() {
        assert_eq!(FieldError::StaleEdit { line: 0 }.to_string(), "Edit does not fit line 1");
    }
}
