//! Field copying: fill the cursor's field from the line above or below.
//!
//! The donor line is classified three ways for field N (the cursor's field):
//!
//! | Donor                                    | Result                     |
//! |------------------------------------------|----------------------------|
//! | field N exists and is closed by `|`      | copy, keep the separator   |
//! | field N is the last field, non-empty     | copy                       |
//! | anything else                            | "Not enough data fields"   |
//!
//! The second row matters: a donor like `a|b|c` has no pipe after `c`, yet
//! `c` is a perfectly good third field.
//!
//! When the copied field was closed on the donor and the cursor's field runs
//! to the end of its line, a `|` is inserted after the copied text so the
//! next copy lands in the next field.

use n_editor::{Side, TextSurface};

use crate::edit::Edit;
use crate::error::FieldError;
use crate::field::{self, DELIMITER, TAG_PREFIX_LEN};

/// Field N of a donor line, as classified for copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DonorField {
    /// Followed by a `|` on the donor line.
    Terminated(String),
    /// The donor's final field, with no `|` after it.
    Unterminated(String),
}

impl DonorField {
    #[must_use]
    pub fn text(&self) -> &str {
        match self {
            Self::Terminated(text) | Self::Unterminated(text) => text,
        }
    }
}

/// Classify field `n` (1-indexed) of `donor`.
///
/// # Errors
///
/// [`FieldError::NoSyntax`] when the donor has neither a `|` nor a tag
/// prefix, [`FieldError::FieldCount`] when it has too few fields.
pub fn donor_field(donor: &str, n: usize, side: Side) -> Result<DonorField, FieldError> {
    if field::is_tag_line(donor) {
        let text: String = donor.chars().skip(TAG_PREFIX_LEN).collect();
        return if n == 1 && !text.is_empty() {
            Ok(DonorField::Unterminated(text))
        } else {
            Err(FieldError::FieldCount { side })
        };
    }

    let parts: Vec<&str> = donor.split(DELIMITER).collect();
    let delimiters = parts.len() - 1;
    if delimiters == 0 {
        return Err(FieldError::NoSyntax { side });
    }

    match n {
        0 => Err(FieldError::FieldCount { side }),
        n if n <= delimiters => Ok(DonorField::Terminated(parts[n - 1].to_string())),
        n if n == delimiters + 1 && !parts[n - 1].is_empty() => {
            Ok(DonorField::Unterminated(parts[n - 1].to_string()))
        }
        _ => Err(FieldError::FieldCount { side }),
    }
}

/// Plan a copy into `current` (line number `line`, cursor column `col`)
/// from `donor`, the line on `side`.
///
/// # Errors
///
/// [`FieldError::NoAdjacentLine`] when `donor` is `None`, otherwise as
/// [`donor_field`].
pub fn plan_copy(
    line: usize,
    current: &str,
    col: usize,
    donor: Option<&str>,
    side: Side,
) -> Result<Edit, FieldError> {
    let donor = donor.ok_or(FieldError::NoAdjacentLine { side })?;
    let span = field::locate(current, col);
    let copied = donor_field(donor, span.index, side)?;

    let at_line_end = span.end == current.chars().count();
    let mut text = copied.text().to_string();
    if matches!(copied, DonorField::Terminated(_)) && at_line_end && !field::is_tag_line(current) {
        text.push(DELIMITER);
    }

    Ok(Edit {
        line,
        start: span.start,
        end: span.end,
        cursor: span.start + text.chars().count(),
        text,
    })
}

/// Copy the cursor's field from the line on `side` into the cursor line.
///
/// # Errors
///
/// See [`plan_copy`]. The surface is untouched on error.
pub fn copy_field(surface: &mut impl TextSurface, side: Side) -> Result<Edit, FieldError> {
    let cursor = surface.cursor();
    let current = surface.current_line();
    let donor = surface.adjacent_line(side);
    let edit = plan_copy(cursor.line, &current, cursor.col, donor.as_deref(), side)?;
    edit.apply(surface)?;
    log::debug!("copied field from {side} line into {}:{}", cursor.line + 1, edit.start + 1);
    Ok(edit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use n_editor::{BufferSurface, Position};
    use pretty_assertions::assert_eq;

    const CREDIT: &str = "Ford, Harrison|Blade Runner (1982)||Rick Deckard";

    // -- Classification -----------------------------------------------------

    #[test]
    fn donor_terminated_field() {
        assert_eq!(
            donor_field("a|b|c", 2, Side::Previous),
            Ok(DonorField::Terminated("b".into()))
        );
    }

    #[test]
    fn donor_unterminated_last_field_is_valid() {
        assert_eq!(
            donor_field("a|b|c", 3, Side::Previous),
            Ok(DonorField::Unterminated("c".into()))
        );
    }

    #[test]
    fn donor_empty_last_field_is_too_few() {
        assert_eq!(
            donor_field("a|b|", 3, Side::Next),
            Err(FieldError::FieldCount { side: Side::Next })
        );
    }

    #[test]
    fn donor_too_few_fields() {
        assert_eq!(
            donor_field("a|b", 4, Side::Previous),
            Err(FieldError::FieldCount { side: Side::Previous })
        );
    }

    #[test]
    fn donor_without_pipes_has_no_syntax() {
        assert_eq!(
            donor_field("just some prose", 1, Side::Previous),
            Err(FieldError::NoSyntax { side: Side::Previous })
        );
    }

    #[test]
    fn donor_tag_line() {
        assert_eq!(
            donor_field("NM: Evans, Peter", 1, Side::Previous),
            Ok(DonorField::Unterminated("Evans, Peter".into()))
        );
        assert_eq!(
            donor_field("NM: Evans, Peter", 2, Side::Previous),
            Err(FieldError::FieldCount { side: Side::Previous })
        );
    }

    // -- Planning -----------------------------------------------------------

    #[test]
    fn copy_replaces_field_in_middle() {
        let edit = plan_copy(1, "x|old|z", 3, Some("a|new|c"), Side::Previous).unwrap();
        assert_eq!(edit.apply_to("x|old|z"), "x|new|z");
        assert_eq!(edit.cursor, 5);
    }

    #[test]
    fn copy_into_empty_field_between_pipes() {
        let edit = plan_copy(1, CREDIT, 35, Some("a|b|(uncredited)|d"), Side::Previous).unwrap();
        assert_eq!(
            edit.apply_to(CREDIT),
            "Ford, Harrison|Blade Runner (1982)|(uncredited)|Rick Deckard"
        );
    }

    #[test]
    fn terminated_copy_at_line_end_inserts_separator() {
        let edit = plan_copy(1, "Ford, Harrison|", 15, Some("Ford, Harrison|Star Wars (1977)|Han Solo"), Side::Previous)
            .unwrap();
        assert_eq!(edit.apply_to("Ford, Harrison|"), "Ford, Harrison|Star Wars (1977)|");
        assert_eq!(edit.cursor, 32);
    }

    #[test]
    fn unterminated_copy_at_line_end_adds_nothing() {
        let edit = plan_copy(1, "a|", 2, Some("x|last"), Side::Next).unwrap();
        assert_eq!(edit.apply_to("a|"), "a|last");
    }

    #[test]
    fn copy_without_adjacent_line() {
        assert_eq!(
            plan_copy(0, "a|b", 0, None, Side::Previous),
            Err(FieldError::NoAdjacentLine { side: Side::Previous })
        );
    }

    // -- Through a surface --------------------------------------------------

    #[test]
    fn copy_previous_into_fourth_field() {
        let text = format!("Ford, Harrison|Blade Runner (1982)|(uncredited)|Deckard\n{CREDIT}\n");
        let mut s = BufferSurface::from_text(&text, Position::new(1, 40));

        let edit = copy_field(&mut s, Side::Previous).unwrap();

        assert_eq!(s.current_line(), "Ford, Harrison|Blade Runner (1982)||Deckard");
        assert_eq!(edit.cursor, 43);
        assert_eq!(s.cursor(), Position::new(1, 43));
    }

    #[test]
    fn copy_from_short_donor_leaves_buffer_unchanged() {
        let text = format!("Ford, Harrison|Witness (1985)\n{CREDIT}");
        let mut s = BufferSurface::from_text(&text, Position::new(1, 40));

        assert_eq!(
            copy_field(&mut s, Side::Previous),
            Err(FieldError::FieldCount { side: Side::Previous })
        );
        assert_eq!(s.buffer().contents(), text);
        assert!(!s.buffer().is_modified());
    }

    #[test]
    fn copy_next() {
        let mut s = BufferSurface::from_text("a||c\nx|y|z", Position::new(0, 2));
        copy_field(&mut s, Side::Next).unwrap();
        assert_eq!(s.current_line(), "a|y|c");
    }

    #[test]
    fn copy_leaves_at_least_n_fields_with_donor_text() {
        let donor = "p|q|r|s|t";
        for n in 1..=4 {
            let recipient = "|".repeat(n - 1);
            let col = recipient.len();
            let edit = plan_copy(1, &recipient, col, Some(donor), Side::Previous).unwrap();
            let after = edit.apply_to(&recipient);
            assert!(field::field_count(&after) >= n);
            assert_eq!(field::fields(&after)[n - 1].text(&after), donor.split('|').nth(n - 1).unwrap());
        }
    }
}
