//! Roman numeral suffixes: `Evans, Peter (III)` and friends.
//!
//! Names that would otherwise collide are told apart by a parenthesized
//! numeral after the name. The counter walks a name through the states
//! `absent, I, II, ..., L`:
//!
//! ```text
//!           +1          +1          +1              +1
//!   absent ────▶ (I) ────▶ (II) ────▶ ... ────▶ (L) ────▶ "End of numeral range"
//!          ◀──── remove  ◀────        ◀────
//!           −1          −1          −1
//!   absent ──−1──▶ "Nothing to do"
//! ```
//!
//! A parenthesized token that is not in the table (`(IIII)`, `(LI)`) is not a
//! suffix at all.

use std::sync::LazyLock;

use n_editor::TextSurface;
use regex::Regex;

use crate::edit::Edit;
use crate::error::FieldError;
use crate::field;

/// Highest supported suffix value.
pub const MAX: u8 = 50;

const NUMERALS: [&str; MAX as usize] = [
    "I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X", //
    "XI", "XII", "XIII", "XIV", "XV", "XVI", "XVII", "XVIII", "XIX", "XX", //
    "XXI", "XXII", "XXIII", "XXIV", "XXV", "XXVI", "XXVII", "XXVIII", "XXIX", "XXX", //
    "XXXI", "XXXII", "XXXIII", "XXXIV", "XXXV", "XXXVI", "XXXVII", "XXXVIII", "XXXIX", "XL", //
    "XLI", "XLII", "XLIII", "XLIV", "XLV", "XLVI", "XLVII", "XLVIII", "XLIX", "L",
];

// An optional numeral, then an optional link marker, at the end of a name.
static SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?: \(([IVXL]+)\))?( \(qv\))?$").unwrap());

/// Canonical numeral for `value`, or `None` outside `1..=50`.
#[must_use]
pub fn to_roman(value: u8) -> Option<&'static str> {
    value.checked_sub(1).and_then(|i| NUMERALS.get(usize::from(i)).copied())
}

/// Value of a canonical numeral.
#[must_use]
pub fn from_roman(numeral: &str) -> Option<u8> {
    NUMERALS
        .iter()
        .position(|&n| n == numeral)
        .and_then(|i| u8::try_from(i + 1).ok())
}

/// The suffix text for `value`, including its separating space.
#[must_use]
pub fn suffix(value: u8) -> Option<String> {
    to_roman(value).map(|n| format!(" ({n})"))
}

/// Split a name into its base and the value of a trailing suffix.
///
/// Returns the base length in chars and the suffix value, if any. The
/// suffix may be followed by a `(qv)` link marker; everything from the base
/// length on is suffix or marker.
#[must_use]
pub fn split_suffix(name: &str) -> (usize, Option<u8>) {
    let chars_before = |byte: usize| name[..byte].chars().count();
    let Some(caps) = SUFFIX.captures(name) else {
        return (name.chars().count(), None);
    };
    let marker_start = caps.get(2).map_or(name.len(), |m| m.start());
    match (caps.get(0), caps.get(1).and_then(|m| from_roman(m.as_str()))) {
        (Some(whole), Some(value)) => (chars_before(whole.start()), Some(value)),
        _ => (chars_before(marker_start), None),
    }
}

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

/// Direction of a numeral adjustment.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Step {
    Up,
    Down,
}

/// Next suffix state. `None` is "no suffix".
///
/// # Errors
///
/// [`FieldError::RangeExhausted`] going up from the last numeral,
/// [`FieldError::NothingToDo`] going down from no suffix.
pub fn step(current: Option<u8>, step: Step) -> Result<Option<u8>, FieldError> {
    match (current, step) {
        (None, Step::Up) => Ok(Some(1)),
        (None, Step::Down) => Err(FieldError::NothingToDo),
        (Some(v), Step::Up) if v >= MAX => Err(FieldError::RangeExhausted),
        (Some(v), Step::Up) => Ok(Some(v + 1)),
        (Some(v), Step::Down) => Ok(v.checked_sub(1).filter(|&v| v > 0)),
    }
}

// ---------------------------------------------------------------------------
// Commands
// ---------------------------------------------------------------------------

/// Plan a numeral adjustment for the name under column `col` of `text`.
///
/// # Errors
///
/// [`FieldError::EmptyField`] when there is no name at the cursor, otherwise
/// as [`step`].
pub fn plan_numeral(line: usize, text: &str, col: usize, direction: Step) -> Result<Edit, FieldError> {
    let (start, end) = field::locate_name(text, col);
    if start == end {
        return Err(FieldError::EmptyField);
    }
    let name: String = text.chars().skip(start).take(end - start).collect();
    let (base_len, current) = split_suffix(&name);
    let next = step(current, direction)?;

    let existing = current.and_then(suffix).map_or(0, |s| s.chars().count());
    let replacement = next.and_then(suffix).unwrap_or_default();
    let at = start + base_len;
    Ok(Edit {
        line,
        start: at,
        end: at + existing,
        cursor: at + replacement.chars().count(),
        text: replacement,
    })
}

/// Step the numeral suffix of the name under the cursor.
///
/// # Errors
///
/// See [`plan_numeral`]. The surface is untouched on error.
pub fn adjust_numeral(surface: &mut impl TextSurface, direction: Step) -> Result<Edit, FieldError> {
    let cursor = surface.cursor();
    let edit = plan_numeral(cursor.line, &surface.current_line(), cursor.col, direction)?;
    edit.apply(surface)?;
    log::debug!("numeral {direction:?} on line {}", cursor.line + 1);
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

    fn run(text: &str, direction: Step) -> Result<String, FieldError> {
        plan_numeral(0, text, 0, direction).map(|e| e.apply_to(text))
    }

    // -- Table --------------------------------------------------------------

    #[test]
    fn table_bounds() {
        assert_eq!(to_roman(0), None);
        assert_eq!(to_roman(1), Some("I"));
        assert_eq!(to_roman(4), Some("IV"));
        assert_eq!(to_roman(49), Some("XLIX"));
        assert_eq!(to_roman(50), Some("L"));
        assert_eq!(to_roman(51), None);
    }

    #[test]
    fn table_round_trips() {
        for v in 1..=MAX {
            assert_eq!(to_roman(v).and_then(from_roman), Some(v));
        }
        assert_eq!(from_roman("IIII"), None);
    }

    #[test]
    fn split_suffix_cases() {
        assert_eq!(split_suffix("Evans, Peter (III)"), (12, Some(3)));
        assert_eq!(split_suffix("Evans, Peter"), (12, None));
        assert_eq!(split_suffix("Evans, Peter (LI)"), (17, None));
        assert_eq!(split_suffix("Blade Runner (1982)"), (19, None));
    }

    #[test]
    fn split_suffix_before_link_marker() {
        assert_eq!(split_suffix("Ford, Harrison (II) (qv)"), (14, Some(2)));
        assert_eq!(split_suffix("Ford, Harrison (qv)"), (14, None));
        assert_eq!(split_suffix("Evans, Peter (LI) (qv)"), (17, None));
    }

    // -- State machine ------------------------------------------------------

    #[test]
    fn step_transitions() {
        assert_eq!(step(None, Step::Up), Ok(Some(1)));
        assert_eq!(step(None, Step::Down), Err(FieldError::NothingToDo));
        assert_eq!(step(Some(1), Step::Down), Ok(None));
        assert_eq!(step(Some(7), Step::Up), Ok(Some(8)));
        assert_eq!(step(Some(7), Step::Down), Ok(Some(6)));
        assert_eq!(step(Some(MAX), Step::Up), Err(FieldError::RangeExhausted));
        assert_eq!(step(Some(MAX), Step::Down), Ok(Some(49)));
    }

    // -- Commands -----------------------------------------------------------

    #[test]
    fn increment_existing() {
        assert_eq!(run("Evans, Peter (III)", Step::Up).unwrap(), "Evans, Peter (IV)");
    }

    #[test]
    fn decrement_twice() {
        let once = run("Evans, Peter (IV)", Step::Down).unwrap();
        assert_eq!(run(&once, Step::Down).unwrap(), "Evans, Peter (II)");
    }

    #[test]
    fn absent_suffix() {
        assert_eq!(run("Evans, Peter", Step::Down), Err(FieldError::NothingToDo));
        assert_eq!(run("Evans, Peter", Step::Up).unwrap(), "Evans, Peter (I)");
    }

    #[test]
    fn decrement_from_one_removes_suffix() {
        let removed = run("Evans, Peter (I)", Step::Down).unwrap();
        assert_eq!(removed, "Evans, Peter");
        assert_eq!(run(&removed, Step::Down), Err(FieldError::NothingToDo));
    }

    #[test]
    fn increment_at_end_of_range() {
        assert_eq!(run("Evans, Peter (L)", Step::Up), Err(FieldError::RangeExhausted));
    }

    #[test]
    fn up_then_down_restores() {
        for v in 1..MAX {
            let name = format!("Evans, Peter ({})", to_roman(v).unwrap());
            let up = run(&name, Step::Up).unwrap();
            assert_eq!(run(&up, Step::Down).unwrap(), name);
        }
    }

    #[test]
    fn only_the_field_under_cursor_changes() {
        let line = "Evans, Peter (II)|Some Film (1999)|Role";
        let edit = plan_numeral(0, line, 3, Step::Up).unwrap();
        assert_eq!(edit.apply_to(line), "Evans, Peter (III)|Some Film (1999)|Role");
    }

    #[test]
    fn linked_name_keeps_marker_last() {
        let line = "NM: Ford, Harrison (II) (qv)";
        assert_eq!(
            plan_numeral(0, line, 0, Step::Up).unwrap().apply_to(line),
            "NM: Ford, Harrison (III) (qv)"
        );
        assert_eq!(
            plan_numeral(0, line, 0, Step::Down).unwrap().apply_to(line),
            "NM: Ford, Harrison (I) (qv)"
        );
    }

    #[test]
    fn linked_name_without_suffix() {
        assert_eq!(run("Ford, Harrison (qv)", Step::Up).unwrap(), "Ford, Harrison (I) (qv)");
        assert_eq!(run("Ford, Harrison (qv)", Step::Down), Err(FieldError::NothingToDo));
        assert_eq!(run("Ford, Harrison (I) (qv)", Step::Down).unwrap(), "Ford, Harrison (qv)");
    }

    #[test]
    fn tag_line_name() {
        let line = "NM: Evans, Peter";
        let edit = plan_numeral(0, line, 0, Step::Up).unwrap();
        assert_eq!(edit.apply_to(line), "NM: Evans, Peter (I)");
    }

    #[test]
    fn empty_field_is_rejected() {
        assert_eq!(plan_numeral(0, "a||b", 2, Step::Up), Err(FieldError::EmptyField));
    }

    #[test]
    fn adjust_through_surface() {
        let mut s = BufferSurface::from_text("x\nEvans, Peter (III)\n", Position::new(1, 2));
        adjust_numeral(&mut s, Step::Up).unwrap();
        assert_eq!(s.current_line(), "Evans, Peter (IV)");
        assert_eq!(s.cursor(), Position::new(1, 17));
    }
}
