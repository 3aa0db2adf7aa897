//! Name swapping: `Philip Seymour Hoffman` to `Seymour Hoffman, Philip`.
//!
//! Credits list people surname first. The swapper takes the first `given`
//! words of the name under the cursor as given names and moves them behind a
//! comma. A trailing numeral suffix stays where it is:
//! `Peter Evans (II)` becomes `Evans, Peter (II)`.
//!
//! The comma is also the guard: a name that already has one is refused, so
//! running the command twice cannot scramble a name.

use n_editor::TextSurface;

use crate::edit::Edit;
use crate::error::FieldError;
use crate::field;
use crate::numeral;

/// Rewrite `name` as `"<rest>, <first given words>"`.
///
/// # Errors
///
/// [`FieldError::AlreadyPunctuated`] if `name` contains a comma,
/// [`FieldError::InsufficientTokens`] unless there are more than `given`
/// words (excluding a numeral suffix) and `given` is at least one.
pub fn swap(name: &str, given: usize) -> Result<String, FieldError> {
    if name.contains(',') {
        return Err(FieldError::AlreadyPunctuated);
    }

    let (base_len, _) = numeral::split_suffix(name);
    let base: String = name.chars().take(base_len).collect();
    let suffix: String = name.chars().skip(base_len).collect();

    let words: Vec<&str> = base.split(' ').filter(|w| !w.is_empty()).collect();
    if given == 0 || words.len() <= given {
        return Err(FieldError::InsufficientTokens);
    }

    let (head, tail) = words.split_at(given);
    Ok(format!("{}, {}{suffix}", tail.join(" "), head.join(" ")))
}

/// Plan a swap of the name under column `col` of `text`.
///
/// # Errors
///
/// [`FieldError::EmptyField`] when there is no name at the cursor, otherwise
/// as [`swap`].
pub fn plan_swap(line: usize, text: &str, col: usize, given: usize) -> Result<Edit, FieldError> {
    let (start, end) = field::locate_name(text, col);
    if start == end {
        return Err(FieldError::EmptyField);
    }
    let name: String = text.chars().skip(start).take(end - start).collect();
    let swapped = swap(&name, given)?;
    Ok(Edit {
        line,
        start,
        end,
        cursor: start + swapped.chars().count(),
        text: swapped,
    })
}

/// Swap the name under the cursor into `Surname, Given` order.
///
/// # Errors
///
/// See [`plan_swap`]. The surface is untouched on error.
pub fn swap_name(surface: &mut impl TextSurface, given: usize) -> Result<Edit, FieldError> {
    let cursor = surface.cursor();
    let edit = plan_swap(cursor.line, &surface.current_line(), cursor.col, given)?;
    edit.apply(surface)?;
    log::debug!("swapped name on line {} ({given} given)", cursor.line + 1);
    Ok(edit)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
