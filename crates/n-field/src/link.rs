//! Cross-reference markup.
//!
//! Free-text records link people and titles with a trailing `(qv)`:
//! `Harrison Ford (qv)` for a name, `_Blade Runner (1982)_ (qv)` for a
//! title. The command marks up the field under the cursor.

use n_editor::TextSurface;

use crate::edit::Edit;
use crate::error::FieldError;
use crate::field;

const MARKER: &str = "(qv)";

/// What the linked text refers to.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub enum LinkKind {
    #[default]
    Name,
    Title,
}

/// Mark up `text` as a link of `kind`.
///
/// # Errors
///
/// [`FieldError::EmptyField`] for blank text, [`FieldError::AlreadyLinked`]
/// when `text` already ends with `(qv)`.
pub fn link(text: &str, kind: LinkKind) -> Result<String, FieldError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(FieldError::EmptyField);
    }
    if text.ends_with(MARKER) {
        return Err(FieldError::AlreadyLinked);
    }
    Ok(match kind {
        LinkKind::Name => format!("{text} {MARKER}"),
        LinkKind::Title => format!("_{text}_ {MARKER}"),
    })
}

/// Plan linking the field under column `col` of `text`. Spaces around the
/// field are kept.
///
/// # Errors
///
/// As [`link`].
pub fn plan_link(line: usize, text: &str, col: usize, kind: LinkKind) -> Result<Edit, FieldError> {
    let span = field::locate(text, col);
    let chars: Vec<char> = text.chars().collect();
    let mut start = span.start;
    let mut end = span.end;
    while start < end && chars[start] == ' ' {
        start += 1;
    }
    while end > start && chars[end - 1] == ' ' {
        end -= 1;
    }

    let linked = link(&crate::edit::text_of(&chars, start, end), kind)?;
    Ok(Edit {
        line,
        start,
        end,
        cursor: start + linked.chars().count(),
        text: linked,
    })
}

/// Link the field under the cursor.
///
/// # Errors
///
/// See [`plan_link`]. The surface is untouched on error.
pub fn link_field(surface: &mut impl TextSurface, kind: LinkKind) -> Result<Edit, FieldError> {
    let cursor = surface.cursor();
    let edit = plan_link(cursor.line, &surface.current_line(), cursor.col, kind)?;
    edit.apply(surface)?;
    log::debug!("linked {kind:?} on line {}", cursor.line + 1);
    Ok(edit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use n_editor::{BufferSurface, Position};
    use pretty_assertions::assert_eq;

    #[test]
    fn link_name_and_title() {
        assert_eq!(link("Harrison Ford", LinkKind::Name).unwrap(), "Harrison Ford (qv)");
        assert_eq!(
            link("Blade Runner (1982)", LinkKind::Title).unwrap(),
            "_Blade Runner (1982)_ (qv)"
        );
    }

    #[test]
    fn link_refuses_twice() {
        assert_eq!(link("Harrison Ford (qv)", LinkKind::Name), Err(FieldError::AlreadyLinked));
        assert_eq!(link("  ", LinkKind::Title), Err(FieldError::EmptyField));
    }

    #[test]
    fn empty_field_message() {
        let err = plan_link(0, "a||b", 2, LinkKind::Name).unwrap_err();
        assert_eq!(err, FieldError::EmptyField);
        assert_eq!(err.to_string(), "No text at cursor");
    }

    #[test]
    fn title_with_colon_stays_whole() {
        let line = "TR: Star Wars: Episode IV - A New Hope (1977)";
        let edit = plan_link(0, line, 10, LinkKind::Title).unwrap();
        assert_eq!(edit.apply_to(line), "TR: _Star Wars: Episode IV - A New Hope (1977)_ (qv)");
    }

    #[test]
    fn link_keeps_padding() {
        let line = "a| Ridley Scott |b";
        let edit = plan_link(0, line, 6, LinkKind::Name).unwrap();
        assert_eq!(edit.apply_to(line), "a| Ridley Scott (qv) |b");
    }

    #[test]
    fn link_through_surface() {
        let mut s = BufferSurface::from_text("Harrison Ford", Position::new(0, 3));
        link_field(&mut s, LinkKind::Name).unwrap();
        assert_eq!(s.current_line(), "Harrison Ford (qv)");
        assert_eq!(s.cursor(), Position::new(0, 18));
    }
}
