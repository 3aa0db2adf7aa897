//! Field commands as values.
//!
//! A host binds keys or menu entries to [`FieldCommand`]s and runs them with
//! [`execute`]. Failures never escape as errors: they come back as a
//! [`CommandResult::Err`] carrying the status-line message, and the surface
//! is left untouched.

use n_editor::{Side, TextSurface};

use crate::copy::copy_field;
use crate::edit::Edit;
use crate::error::FieldError;
use crate::link::{LinkKind, link_field};
use crate::name::swap_name;
use crate::numeral::{Step, adjust_numeral};

/// One field-level edit the user can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldCommand {
    /// Copy the cursor's field from the neighbouring line.
    CopyField(Side),
    /// Swap the name under the cursor; the count is the number of given names.
    SwapName(usize),
    /// Step the numeral suffix of the name under the cursor.
    Numeral(Step),
    /// Add `(qv)` markup to the field under the cursor.
    Link(LinkKind),
}

impl FieldCommand {
    /// Short name for logs and status messages.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::CopyField(Side::Previous) => "copy-previous",
            Self::CopyField(Side::Next) => "copy-next",
            Self::SwapName(_) => "swap-name",
            Self::Numeral(Step::Up) => "numeral-up",
            Self::Numeral(Step::Down) => "numeral-down",
            Self::Link(LinkKind::Name) => "link-name",
            Self::Link(LinkKind::Title) => "link-title",
        }
    }

    /// Status message for a successful edit, when the edit is not obvious
    /// from the text alone.
    fn status(self, edit: &Edit) -> Option<String> {
        match self {
            Self::Numeral(Step::Down) if edit.text.is_empty() => Some("Numeral removed".to_string()),
            _ => None,
        }
    }

    /// Run against `surface`, returning the applied edit.
    ///
    /// # Errors
    ///
    /// Whatever the underlying operation reports.
    pub fn apply(self, surface: &mut impl TextSurface) -> Result<Edit, FieldError> {
        match self {
            Self::CopyField(side) => copy_field(surface, side),
            Self::SwapName(given) => swap_name(surface, given),
            Self::Numeral(step) => adjust_numeral(surface, step),
            Self::Link(kind) => link_field(surface, kind),
        }
    }
}

/// The outcome reported to the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommandResult {
    /// Command succeeded. Optional message for the status line.
    Ok(Option<String>),
    /// Command failed; the text is the status-line message.
    Err(String),
}

impl CommandResult {
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self, Self::Ok(_))
    }
}

/// Run `command` and fold its outcome into a status message.
pub fn execute(surface: &mut impl TextSurface, command: FieldCommand) -> CommandResult {
    match command.apply(surface) {
        Ok(edit) => CommandResult::Ok(command.status(&edit)),
        Err(err) => {
            log::debug!("{} refused: {err}", command.name());
            CommandResult::Err(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use n_editor::{BufferSurface, Position};

    #[test]
    fn execute_success() {
        let mut s = BufferSurface::from_text("Evans, Peter", Position::ZERO);
        assert_eq!(execute(&mut s, FieldCommand::Numeral(Step::Up)), CommandResult::Ok(None));
        assert_eq!(s.current_line(), "Evans, Peter (I)");
    }

    #[test]
    fn removing_a_numeral_reports_it() {
        let mut s = BufferSurface::from_text("Evans, Peter (II)", Position::ZERO);
        assert_eq!(execute(&mut s, FieldCommand::Numeral(Step::Down)), CommandResult::Ok(None));
        assert_eq!(
            execute(&mut s, FieldCommand::Numeral(Step::Down)),
            CommandResult::Ok(Some("Numeral removed".into()))
        );
        assert_eq!(s.current_line(), "Evans, Peter");
    }

    #[test]
    fn execute_failure_is_a_message() {
        let mut s = BufferSurface::from_text("Evans, Peter", Position::ZERO);
        assert_eq!(
            execute(&mut s, FieldCommand::Numeral(Step::Down)),
            CommandResult::Err("Nothing to do".into())
        );
        assert_eq!(
            execute(&mut s, FieldCommand::CopyField(Side::Previous)),
            CommandResult::Err("No previous line.".into())
        );
        assert_eq!(s.current_line(), "Evans, Peter");
    }

    #[test]
    fn command_names() {
        assert_eq!(FieldCommand::CopyField(Side::Next).name(), "copy-next");
        assert_eq!(FieldCommand::SwapName(2).name(), "swap-name");
        assert_eq!(FieldCommand::Link(LinkKind::Title).name(), "link-title");
    }
}
