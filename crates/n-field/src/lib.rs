//! # n-field: Field-oriented line transforms
//!
//! Everything here works on one line of a submission file around a cursor:
//!
//! - **[`field`]**: which `|`-delimited field (or tag-line body) the cursor is in
//! - **[`copy`]**: copy that field from the previous or next line
//! - **[`name`]**: turn `First Last` into `Last, First`
//! - **[`numeral`]**: step a `(III)` disambiguation suffix up or down
//! - **[`link`]**: add `(qv)` cross-reference markup
//! - **[`command`]**: the above as values with status-message results
//!
//! Each operation has a pure `plan_*` form returning an [`Edit`] and a
//! surface form that applies it through [`n_editor::TextSurface`]. A refused
//! operation returns a [`FieldError`] and changes nothing.

pub mod command;
pub mod copy;
pub mod edit;
pub mod error;
pub mod field;
pub mod link;
pub mod name;
pub mod numeral;

pub use command::{CommandResult, FieldCommand, execute};
pub use edit::Edit;
pub use error::FieldError;
pub use link::LinkKind;
pub use numeral::Step;
