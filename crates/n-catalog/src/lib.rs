//! # n-catalog: Keyword reference data for n-submit
//!
//! - **[`keyword`]**: the immutable table of record-type descriptors
//! - **[`help`]**: help pages rendered from a descriptor
//! - **[`template`]**: submission skeletons with `${name}` placeholders
//! - **[`highlight`]**: per-line syntax highlighting spans
//!
//! ```text
//!             keyword::all() / lookup()
//!                 │
//!      ┌──────────┼───────────────┐
//!      ▼          ▼               ▼
//!   help.rs   template.rs    highlight.rs
//! ```

pub mod error;
pub mod help;
pub mod highlight;
pub mod keyword;
pub mod template;

pub use error::CatalogError;
pub use help::{HelpOptions, render_help, render_index};
pub use highlight::{HighlightKind, Span, highlight_line};
pub use keyword::{HelpContent, KeywordDescriptor, KeywordId};
pub use template::Submitter;
