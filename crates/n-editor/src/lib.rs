//! # n-editor: Host substrate for n-submit
//!
//! The pieces a field command needs from an editor, without the editor:
//!
//! - **[`position`]**: `Position` (line, col) and `Range` types, 0-indexed
//! - **[`buffer`]**: `Buffer` wrapping a rope with editing, file I/O, and metadata
//! - **[`surface`]**: the `TextSurface` capability and its `Buffer`-backed form

pub mod buffer;
pub mod position;
pub mod surface;

pub use buffer::Buffer;
pub use position::{Position, Range};
pub use surface::{BufferSurface, Side, TextSurface};
