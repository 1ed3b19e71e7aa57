//! Foundation types.
//!
//! - [`Cursor`] - bounds-checked scanner used by both parsers
//! - [`TextSize`] - byte offsets reported in errors
//!
//! This module has NO dependencies on other altlink modules.

mod cursor;

pub use cursor::{Cursor, CursorOutOfBounds};

// Re-export text-size types for convenience
pub use text_size::{self, TextSize};
