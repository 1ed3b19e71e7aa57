//! Grammar-level syntax errors
//!
//! Each error keeps the unparsed tail of the input so a caller can show
//! exactly where parsing stopped.

use text_size::TextSize;
use thiserror::Error;

use super::codes::ErrorCode;
use crate::base::{Cursor, CursorOutOfBounds};

/// A malformed packed member descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: \"{remaining}\"")]
pub struct SignatureSyntaxError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Input left unparsed when the error was detected
    pub remaining: String,
    /// Byte offset of the failure
    pub offset: TextSize,
}

impl SignatureSyntaxError {
    /// Create an error at the cursor's current position
    pub fn at(cursor: &Cursor<'_>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            remaining: cursor.remaining().to_string(),
            offset: cursor.offset(),
        }
    }

    /// Create an error using the code's default message
    pub fn with_default_message(cursor: &Cursor<'_>, code: ErrorCode) -> Self {
        Self::at(cursor, code, code.default_message())
    }

    /// Translate a cursor overrun
    pub fn end_of_input(cursor: &Cursor<'_>, _source: CursorOutOfBounds) -> Self {
        Self::with_default_message(cursor, ErrorCode::E0106)
    }
}

/// A malformed documentation link body.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}: \"{remaining}\"")]
pub struct LinkSyntaxError {
    /// Categorized error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Input left unparsed when the error was detected
    pub remaining: String,
    /// Byte offset of the failure
    pub offset: TextSize,
}

impl LinkSyntaxError {
    /// Create an error at the cursor's current position
    pub fn at(cursor: &Cursor<'_>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            remaining: cursor.remaining().to_string(),
            offset: cursor.offset(),
        }
    }

    /// Create an error using the code's default message
    pub fn with_default_message(cursor: &Cursor<'_>, code: ErrorCode) -> Self {
        Self::at(cursor, code, code.default_message())
    }

    /// Translate a cursor overrun
    pub fn end_of_input(cursor: &Cursor<'_>, _source: CursorOutOfBounds) -> Self {
        Self::with_default_message(cursor, ErrorCode::E0202)
    }
}
