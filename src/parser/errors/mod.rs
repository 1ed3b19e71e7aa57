//! Parser error handling module
//!
//! - Categorized error codes for filtering and documentation
//! - Syntax errors for both grammars, carrying the unparsed input

mod codes;
mod error;

pub use codes::ErrorCode;
pub use error::{LinkSyntaxError, SignatureSyntaxError};
