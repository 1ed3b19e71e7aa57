//! Parsers for the two member-reference grammars
//!
//! - [`parse_descriptor`] – packed member descriptors (`Lfoo/Bar;->baz(I)V`)
//! - [`parse_link`] – `{@link}` bodies (`foo.Bar#baz(int)`), resolved against a context member
//! - [`DocLexer`] – splits alternatives text into link/code tags

mod descriptor;
mod doc_lexer;
pub mod errors;
mod link;

pub use descriptor::{parse_descriptor, primitive_name};
pub use doc_lexer::{DocLexer, DocToken, DocTokenKind, tokenize};
pub use errors::{ErrorCode, LinkSyntaxError, SignatureSyntaxError};
pub use link::parse_link;
