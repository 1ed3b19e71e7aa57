//! Semantic layer: the public-member catalog and alternative resolution.
//!
//! - [`Catalog`] – immutable set of known public members
//! - [`Resolver`] – validates `{@link}`/`{@code}` alternatives against a catalog
//! - [`Diagnostic`] – human-readable reports for failures

mod alternatives;
mod catalog;
mod diagnostics;

pub use alternatives::{
    AlternativesError, DEFAULT_MIN_LEVEL_REQUIRING_ALTERNATIVES, ResolutionOutcome, Resolver,
};
pub use catalog::{Catalog, InvalidEntries};
pub use diagnostics::Diagnostic;
