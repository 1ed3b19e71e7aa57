//! # altlink
//!
//! Member descriptor and documentation link parsing, with resolution of
//! documented public alternatives against a catalog of public API members.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! project   → Policy config, catalog loading, batch annotation checking
//!   ↓
//! hir       → Catalog, alternative Resolver, diagnostics
//!   ↓
//! parser    → Descriptor and link parsers, logos doc-tag lexer, error codes
//!   ↓
//! syntax    → MemberReference data model
//!   ↓
//! base      → Cursor, text offsets
//! ```

// ============================================================================
// MODULES (dependency order: base → syntax → parser → hir → project)
// ============================================================================

/// Foundation types: Cursor, TextSize
pub mod base;

/// Syntax: the canonical MemberReference
pub mod syntax;

/// Parser: packed descriptors, link bodies, documentation tags
pub mod parser;

/// Semantic layer: Catalog, Resolver, Diagnostic
pub mod hir;

/// Project plumbing: policy, catalog loading, annotation checking
pub mod project;

// Re-export commonly needed items
pub use hir::{AlternativesError, Catalog, Diagnostic, ResolutionOutcome, Resolver};
pub use parser::{LinkSyntaxError, SignatureSyntaxError, parse_descriptor, parse_link};
pub use project::{AlternativesChecker, AnnotatedMember, CatalogLoader, PolicyConfig};
pub use syntax::MemberReference;
