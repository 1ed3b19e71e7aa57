//! HIR layer tests
//!
//! - Alternative resolution against a public catalog
//! - Ambiguity and fail-fast policy
//! - Diagnostics rendering
//! - Concurrent use of a shared catalog

mod tests_diagnostics;
mod tests_resolution;
