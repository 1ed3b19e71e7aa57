//! Diagnostics: human-readable reports for rejected members.
//!
//! A diagnostic always names the member's own descriptor, and carries the
//! offending tag and ambiguous candidates when the failure has them.

use std::fmt;

use super::alternatives::AlternativesError;
use crate::parser::ErrorCode;

// ============================================================================
// DIAGNOSTIC TYPES
// ============================================================================

/// A report about one annotated member.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Descriptor of the member the report is about.
    pub signature: String,
    /// Error code.
    pub code: ErrorCode,
    /// The diagnostic message.
    pub message: String,
    /// The `{@link ...}` tag that failed, if any.
    pub tag: Option<String>,
    /// Candidates of an ambiguous link, in display form.
    pub candidates: Vec<String>,
}

impl Diagnostic {
    /// Create a new error diagnostic.
    pub fn error(signature: impl Into<String>, code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            code,
            message: message.into(),
            tag: None,
            candidates: Vec::new(),
        }
    }

    /// Set the offending tag.
    pub fn with_tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = Some(tag.into());
        self
    }

    /// Build a diagnostic for a rejected alternatives text.
    pub fn from_alternatives(signature: impl Into<String>, error: &AlternativesError) -> Self {
        let mut diagnostic = Self::error(signature, error.code(), error.to_string());
        if let Some(tag) = error.tag() {
            diagnostic = diagnostic.with_tag(tag);
        }
        if let AlternativesError::MultipleAlternativesFound { candidates, .. } = error {
            diagnostic.candidates = candidates.iter().map(ToString::to_string).collect();
        }
        diagnostic
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "error[{}]: {}: {}",
            self.code,
            self.signature,
            self.message
        )?;
        for candidate in &self.candidates {
            write!(f, "\n  candidate: {}", candidate)?;
        }
        Ok(())
    }
}
