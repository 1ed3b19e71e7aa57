//! Per-member annotation checking.
//!
//! Each restricted member arrives with its descriptor, an optional expected
//! descriptor, an optional max target level and optional alternatives text.
//! A member either gets a flag or a [`Finding`]; a bad member never stops the
//! rest of the batch.

use std::fmt;

use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use super::policy::PolicyConfig;
use crate::hir::{AlternativesError, Catalog, Diagnostic, Resolver};
use crate::parser::ErrorCode;

/// A restricted member as supplied by the annotation extractor.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnnotatedMember {
    /// Packed descriptor of the annotated member.
    pub signature: String,
    /// Descriptor written in the annotation, if any.
    pub expected_signature: Option<String>,
    /// Level up to which the member stays accessible.
    pub max_target_level: Option<u32>,
    /// Free-text public alternatives.
    pub public_alternatives: Option<String>,
}

impl AnnotatedMember {
    pub fn new(signature: impl Into<String>) -> Self {
        Self {
            signature: signature.into(),
            ..Self::default()
        }
    }

    pub fn with_expected_signature(mut self, expected: impl Into<String>) -> Self {
        self.expected_signature = Some(expected.into());
        self
    }

    pub fn with_max_target_level(mut self, level: u32) -> Self {
        self.max_target_level = Some(level);
        self
    }

    pub fn with_public_alternatives(mut self, text: impl Into<String>) -> Self {
        self.public_alternatives = Some(text.into());
        self
    }
}

/// Why an annotated member failed policy.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PolicyError {
    #[error("expected signature {expected} does not match {actual}")]
    SignatureMismatch { expected: String, actual: String },

    #[error("max target level {level} is not one of the allowed levels")]
    InvalidThreshold { level: u32 },

    #[error(transparent)]
    Alternatives(#[from] AlternativesError),
}

impl PolicyError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SignatureMismatch { .. } => ErrorCode::E0401,
            Self::InvalidThreshold { .. } => ErrorCode::E0402,
            Self::Alternatives(err) => err.code(),
        }
    }
}

/// A member that passed, with the flag it is emitted under.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FlagEntry {
    pub signature: String,
    pub flag: String,
}

impl fmt::Display for FlagEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.signature, self.flag)
    }
}

/// A member that failed policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub signature: String,
    pub error: PolicyError,
}

impl Finding {
    pub fn diagnostic(&self) -> Diagnostic {
        match &self.error {
            PolicyError::Alternatives(err) => Diagnostic::from_alternatives(&self.signature, err),
            other => Diagnostic::error(&self.signature, other.code(), other.to_string()),
        }
    }
}

/// Outcome of checking a batch, in input order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub flags: Vec<FlagEntry>,
    pub findings: Vec<Finding>,
}

impl CheckReport {
    /// True when every member passed.
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }

    pub fn diagnostics(&self) -> impl Iterator<Item = Diagnostic> + '_ {
        self.findings.iter().map(Finding::diagnostic)
    }
}

/// Applies [`PolicyConfig`] and alternative resolution to annotated members.
#[derive(Debug, Clone, Copy)]
pub struct AlternativesChecker<'a> {
    resolver: Resolver<'a>,
    policy: &'a PolicyConfig,
}

impl<'a> AlternativesChecker<'a> {
    pub fn new(catalog: &'a Catalog, policy: &'a PolicyConfig) -> Self {
        let resolver = Resolver::new(catalog)
            .with_min_level_requiring_alternatives(policy.min_level_requiring_alternatives);
        Self { resolver, policy }
    }

    /// Check one member and return the flag it should be emitted with.
    pub fn check(&self, member: &AnnotatedMember) -> Result<FlagEntry, PolicyError> {
        if let Some(expected) = &member.expected_signature {
            if expected != &member.signature {
                return Err(PolicyError::SignatureMismatch {
                    expected: expected.clone(),
                    actual: member.signature.clone(),
                });
            }
        }

        let flag = self
            .policy
            .flag_for(member.max_target_level)
            .ok_or(PolicyError::InvalidThreshold {
                level: member.max_target_level.unwrap_or_default(),
            })?;

        self.resolver.resolve(
            member.public_alternatives.as_deref(),
            &member.signature,
            member.max_target_level,
        )?;

        Ok(FlagEntry {
            signature: member.signature.clone(),
            flag: flag.to_string(),
        })
    }

    /// Check every member. Members are processed in parallel; the report keeps
    /// input order.
    pub fn check_all(&self, members: &[AnnotatedMember]) -> CheckReport {
        let outcomes: Vec<_> = members
            .par_iter()
            .map(|member| (member, self.check(member)))
            .collect();

        let mut report = CheckReport::default();
        for (member, outcome) in outcomes {
            match outcome {
                Ok(entry) => report.flags.push(entry),
                Err(error) => {
                    warn!("{}: {}", member.signature, error);
                    report.findings.push(Finding {
                        signature: member.signature.clone(),
                        error,
                    });
                }
            }
        }
        debug!(
            "Checked {} members: {} flagged, {} failed",
            members.len(),
            report.flags.len(),
            report.findings.len()
        );
        report
    }
}
