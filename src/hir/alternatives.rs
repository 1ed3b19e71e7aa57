//! Alternative resolution: validating public-alternative documentation.
//!
//! A restricted member may document the public API that replaces it, using
//! `{@link ...}` tags (checked against the [`Catalog`]) or `{@code ...}`
//! snippets (accepted as-is). Resolution is fail-fast: the first bad link in
//! the text is the one reported.

use thiserror::Error;
use tracing::{debug, trace};

use super::catalog::Catalog;
use crate::parser::{
    DocLexer, DocTokenKind, ErrorCode, LinkSyntaxError, SignatureSyntaxError, parse_descriptor,
    parse_link,
};
use crate::syntax::MemberReference;

/// Target level from which a restricted member must name its alternatives.
pub const DEFAULT_MIN_LEVEL_REQUIRING_ALTERNATIVES: u32 = 29;

/// Why a member's alternatives were rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlternativesError {
    /// The member's own descriptor is malformed.
    #[error("invalid member signature: {0}")]
    SignatureSyntax(#[from] SignatureSyntaxError),

    /// A link body is malformed.
    #[error("invalid link {tag}: {source}")]
    LinkSyntax {
        tag: String,
        #[source]
        source: LinkSyntaxError,
    },

    /// A whole-class link names a class with no public members.
    #[error("class alternative {reference} in {tag} not found")]
    ClassAlternativeNotFound {
        tag: String,
        reference: MemberReference,
    },

    /// A member link matches no public member.
    #[error("member alternative {reference} in {tag} not found")]
    MemberAlternativeNotFound {
        tag: String,
        reference: MemberReference,
    },

    /// A link without parameters matches several public overloads.
    #[error("{tag} is ambiguous, candidates: {}", render_candidates(.candidates))]
    MultipleAlternativesFound {
        tag: String,
        reference: MemberReference,
        candidates: Vec<MemberReference>,
    },

    /// Text is present but has neither a link nor a code snippet.
    #[error("no {{@link}} or {{@code}} alternatives specified")]
    NoAlternativesSpecified,

    /// No alternatives text at a level that requires one.
    #[error("public alternatives are required for max target level {level}")]
    RequiredAlternativeNotSpecified { level: u32 },
}

impl AlternativesError {
    /// Categorized error code
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::SignatureSyntax(err) => err.code,
            Self::LinkSyntax { source, .. } => source.code,
            Self::ClassAlternativeNotFound { .. } => ErrorCode::E0301,
            Self::MemberAlternativeNotFound { .. } => ErrorCode::E0302,
            Self::MultipleAlternativesFound { .. } => ErrorCode::E0303,
            Self::NoAlternativesSpecified => ErrorCode::E0304,
            Self::RequiredAlternativeNotSpecified { .. } => ErrorCode::E0305,
        }
    }

    /// The offending `{@link ...}` tag, if the failure is tied to one.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Self::LinkSyntax { tag, .. }
            | Self::ClassAlternativeNotFound { tag, .. }
            | Self::MemberAlternativeNotFound { tag, .. }
            | Self::MultipleAlternativesFound { tag, .. } => Some(tag),
            _ => None,
        }
    }
}

fn render_candidates(candidates: &[MemberReference]) -> String {
    candidates
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Success, or the first failure found.
pub type ResolutionOutcome = Result<(), AlternativesError>;

/// Validates alternatives text against a [`Catalog`].
///
/// Holds no per-call state: resolving the same input twice gives the same
/// outcome, and one resolver can be used from many threads.
#[derive(Debug, Clone, Copy)]
pub struct Resolver<'a> {
    catalog: &'a Catalog,
    min_level_requiring_alternatives: u32,
}

impl<'a> Resolver<'a> {
    pub fn new(catalog: &'a Catalog) -> Self {
        Self {
            catalog,
            min_level_requiring_alternatives: DEFAULT_MIN_LEVEL_REQUIRING_ALTERNATIVES,
        }
    }

    /// Override the level from which alternatives are mandatory.
    pub fn with_min_level_requiring_alternatives(mut self, level: u32) -> Self {
        self.min_level_requiring_alternatives = level;
        self
    }

    pub fn catalog(&self) -> &'a Catalog {
        self.catalog
    }

    /// Validate `alternatives` documented on the member `context_descriptor`.
    ///
    /// `max_target_level` is the level up to which the member stays
    /// accessible; `None` means unrestricted.
    pub fn resolve(
        &self,
        alternatives: Option<&str>,
        context_descriptor: &str,
        max_target_level: Option<u32>,
    ) -> ResolutionOutcome {
        let context = parse_descriptor(context_descriptor)?;

        let Some(text) = alternatives.filter(|text| !text.is_empty()) else {
            return match max_target_level {
                Some(level) if level >= self.min_level_requiring_alternatives => {
                    Err(AlternativesError::RequiredAlternativeNotSpecified { level })
                }
                _ => Ok(()),
            };
        };

        let mut found_link = false;
        let mut found_code = false;
        for token in DocLexer::new(text) {
            match token.kind {
                DocTokenKind::Link => {
                    found_link = true;
                    let body = token.body().unwrap_or_default();
                    self.resolve_link(token.text, body, &context)?;
                }
                DocTokenKind::Code => found_code = true,
                DocTokenKind::Text => {}
            }
        }

        if !found_link && !found_code {
            return Err(AlternativesError::NoAlternativesSpecified);
        }
        Ok(())
    }

    /// Check a single link body; `tag` is the full tag text for diagnostics.
    pub fn resolve_link(
        &self,
        tag: &str,
        body: &str,
        context: &MemberReference,
    ) -> ResolutionOutcome {
        let reference = parse_link(body, context).map_err(|source| AlternativesError::LinkSyntax {
            tag: tag.to_string(),
            source,
        })?;
        trace!("[RESOLVE_LINK] {} -> {}", tag, reference);

        if reference.is_class_reference() {
            if self
                .catalog
                .contains_class(reference.package(), reference.class_name())
            {
                return Ok(());
            }
            return Err(AlternativesError::ClassAlternativeNotFound {
                tag: tag.to_string(),
                reference,
            });
        }

        if self.catalog.contains_exact(&reference) {
            return Ok(());
        }

        // An explicit parameter list must match exactly.
        if reference.has_parameters() {
            return Err(AlternativesError::MemberAlternativeNotFound {
                tag: tag.to_string(),
                reference,
            });
        }

        let candidates = self.catalog.name_matches(&reference);
        debug!(
            "[RESOLVE_LINK] name-only fallback for {}: {} candidate(s)",
            reference,
            candidates.len()
        );
        match candidates.len() {
            1 => Ok(()),
            0 => Err(AlternativesError::MemberAlternativeNotFound {
                tag: tag.to_string(),
                reference,
            }),
            _ => Err(AlternativesError::MultipleAlternativesFound {
                tag: tag.to_string(),
                candidates: candidates.into_iter().cloned().collect(),
                reference,
            }),
        }
    }
}
