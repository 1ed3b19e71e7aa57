//! Error code definitions for diagnostics
//!
//! Error codes follow a naming convention: E{category}{number}
//! - E01xx: Member descriptor syntax errors
//! - E02xx: Documentation link syntax errors
//! - E03xx: Alternative resolution failures
//! - E04xx: Annotation policy errors

use std::fmt;

/// Error codes for parse and resolution diagnostics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // E01xx: Member descriptor syntax
    // =========================================================================
    /// Class part does not start with `L`
    E0101,
    /// Class part is not terminated by `;`
    E0102,
    /// Missing `->` between class and member
    E0103,
    /// Member has neither `(` nor `:`
    E0104,
    /// Unknown type character
    E0105,
    /// Descriptor ended mid-grammar
    E0106,

    // =========================================================================
    // E02xx: Documentation link syntax
    // =========================================================================
    /// Missing closing parenthesis in a link
    E0201,
    /// Link ended mid-grammar
    E0202,

    // =========================================================================
    // E03xx: Alternative resolution
    // =========================================================================
    /// Linked class is not public
    E0301,
    /// Linked member is not public
    E0302,
    /// Link matches more than one public member
    E0303,
    /// Alternatives text carries no usable tag
    E0304,
    /// Alternatives are required but absent
    E0305,

    // =========================================================================
    // E04xx: Annotation policy
    // =========================================================================
    /// Annotated signature differs from the expected one
    E0401,
    /// Threshold has no flag in the policy table
    E0402,
}

impl ErrorCode {
    /// Get the string representation of the error code (e.g., "E0201")
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::E0101 => "E0101",
            Self::E0102 => "E0102",
            Self::E0103 => "E0103",
            Self::E0104 => "E0104",
            Self::E0105 => "E0105",
            Self::E0106 => "E0106",
            Self::E0201 => "E0201",
            Self::E0202 => "E0202",
            Self::E0301 => "E0301",
            Self::E0302 => "E0302",
            Self::E0303 => "E0303",
            Self::E0304 => "E0304",
            Self::E0305 => "E0305",
            Self::E0401 => "E0401",
            Self::E0402 => "E0402",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::E0101 | Self::E0102 | Self::E0103 | Self::E0104 | Self::E0105 | Self::E0106 => {
                "signature syntax error"
            }
            Self::E0201 | Self::E0202 => "link syntax error",
            Self::E0301 | Self::E0302 | Self::E0303 | Self::E0304 | Self::E0305 => {
                "alternative error"
            }
            Self::E0401 | Self::E0402 => "policy error",
        }
    }

    /// Get the default message template for this error code
    pub fn default_message(&self) -> &'static str {
        match self {
            Self::E0101 => "expected 'L' at start of class name",
            Self::E0102 => "missing ';' after class name",
            Self::E0103 => "expected '->' after class name",
            Self::E0104 => "expected '(' or ':' after member name",
            Self::E0105 => "unknown type character",
            Self::E0106 => "unexpected end of input",
            Self::E0201 => "missing closing parenthesis",
            Self::E0202 => "unexpected end of input",
            Self::E0301 => "class alternative not found",
            Self::E0302 => "member alternative not found",
            Self::E0303 => "multiple alternatives found",
            Self::E0304 => "no alternatives specified",
            Self::E0305 => "required alternative not specified",
            Self::E0401 => "signature mismatch",
            Self::E0402 => "invalid target level",
        }
    }

    /// Check if this is a syntax error in either grammar
    pub fn is_syntax(&self) -> bool {
        matches!(
            self,
            Self::E0101
                | Self::E0102
                | Self::E0103
                | Self::E0104
                | Self::E0105
                | Self::E0106
                | Self::E0201
                | Self::E0202
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
