//! Diagnostics rendered from resolution failures.

use altlink::Diagnostic;
use altlink::parser::ErrorCode;

use crate::helpers::catalog_fixtures::*;
use crate::helpers::outcome_assertions::*;

#[test]
fn test_diagnostic_names_member_and_tag() {
    let err = assert_rejected(&public_catalog(), "{@link #missing()}");
    let diagnostic = Diagnostic::from_alternatives(CONTEXT, &err);
    assert_eq!(diagnostic.signature, CONTEXT);
    assert_eq!(diagnostic.code, ErrorCode::E0302);
    assert_eq!(diagnostic.tag.as_deref(), Some("{@link #missing()}"));
    assert!(diagnostic.to_string().contains(CONTEXT));
}

#[test]
fn test_diagnostic_lists_ambiguous_candidates() {
    let err = assert_rejected(&public_catalog(), "{@link #setText}");
    let diagnostic = Diagnostic::from_alternatives(CONTEXT, &err);
    assert_eq!(
        diagnostic.candidates,
        vec![
            "android.widget.Toast#setText(int)",
            "android.widget.Toast#setText(java.lang.CharSequence)"
        ]
    );
}

#[test]
fn test_link_syntax_diagnostic() {
    let err = assert_rejected(&public_catalog(), "{@link #setText(int}");
    let diagnostic = Diagnostic::from_alternatives(CONTEXT, &err);
    assert_eq!(diagnostic.code, ErrorCode::E0201);
    assert!(diagnostic.message.contains("missing closing parenthesis"));
}
