//! Resolution tests for documented public alternatives.

use std::sync::Arc;
use std::thread;

use altlink::{AlternativesError, Catalog, Resolver};
use rstest::rstest;

use crate::helpers::catalog_fixtures::*;
use crate::helpers::outcome_assertions::*;

// =============================================================================
// SUCCESSFUL RESOLUTION
// =============================================================================

#[rstest]
#[case("Use {@link #show()} instead.")]
#[case("{@link #show}")]
#[case("{@link #setGravity}")]
#[case("{@link #LENGTH_LONG}")]
#[case("{@link Toast#setText(int)}")]
#[case("{@link android.widget.Toast#setText(java.lang.CharSequence)}")]
#[case("{@link android.content.Context}")]
#[case("{@link android.os.Bundle#putIntArray(java.lang.String, int[])}")]
#[case("{@link android.os.Bundle#putAll(android.os.Bundle[][])}")]
#[case("{@link #show()} and {@link android.content.Context#getSystemService}")]
fn test_resolves(#[case] text: &str) {
    assert_resolves(&public_catalog(), text);
}

#[test]
fn test_code_snippet_only_is_accepted() {
    assert_resolves(&public_catalog(), "{@code Foo f = new Foo();}");
}

// =============================================================================
// NAME-ONLY FALLBACK
// =============================================================================

#[test]
fn test_unique_name_resolves_without_parameters() {
    let catalog = Catalog::from_descriptors(["Landroid/widget/Toast;->foo(I)V"]).unwrap();
    assert_resolves(&catalog, "{@link #foo}");
}

#[test]
fn test_parameterless_overload_matches_exactly() {
    let catalog = Catalog::from_descriptors([
        "Landroid/widget/Toast;->foo()V",
        "Landroid/widget/Toast;->foo(I)V",
    ])
    .unwrap();
    assert_resolves(&catalog, "{@link #foo}");
}

#[test]
fn test_overloads_are_ambiguous() {
    let catalog = Catalog::from_descriptors([
        "Landroid/widget/Toast;->foo(I)V",
        "Landroid/widget/Toast;->foo(Ljava/lang/String;)V",
    ])
    .unwrap();
    match assert_rejected(&catalog, "{@link #foo}") {
        AlternativesError::MultipleAlternativesFound { candidates, .. } => {
            let rendered: Vec<_> = candidates.iter().map(ToString::to_string).collect();
            assert_eq!(
                rendered,
                vec![
                    "android.widget.Toast#foo(int)",
                    "android.widget.Toast#foo(java.lang.String)"
                ]
            );
        }
        other => panic!("Expected ambiguity, got {:?}", other),
    }
}

#[test]
fn test_explicit_wrong_parameters_are_not_excused() {
    let catalog = Catalog::from_descriptors(["Lfoo/Bar;->baz(I)V"]).unwrap();
    let err = assert_rejected(&catalog, "{@link foo.Bar#baz(long)}");
    assert!(matches!(err, AlternativesError::MemberAlternativeNotFound { .. }));
}

#[test]
fn test_parameter_text_is_compared_verbatim() {
    let err = assert_rejected(&public_catalog(), "{@link #setGravity(int,int,int)}");
    assert!(matches!(err, AlternativesError::MemberAlternativeNotFound { .. }));
}

// =============================================================================
// FAILURES
// =============================================================================

#[test]
fn test_unknown_class() {
    let err = assert_rejected(&public_catalog(), "{@link android.widget.Hidden}");
    assert!(matches!(err, AlternativesError::ClassAlternativeNotFound { .. }));
}

#[test]
fn test_first_failing_tag_is_reported() {
    let err = assert_rejected(
        &public_catalog(),
        "{@link #show} then {@link #missing} then {@link android.Nope}",
    );
    match err {
        AlternativesError::MemberAlternativeNotFound { tag, .. } => {
            assert_eq!(tag, "{@link #missing}");
        }
        other => panic!("Expected member not found, got {:?}", other),
    }
}

#[test]
fn test_text_without_tags() {
    let err = assert_rejected(&public_catalog(), "Use the public API.");
    assert_eq!(err, AlternativesError::NoAlternativesSpecified);
}

#[test]
fn test_empty_text_and_threshold() {
    let catalog = public_catalog();
    let resolver = Resolver::new(&catalog);
    assert_eq!(
        resolver.resolve(Some(""), CONTEXT, Some(29)),
        Err(AlternativesError::RequiredAlternativeNotSpecified { level: 29 })
    );
    assert_eq!(resolver.resolve(Some(""), CONTEXT, Some(28)), Ok(()));
    assert_eq!(resolver.resolve(None, CONTEXT, None), Ok(()));
}

#[test]
fn test_empty_catalog_rejects_links() {
    let catalog = Catalog::new();
    let err = assert_rejected(&catalog, "{@link #show}");
    assert!(matches!(err, AlternativesError::MemberAlternativeNotFound { .. }));
    assert_resolves(&catalog, "{@code show()}");
}

// =============================================================================
// DETERMINISM AND SHARING
// =============================================================================

#[test]
fn test_shared_catalog_across_threads() {
    let catalog = Arc::new(public_catalog());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let catalog = Arc::clone(&catalog);
            thread::spawn(move || {
                let resolver = Resolver::new(&catalog);
                (
                    resolver.resolve(Some("{@link #show}"), CONTEXT, Some(30)),
                    resolver.resolve(Some("{@link #setText}"), CONTEXT, Some(30)),
                )
            })
        })
        .collect();

    for handle in handles {
        let (ok, ambiguous) = handle.join().unwrap();
        assert_eq!(ok, Ok(()));
        assert!(matches!(
            ambiguous,
            Err(AlternativesError::MultipleAlternativesFound { .. })
        ));
    }
}
