//! Batch checking of annotated members.

use altlink::parser::ErrorCode;
use altlink::project::{FlagEntry, PolicyError};
use altlink::{AlternativesChecker, AnnotatedMember, PolicyConfig};

use crate::helpers::catalog_fixtures::*;

fn members() -> Vec<AnnotatedMember> {
    vec![
        AnnotatedMember::new("Landroid/widget/Toast;->mNextView:Landroid/view/View;")
            .with_max_target_level(29)
            .with_public_alternatives("Use {@link #setText(int)}."),
        AnnotatedMember::new("Landroid/widget/Toast;->mDuration:I")
            .with_expected_signature("Landroid/widget/Toast;->mDuration:J"),
        AnnotatedMember::new("Landroid/widget/Toast;->getWindowParams()V")
            .with_max_target_level(30),
        AnnotatedMember::new("Landroid/widget/Toast;->mTN:I"),
        AnnotatedMember::new("Landroid/widget/Toast;->mGravity:I").with_max_target_level(25),
        AnnotatedMember::new("Landroid/widget/Toast;->mX:I")
            .with_max_target_level(28)
            .with_public_alternatives("{@link #setGravity}"),
    ]
}

#[test]
fn test_check_all_reports_every_member() {
    let catalog = public_catalog();
    let policy = PolicyConfig::default();
    let report = AlternativesChecker::new(&catalog, &policy).check_all(&members());

    assert_eq!(
        report.flags,
        vec![
            FlagEntry {
                signature: "Landroid/widget/Toast;->mNextView:Landroid/view/View;".into(),
                flag: "max-target-q".into(),
            },
            FlagEntry {
                signature: "Landroid/widget/Toast;->mTN:I".into(),
                flag: "unsupported".into(),
            },
            FlagEntry {
                signature: "Landroid/widget/Toast;->mX:I".into(),
                flag: "max-target-p".into(),
            },
        ]
    );

    let codes: Vec<_> = report.findings.iter().map(|f| f.error.code()).collect();
    assert_eq!(codes, vec![ErrorCode::E0401, ErrorCode::E0305, ErrorCode::E0402]);
    assert!(matches!(
        report.findings[2].error,
        PolicyError::InvalidThreshold { level: 25 }
    ));
}

#[test]
fn test_check_all_is_deterministic() {
    let catalog = public_catalog();
    let policy = PolicyConfig::default();
    let checker = AlternativesChecker::new(&catalog, &policy);
    assert_eq!(checker.check_all(&members()), checker.check_all(&members()));
}

#[test]
fn test_diagnostics_include_member_signature() {
    let catalog = public_catalog();
    let policy = PolicyConfig::default();
    let report = AlternativesChecker::new(&catalog, &policy).check_all(&members());

    let rendered: Vec<_> = report.diagnostics().map(|d| d.to_string()).collect();
    assert_eq!(rendered.len(), 3);
    assert!(rendered[1].starts_with("error[E0305]: Landroid/widget/Toast;->getWindowParams()V"));
}

#[test]
fn test_empty_batch() {
    let catalog = public_catalog();
    let policy = PolicyConfig::default();
    let report = AlternativesChecker::new(&catalog, &policy).check_all(&[]);
    assert!(report.is_clean());
    assert!(report.flags.is_empty());
}
