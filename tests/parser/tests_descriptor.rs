//! Descriptor parsing against realistic public API entries.

use altlink::parser::ErrorCode;
use altlink::{MemberReference, parse_descriptor};
use rstest::rstest;

use crate::helpers::catalog_fixtures::PUBLIC_API;

#[test]
fn test_every_fixture_descriptor_parses() {
    for descriptor in PUBLIC_API {
        assert!(
            parse_descriptor(descriptor).is_ok(),
            "Failed to parse fixture {}",
            descriptor
        );
    }
}

#[rstest]
#[case("Lfoo/bar/Baz;->foo(IILfoo/bar/Qux;)V", "foo.bar", "Baz", "foo", "int, int, foo.bar.Qux")]
#[case("Lfoo/Bar;->m([[I)V", "foo", "Bar", "m", "int[][]")]
#[case("Landroid/os/Bundle;->putAll([[Landroid/os/Bundle;)V", "android.os", "Bundle", "putAll", "android.os.Bundle[][]")]
#[case("Landroid/widget/Toast;->LENGTH_LONG:I", "android.widget", "Toast", "LENGTH_LONG", "")]
#[case("Landroid/widget/Toast;-><init>(Landroid/content/Context;)V", "android.widget", "Toast", "<init>", "android.content.Context")]
fn test_descriptor_components(
    #[case] descriptor: &str,
    #[case] package: &str,
    #[case] class: &str,
    #[case] member: &str,
    #[case] parameters: &str,
) {
    let reference = parse_descriptor(descriptor).unwrap();
    assert_eq!(reference, MemberReference::new(package, class, member, parameters));
}

#[test]
fn test_display_round_trip_of_components() {
    let reference = parse_descriptor("Lfoo/bar/Baz;->foo(IILfoo/bar/Qux;)V").unwrap();
    assert_eq!(reference.to_string(), "foo.bar.Baz#foo(int, int, foo.bar.Qux)");
    assert_eq!(
        reference.parameter_types().collect::<Vec<_>>(),
        vec!["int", "int", "foo.bar.Qux"]
    );
}

#[rstest]
#[case("Lfoo/Bar->m()V")]
#[case("Lfoo/Bar;->m(Lfoo/Qux)V")]
#[case("Lfoo/Bar;->x:Lfoo/Qux")]
fn test_missing_semicolon_is_always_an_error(#[case] descriptor: &str) {
    let err = parse_descriptor(descriptor).unwrap_err();
    assert_eq!(err.code, ErrorCode::E0102, "{}", descriptor);
}

#[test]
fn test_truncated_descriptor_reports_end_of_input() {
    let err = parse_descriptor("Lfoo/Bar;->m(II").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0106);
    assert_eq!(err.message, "unexpected end of input");
    assert_eq!(err.remaining, "");
}

#[test]
fn test_member_without_shape_cites_offset() {
    let err = parse_descriptor("Lfoo/Bar;->member").unwrap_err();
    assert_eq!(err.code, ErrorCode::E0104);
    assert_eq!(err.message, "cannot parse member at offset 11");
    assert_eq!(err.remaining, "member");
}
